//! Staff roles that drive sidebar visibility

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Staff role selected in the sidebar
///
/// The active role only decides which menu entries are shown. It is not an
/// access-control boundary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Manager,
    FrontDesk,
    Housekeeping,
    Marketing,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Manager,
        Role::FrontDesk,
        Role::Housekeeping,
        Role::Marketing,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::FrontDesk => "front-desk",
            Role::Housekeeping => "housekeeping",
            Role::Marketing => "marketing",
        }
    }

    /// Button label: each dash-separated word capitalised ("Front Desk")
    pub fn label(&self) -> String {
        self.id()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn shortcut(&self) -> char {
        match self {
            Role::Manager => '1',
            Role::FrontDesk => '2',
            Role::Housekeeping => '3',
            Role::Marketing => '4',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.shortcut() == key)
    }

    /// Next role in declaration order, wrapping around
    pub fn cycle(&self, forward: bool) -> Role {
        let len = Role::ALL.len();
        let idx = Role::ALL.iter().position(|r| r == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Role::ALL[next]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace(['_', ' '], "-");
        match needle.as_str() {
            "manager" | "mgr" => Ok(Role::Manager),
            "front-desk" | "frontdesk" | "desk" => Ok(Role::FrontDesk),
            "housekeeping" | "hk" => Ok(Role::Housekeeping),
            "marketing" | "mkt" => Ok(Role::Marketing),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_capitalise_each_word() {
        assert_eq!(Role::Manager.label(), "Manager");
        assert_eq!(Role::FrontDesk.label(), "Front Desk");
        assert_eq!(Role::Housekeeping.label(), "Housekeeping");
    }

    #[test]
    fn test_parse_accepts_ids_and_aliases() {
        assert_eq!("front-desk".parse::<Role>(), Ok(Role::FrontDesk));
        assert_eq!("Front Desk".parse::<Role>(), Ok(Role::FrontDesk));
        assert_eq!(" HK ".parse::<Role>(), Ok(Role::Housekeeping));
        assert_eq!(
            "owner".parse::<Role>(),
            Err(ParseError::UnknownRole("owner".to_string()))
        );
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Role::Marketing.cycle(true), Role::Manager);
        assert_eq!(Role::Manager.cycle(false), Role::Marketing);
        assert_eq!(Role::FrontDesk.cycle(true), Role::Housekeeping);
    }

    #[test]
    fn test_shortcuts_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_shortcut(role.shortcut()), Some(role));
        }
        assert_eq!(Role::from_shortcut('9'), None);
    }
}
