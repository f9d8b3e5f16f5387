//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    View(String),
    Home,

    // Role selection
    Role(String),

    // Export of the visible menu; format taken from the argument when present
    Export(Option<String>),

    // Shell
    Settings,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "view" | "go" | "open" => {
            if let Some(view) = args {
                Command::View(view)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "home" => Command::Home,

        // Roles
        "role" | "as" => {
            if let Some(role) = args {
                Command::Role(role)
            } else {
                Command::Unknown(input.to_string())
            }
        }

        "export" | "exp" => Command::Export(args),

        "settings" | "set" => Command::Settings,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
