//! Shared context passed to modules

use crate::nav::{Role, ViewId};

/// The two pieces of navigation state the shell owns
///
/// Both cells are replaced wholesale by their setters; nothing else writes
/// them.
#[derive(Debug, Clone, Default)]
pub struct Context {
    role: Role,
    view: ViewId,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(role: Role, view: ViewId) -> Self {
        Self { role, view }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Replace the active role. Returns the previous one.
    pub fn set_role(&mut self, role: Role) -> Role {
        std::mem::replace(&mut self.role, role)
    }

    /// Replace the active view. Returns the previous one.
    pub fn set_view(&mut self, view: ViewId) -> ViewId {
        std::mem::replace(&mut self.view, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_manager_on_dashboard() {
        let ctx = Context::new();
        assert_eq!(ctx.role(), Role::Manager);
        assert_eq!(ctx.view(), ViewId::Dashboard);
    }

    #[test]
    fn test_setters_replace_and_return_previous() {
        let mut ctx = Context::new();
        assert_eq!(ctx.set_view(ViewId::Rooms), ViewId::Dashboard);
        assert_eq!(ctx.set_view(ViewId::Analytics), ViewId::Rooms);
        assert_eq!(ctx.view(), ViewId::Analytics);
        assert_eq!(ctx.set_role(Role::Marketing), Role::Manager);
    }
}
