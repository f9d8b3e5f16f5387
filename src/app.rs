use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::{Action, Command, Context, Module, NotifyLevel};
use crate::modules::export::{self, ExportFormat};
use crate::modules::screens::{self, Screen};
use crate::modules::{ContentPanel, RoleBar, Sidebar};
use crate::nav::{filter_menu, MenuEntry, Role, ViewId, MENU};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Roles,
    Menu,
    Content,
    Command,
}

impl Focus {
    /// Tab order through the panes
    pub fn next(self) -> Focus {
        match self {
            Focus::Roles => Focus::Menu,
            Focus::Menu => Focus::Content,
            Focus::Content | Focus::Command => Focus::Roles,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Roles => Focus::Content,
            Focus::Menu | Focus::Command => Focus::Roles,
            Focus::Content => Focus::Menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

/// Application state for the dashboard shell
///
/// Owns the active role and view (inside `ctx`) and the UI-only state around
/// them. Everything is mutated through the methods below.
#[derive(Debug)]
pub struct App {
    /// Active role and view
    pub ctx: Context,
    pub role_bar: RoleBar,
    pub sidebar: Sidebar,
    pub content: ContentPanel,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    /// Where interactive exports go; `None` means the data directory
    pub export_dir: Option<PathBuf>,
    /// Config file read at startup, shown in the settings popup
    pub config_path: Option<PathBuf>,
    pub help_open: bool,
    pub settings_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_startup(Role::default(), ViewId::HOME)
    }

    pub fn with_startup(role: Role, view: ViewId) -> Self {
        let ctx = Context::with(role, view);
        let mut app = Self {
            ctx,
            role_bar: RoleBar::new(),
            sidebar: Sidebar::new(),
            content: ContentPanel::new(),
            focus: Focus::Menu,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            export_dir: None,
            config_path: None,
            help_open: false,
            settings_open: false,
            should_quit: false,
        };
        app.role_bar.sync(&app.ctx);
        app.sidebar.sync(&app.ctx);
        app
    }

    pub fn role(&self) -> Role {
        self.ctx.role()
    }

    pub fn view(&self) -> ViewId {
        self.ctx.view()
    }

    /// Menu entries the active role can see
    pub fn visible_menu(&self) -> Vec<&'static MenuEntry> {
        filter_menu(&MENU, self.role())
    }

    pub fn current_screen(&self) -> &'static Screen {
        screens::screen(self.view())
    }

    /// Replace the active role. The active view is left as is.
    pub fn select_role(&mut self, role: Role) {
        let previous = self.ctx.set_role(role);
        if previous != role {
            tracing::info!(from = %previous, to = %role, "role changed");
        }
        self.role_bar.sync(&self.ctx);
        self.sidebar.sync(&self.ctx);
    }

    pub fn cycle_role(&mut self, forward: bool) {
        self.apply_action(Action::SelectRole(self.role().cycle(forward)));
    }

    /// Replace the active view
    pub fn select_view(&mut self, view: ViewId) {
        let previous = self.ctx.set_view(view);
        if previous != view {
            tracing::info!(from = %previous, to = %view, "view changed");
            self.content.reset();
        }
        self.sidebar.sync(&self.ctx);
    }

    /// Navigate by raw identifier; anything but an exact id lands on the home view
    pub fn navigate(&mut self, view_id: &str) {
        let view = ViewId::from_id(view_id).unwrap_or_else(|| {
            tracing::debug!(view_id, "unknown view id, routing to home view");
            ViewId::HOME
        });
        self.select_view(view);
    }

    pub fn move_menu_cursor(&mut self, up: bool) {
        let role = self.role();
        if up {
            self.sidebar.move_up(role);
        } else {
            self.sidebar.move_down(role);
        }
    }

    /// Activate the sidebar row under the cursor
    pub fn activate_menu_cursor(&mut self) {
        if let Some(row) = self.sidebar.selected_row(self.role()) {
            self.apply_action(Sidebar::activate(row));
        }
    }

    pub fn focus_label(&self) -> &'static str {
        match self.focus {
            Focus::Roles => "Roles",
            Focus::Menu => "Menu",
            Focus::Content => "Content",
            Focus::Command => "Command",
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.focus = Focus::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.focus = Focus::Menu;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = crate::core::parse_command(&input);
        tracing::debug!(?cmd, "command");
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    /// Send a key to the module that has focus and apply what it returns
    pub fn dispatch_key(&mut self, key: crossterm::event::KeyEvent) {
        let module: &mut dyn Module = match self.focus {
            Focus::Roles => &mut self.role_bar,
            Focus::Menu => &mut self.sidebar,
            Focus::Content => &mut self.content,
            Focus::Command => return,
        };
        tracing::trace!(module = module.id(), code = ?key.code, "key");
        let action = module.handle_key(key, &self.ctx);
        self.apply_action(action);
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::View(id) => match id.parse::<ViewId>() {
                Ok(view) => Action::Navigate(view),
                Err(err) => {
                    // Unknown ids still route, to the home view
                    self.navigate(id);
                    Action::Notify(format!("{err}, showing dashboard"), NotifyLevel::Warn)
                }
            },
            Command::Home => Action::Navigate(ViewId::HOME),
            Command::Role(id) => match id.parse::<Role>() {
                Ok(role) => Action::SelectRole(role),
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
            },
            Command::Export(format) => match format.as_deref().map(str::parse::<ExportFormat>) {
                None => Action::Export(ExportFormat::default()),
                Some(Ok(format)) => Action::Export(format),
                Some(Err(err)) => Action::Notify(err, NotifyLevel::Warn),
            },
            Command::Settings => Action::OpenSettings,
            Command::Help => Action::OpenHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(view) => self.select_view(view),
            Action::SelectRole(role) => {
                self.select_role(role);
                self.set_status(format!("Role: {}", role.label()), StatusLevel::Info);
            }
            Action::Export(format) => {
                let action = export::export_menu(self.role(), format, self.export_dir.as_deref());
                self.apply_action(action);
            }
            Action::OpenSettings => self.settings_open = true,
            Action::OpenHelp => self.help_open = true,
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_change_keeps_view() {
        let mut app = App::new();
        app.select_view(ViewId::Analytics);
        app.select_role(Role::Housekeeping);
        assert_eq!(app.view(), ViewId::Analytics);
        assert_eq!(
            app.visible_menu().iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![ViewId::Rooms]
        );
    }

    #[test]
    fn test_unknown_view_command_lands_home_with_warning() {
        let mut app = App::new();
        app.select_view(ViewId::Rooms);
        let action = app.execute_command(&Command::View("spa".to_string()));
        assert_eq!(app.view(), ViewId::Dashboard);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
    }

    #[test]
    fn test_menu_cursor_activation() {
        let mut app = App::with_startup(Role::Marketing, ViewId::GuestProfile);
        app.move_menu_cursor(false);
        app.activate_menu_cursor();
        assert_eq!(app.view(), ViewId::Channels);

        // guest-profile, channels, then the trailing settings row
        app.move_menu_cursor(false);
        app.activate_menu_cursor();
        assert!(app.settings_open);
        assert_eq!(app.view(), ViewId::Channels);
    }

    #[test]
    fn test_cycling_role_reports_status() {
        let mut app = App::new();
        app.cycle_role(true);
        assert_eq!(app.role(), Role::FrontDesk);
        assert_eq!(
            app.status_text(),
            Some(("Role: Front Desk", StatusLevel::Info))
        );
    }

    #[test]
    fn test_view_change_resets_card_focus() {
        let mut app = App::new();
        app.content.next_card(app.current_screen());
        assert_eq!(app.content.active_card(), 1);
        app.select_view(ViewId::Billing);
        assert_eq!(app.content.active_card(), 0);
    }

    #[test]
    fn test_status_expires() {
        let mut app = App::new();
        app.set_status("hello", StatusLevel::Info);
        app.on_tick();
        assert!(app.status_text().is_some());
        if let (Some(status), Some(past)) = (
            app.status.as_mut(),
            Instant::now().checked_sub(Duration::from_secs(10)),
        ) {
            status.since = past;
        }
        app.on_tick();
        assert!(app.status_text().is_none());
    }
}
