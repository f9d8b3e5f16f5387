use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use concierge::app::App;
use concierge::config::{self, Config};
use concierge::modules::export::{self, ExportFormat};
use concierge::nav::{Role, ViewId};
use concierge::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "concierge",
    version,
    about = "Concierge: hotel management dashboard in the terminal"
)]
struct Args {
    /// Role active at startup (manager, front-desk, housekeeping, marketing)
    #[arg(long)]
    role: Option<Role>,

    /// View shown at startup (dashboard, front-desk, guest-profile, rooms, ...)
    #[arg(long)]
    view: Option<ViewId>,

    /// Config file (defaults to ~/.config/concierge/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the menu visible to --role to this file and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Export format; guessed from the --export extension when omitted
    #[arg(long, requires = "export")]
    format: Option<ExportFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone().or_else(config::config_path);
    let config = config_path
        .as_deref()
        .map(config::load_from)
        .unwrap_or_default();

    if let Some(dir) = config::log_dir() {
        if let Err(err) = logging::init(&dir, config.log_level()) {
            eprintln!("Warning: file logging disabled: {err:#}");
        }
    }

    let role = startup_role(&args, &config);
    let view = startup_view(&args, &config);
    tracing::info!(%role, %view, "starting");

    if let Some(path) = args.export.as_deref() {
        let format = args
            .format
            .or_else(|| ExportFormat::from_path(path))
            .unwrap_or_default();
        let count = export::write_menu(path, format, role)
            .with_context(|| format!("exporting menu to {}", path.display()))?;
        println!("Wrote {count} menu entries for {role} to {}", path.display());
        return Ok(());
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup(role, view);
    app.config_path = config_path;
    let tick_rate = Duration::from_millis(config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("{err:?}");
    }

    tracing::info!("exiting");
    Ok(())
}

/// CLI wins over config; a bad config value is logged and ignored
fn startup_role(args: &Args, config: &Config) -> Role {
    if let Some(role) = args.role {
        return role;
    }
    match config.role() {
        Ok(role) => role.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%err, "ignoring role from config");
            Role::default()
        }
    }
}

fn startup_view(args: &Args, config: &Config) -> ViewId {
    if let Some(view) = args.view {
        return view;
    }
    match config.view() {
        Ok(view) => view.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%err, "ignoring view from config");
            ViewId::HOME
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, terminal.size()?),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
