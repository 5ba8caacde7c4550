use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use markquill::config::Config;
use markquill::editor::buffer::Buffer;
use markquill::editor::state::EditorState;
use markquill::file::loader::{load_buffer, load_buffer_from_stdin};
use markquill::input::{InputHandler, Polled};
use markquill::overlay::{NavMode, OverlayController};
use markquill::theme::get_builtin_theme;
use markquill::ui::surface::TerminalSurface;
use markquill::ui::UI;

/// How long the event loop waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Markquill - A terminal text viewer with vim-style marks and a floating marks list
#[derive(Parser)]
#[command(name = "markquill")]
#[command(version)]
#[command(about = "A terminal text viewer with vim-style marks", long_about = None)]
struct Cli {
    /// Files to view (omit to read from stdin if piped)
    files: Vec<PathBuf>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Initial marks overlay mode: popup or direct
    #[arg(long, value_parser = parse_mode)]
    mode: Option<NavMode>,

    /// Config file to use instead of ~/.config/markquill/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<NavMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "popup" => Ok(NavMode::Popup),
        "direct" => Ok(NavMode::Direct),
        other => Err(format!("unknown mode '{}' (expected popup or direct)", other)),
    }
}

/// Installs a non-blocking file subscriber. The returned guard flushes on drop.
fn configure_logging(path: &Path) -> Result<Option<WorkerGuard>> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    if path.exists() {
        let _ = std::fs::remove_file(path);
    }

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Global subscriber already installed; drop guard so the writer shuts down.
        Err(_) => Ok(None),
    }
}

/// Set up a panic hook that restores the terminal before displaying panic information.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(target: "runtime.panic", %panic_info, "panic");

        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let _log_guard = match &cli.log_file {
        Some(path) => configure_logging(path)?,
        None => None,
    };

    // Load buffers BEFORE terminal setup; stdin may carry the text
    let mut stdin_was_piped = false;
    let buffers: Vec<Buffer> = if !cli.files.is_empty() {
        cli.files
            .iter()
            .map(load_buffer)
            .collect::<Result<_>>()?
    } else if !io::stdin().is_terminal() {
        stdin_was_piped = true;
        vec![load_buffer_from_stdin()?]
    } else {
        Vec::new()
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(mode) = cli.mode {
        config.overlay.mode = mode;
    }

    // CLI theme overrides config theme
    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let theme = match get_builtin_theme(theme_name) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "Warning: Theme '{}' not found, using default-dark",
                theme_name
            );
            get_builtin_theme("default-dark").context("Built-in default theme is missing")?
        }
    };

    info!(
        buffers = buffers.len(),
        theme = %theme.name,
        mode = %config.overlay.mode,
        "startup"
    );

    let mut ui = UI::new(theme);

    let mut state = EditorState::new(buffers);
    state.set_show_line_numbers(config.show_line_numbers);
    let mut overlay = OverlayController::new(TerminalSurface::new(), config.overlay);

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    // The reader thread starts after raw mode so it never sees cooked input
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut state,
        &mut overlay,
    );

    // Termion restores the screen through Drop guards; the cursor we show ourselves
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    info!("shutdown");
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
    overlay: &mut OverlayController<TerminalSurface>,
) -> Result<()> {
    loop {
        overlay.surface_mut().expire_notification(Instant::now());

        ui.render(terminal, state, overlay)?;

        match input_handler.poll_event(POLL_INTERVAL)? {
            Polled::Event(event) => {
                let should_quit = input_handler.handle_event(event, state, overlay)?;
                if should_quit {
                    break;
                }
            }
            Polled::Timeout => {}
            Polled::Closed => break,
        }
    }

    overlay.close()?;
    Ok(())
}
