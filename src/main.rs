use checkov::app::theme::detect_terminal_color_support;
use checkov::app::Workbench;
use checkov::core::event::InputEvent;
use checkov::kernel::services::adapters::{
    ensure_settings_file, load_settings_from, EnvColorSchemeProbe, FileStorage, MemoryStorage,
};
use checkov::kernel::services::ports::{KeyValueStore, Settings, StorageSettings};
use checkov::kernel::WindowSize;
use checkov::tui::session::{TerminalSession, TerminationSignal};
use checkov::tui::view::View;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const USAGE: &str = "usage: checkov [--in-memory] [--storage <path>]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    in_memory: bool,
    storage: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> io::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--in-memory" {
            cli.in_memory = true;
        } else if arg == "--storage" {
            let path = args.next().ok_or_else(|| invalid_args("--storage needs a path"))?;
            cli.storage = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--storage=") {
            cli.storage = Some(PathBuf::from(path));
        } else {
            return Err(invalid_args(&format!("unexpected argument '{}'", arg)));
        }
    }
    Ok(cli)
}

fn invalid_args(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{}\n{}", msg, USAGE))
}

#[derive(Debug, PartialEq, Eq)]
enum StorageChoice {
    Memory,
    File(PathBuf),
    DataDir,
}

/// CLI flags win over the settings file.
fn resolve_storage(cli: &CliArgs, settings: &StorageSettings) -> StorageChoice {
    if cli.in_memory {
        return StorageChoice::Memory;
    }
    if let Some(path) = cli.storage.clone() {
        return StorageChoice::File(path);
    }
    if !settings.persist {
        return StorageChoice::Memory;
    }
    match settings.path.clone() {
        Some(path) => StorageChoice::File(path),
        None => StorageChoice::DataDir,
    }
}

fn open_storage(choice: StorageChoice) -> Arc<dyn KeyValueStore> {
    match choice {
        StorageChoice::Memory => Arc::new(MemoryStorage::new()),
        StorageChoice::File(path) => Arc::new(FileStorage::new(path)),
        StorageChoice::DataDir => match FileStorage::open_default() {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "no data directory, state kept in memory");
                Arc::new(MemoryStorage::new())
            }
        },
    }
}

fn load_startup_settings() -> (Settings, Option<PathBuf>) {
    match ensure_settings_file() {
        Ok(path) => {
            let settings = load_settings_from(&path).unwrap_or_default();
            (settings, Some(path))
        }
        Err(e) => {
            tracing::warn!(error = %e, "settings file unavailable, using defaults");
            (Settings::default(), None)
        }
    }
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    workbench: &mut Workbench,
    session: &TerminalSession,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
        }

        if let Some(signal) = session.pending_signal() {
            return Ok(Some(signal));
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            let event = InputEvent::from(crossterm::event::read()?);
            let result = workbench.handle_input(&event);
            if result.is_quit() {
                return Ok(None);
            }
            dirty |= result.is_consumed() || matches!(event, InputEvent::Resize(..));
        }

        dirty |= workbench.tick(Instant::now());
        if workbench.should_quit() {
            return Ok(None);
        }
    }
}

fn main() -> io::Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;

    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let (settings, settings_path) = load_startup_settings();
    let choice = resolve_storage(&cli, &settings.storage);
    tracing::info!(storage = ?choice, "starting");
    let storage = open_storage(choice);

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut workbench = Workbench::new(
        storage,
        Arc::new(EnvColorSchemeProbe),
        WindowSize::new(width, height),
        detect_terminal_color_support(),
        log_rx,
    );
    workbench.apply_settings(&settings);
    if let Some(path) = settings_path {
        workbench.watch_settings(path);
    }

    let mut session = TerminalSession::enter()?;
    if let Err(e) = session.watch_signals() {
        tracing::warn!(error = %e, "failed to install signal handlers");
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut workbench, &session);

    drop(terminal);
    let left = session.leave();

    match result {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated by signal");
            drop(logging);
            signal.exit()
        }
        Ok(None) => {
            tracing::info!("exit");
            left
        }
        Err(e) => {
            tracing::error!(error = %e, "event loop failed");
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
