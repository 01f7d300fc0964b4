//! 终端会话：进入 / 退出 raw 模式与备用屏幕，并把 SIGINT / SIGTERM 转成退出请求

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

/// Time the event loop gets to act on a signal before the watcher thread
/// restores the terminal and exits by itself.
const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// Terminal mode switches. Replaced by a recorder in tests.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, mouse, focus and bracketed paste reporting.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::cursor::Hide;
        use crossterm::event::{EnableBracketedPaste, EnableFocusChange, EnableMouseCapture};
        use crossterm::terminal::EnterAlternateScreen;

        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            EnableBracketedPaste,
            Hide
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::cursor::Show;
        use crossterm::event::{DisableBracketedPaste, DisableFocusChange, DisableMouseCapture};
        use crossterm::terminal::LeaveAlternateScreen;

        // Both steps run even when the first one fails.
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        raw.and(screen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.exit_code())
    }

    #[cfg(unix)]
    fn from_raw(signo: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signo {
            SIGINT => Some(TerminationSignal::Interrupt),
            SIGTERM => Some(TerminationSignal::Terminate),
            _ => None,
        }
    }
}

/// Leaves the terminal mode once, whoever gets there first: the session's
/// `Drop`, an explicit `leave`, or the signal watcher.
struct ModeSwitch {
    left: AtomicBool,
    ops: Arc<dyn TerminalOps>,
}

impl ModeSwitch {
    fn leave(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }
}

/// The terminal as the app uses it between startup and exit.
pub struct TerminalSession {
    mode: Arc<ModeSwitch>,
    signals: Option<Receiver<TerminationSignal>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            mode: Arc::new(ModeSwitch {
                left: AtomicBool::new(false),
                ops,
            }),
            signals: None,
        })
    }

    /// Starts a watcher thread for SIGINT/SIGTERM. Received signals show up in
    /// [`pending_signal`](Self::pending_signal).
    #[cfg(unix)]
    pub fn watch_signals(&mut self) -> io::Result<()> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let (tx, rx) = std::sync::mpsc::channel();
        let mode = self.mode.clone();
        std::thread::spawn(move || {
            for signal in signals.forever().filter_map(TerminationSignal::from_raw) {
                let _ = tx.send(signal);
                std::thread::sleep(SIGNAL_GRACE);
                tracing::warn!(?signal, "event loop did not exit in time");
                let _ = mode.leave();
                signal.exit();
            }
        });
        self.signals = Some(rx);
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn watch_signals(&mut self) -> io::Result<()> {
        Ok(())
    }

    pub fn pending_signal(&self) -> Option<TerminationSignal> {
        self.signals.as_ref()?.try_recv().ok()
    }

    /// Restores the terminal now and reports what `Drop` would swallow.
    pub fn leave(self) -> io::Result<()> {
        self.mode.leave()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.mode.leave();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
