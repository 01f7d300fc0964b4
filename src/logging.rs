//! tracing 初始化：滚动日志文件 + 工作台日志面板

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "checkov.log";
const DEFAULT_FILTER: &str = "checkov=info";

/// Keeps the file writer flushing until dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    /// Formatted lines for the in-app log panel. Yields `Some` once.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.log_rx.take()
    }
}

/// Collects one formatted event and forwards it line by line when dropped.
struct PanelWriter {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl Write for PanelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for PanelWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            if self.tx.send(line.trim_end().to_string()).is_err() {
                // Panel receiver gone (workbench dropped).
                break;
            }
        }
    }
}

#[derive(Clone)]
struct TeeMakeWriter {
    file: NonBlocking,
    panel: Sender<String>,
}

struct TeeWriter {
    file: NonBlocking,
    panel: PanelWriter,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.make_writer(),
            panel: PanelWriter {
                buf: Vec::with_capacity(256),
                tx: self.panel.clone(),
            },
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.panel.write_all(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn resolve_log_dir() -> Option<PathBuf> {
    checkov::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("checkov").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Installs the global subscriber. `None` when no log directory is writable
/// or a subscriber is already set.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let (log_tx, log_rx) = mpsc::channel::<String>();
    let writer = TeeMakeWriter {
        file: non_blocking,
        panel: log_tx,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_rx: Some(log_rx),
    })
}
