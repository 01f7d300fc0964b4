//! 数据 / 配置目录
//!
//! 跨平台路径：
//! - macOS: ~/Library/Application Support/checkov
//! - Linux: $XDG_DATA_HOME/checkov 或 ~/.local/share/checkov
//! - Windows: %APPDATA%\checkov
//!
//! Settings live under the config dir (`$XDG_CONFIG_HOME/checkov` on Linux).

use std::path::PathBuf;

pub const APP_NAME: &str = "checkov";
const LOG_DIR: &str = "logs";

/// 获取应用数据目录
pub fn get_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        get_data_dir()
    }
}

/// 获取日志目录
pub fn get_log_dir() -> Option<PathBuf> {
    get_data_dir().map(|p| p.join(LOG_DIR))
}

fn ensure_dir(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {} directory", what),
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn ensure_data_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_data_dir(), "data")
}

pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_config_dir(), "config")
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
