//! 核心框架模块
//!
//! - Event: 统一事件定义
//! - Command: 命令系统

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key};
