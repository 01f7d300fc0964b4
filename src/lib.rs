//! checkov - 终端清单应用库
//!
//! 模块结构：
//! - core: 事件与命令定义
//! - kernel: 状态、reducer、存储与主题（端口 / 适配器）
//! - app: 工作台（路由视图、输入分发、渲染）
//! - tui: 终端接管与视图 trait

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
