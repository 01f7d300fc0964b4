//! 应用层：Workbench + UI 主题

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
