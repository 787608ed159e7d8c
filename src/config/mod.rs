//! 配置管理
//!
//! 分层加载：内置默认值 → config.toml → config.{APP_ENV}.toml → COURSES__* 环境变量（如 COURSES__DATABASE__URL）。

mod r#impl;
mod structs;

pub use structs::{AppConfig, AppSettings, DatabaseConfig};
