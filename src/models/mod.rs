//! 业务数据模型
//!
//! 与 entity 模块中的数据库行分离；存储层负责两者之间的转换。

pub mod common;
pub mod courses;
pub mod groups;
pub mod lessons;
pub mod tasks;
pub mod users;

pub use common::{PaginationInfo, TableCounts};
