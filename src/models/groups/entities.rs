use serde::{Deserialize, Serialize};

// 学生流（学业方向）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStream {
    pub id: i64,
    pub title: String,
}

impl std::fmt::Display for StudentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

// 学生小组，(number, year_of_receipt) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: i64,
    pub title: String,
    pub number: String,
    pub year_of_receipt: i32,
}

impl std::fmt::Display for StudentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

// 小组与流的关联
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInStream {
    pub id: i64,
    pub group_id: i64,
    pub stream_id: i64,
}

impl GroupInStream {
    /// 显示名称：`{流名称} {小组编号}`
    pub fn label(stream: &StudentStream, group: &StudentGroup) -> String {
        format!("{} {}", stream.title, group.number)
    }
}
