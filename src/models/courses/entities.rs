use serde::{Deserialize, Serialize};

// 课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// 课程章节
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: String,
}

impl Section {
    /// 显示名称：`Course {课程}, Section: {标题}`
    pub fn label(&self, course: &str) -> String {
        format!("Course {}, Section: {}", course, self.title)
    }
}
