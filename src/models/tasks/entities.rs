use serde::{Deserialize, Serialize};

// 打勾任务（隶属于章节）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWithTick {
    pub id: i64,
    pub section_id: i64,
    pub title: String,
    pub description: String,
}

impl TaskWithTick {
    pub fn label(&self, section: &str) -> String {
        format!("{}, Task: {}", section, self.title)
    }
}

// 打勾任务的可勾选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWithTickOption {
    pub id: i64,
    pub task_with_tick_id: i64,
    pub description: String,
}

impl TaskWithTickOption {
    pub fn label(&self, task: &str) -> String {
        format!("{}, Description: {}", task, self.description)
    }
}

// 学生对某个选项的完成状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWithTickStudentResult {
    pub id: i64,
    pub user_id: i64,
    pub task_with_tick_option_id: i64,
    pub perform: bool,
}

impl TaskWithTickStudentResult {
    pub fn label(&self, option: &str) -> String {
        let performed = if self.perform { "True" } else { "False" };
        format!("{}, Is performed? {}", option, performed)
    }
}
