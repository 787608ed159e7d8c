use crate::models::common::define_choice_enum;
use serde::{Deserialize, Serialize};

define_choice_enum! {
    /// 课时类型
    LessonType, LESSON_TYPE_CHOICES, "lesson type", default = Lecture {
        Lecture => ("1", "Lecture"),
        PracticalWork => ("2", "Practical work"),
        LaboratoryWork => ("3", "Laboratory work"),
    }
}

define_choice_enum! {
    /// 成绩（字面分值）
    Mark, MARK_CHOICES, "mark", default = One {
        One => ("1", "1"),
        Two => ("2", "2"),
        Three => ("3", "3"),
        Four => ("4", "4"),
        Five => ("5", "5"),
    }
}

define_choice_enum! {
    /// 出勤状态
    VisitStatus, VISIT_CHOICES, "visit status", default = Visited {
        Visited => ("1", "Visited"),
        Missed => ("2", "Missed"),
    }
}

// 课时
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub group_in_stream_id: Option<i64>,
    pub student_group_id: Option<i64>,
    pub course_id: i64,
    pub lesson_type: LessonType,
    pub date: chrono::NaiveDate,
}

impl Lesson {
    /// 显示名称：`Course: {课程} Group: {小组-流}, {类型}`，未关联小组-流时显示 None
    pub fn label(&self, course: &str, group_in_stream: Option<&str>) -> String {
        format!(
            "Course: {} Group: {}, {}",
            course,
            group_in_stream.unwrap_or("None"),
            self.lesson_type.label()
        )
    }
}

// 学生课时成绩与出勤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentLessonResult {
    pub id: i64,
    pub student_id: i64,
    pub lesson_id: i64,
    pub mark: Mark,
    pub visit: VisitStatus,
    pub comment: String,
}

impl StudentLessonResult {
    /// 显示名称：`Student {用户}. Mark: {成绩}. {出勤}`
    pub fn label(&self, student: &str) -> String {
        format!(
            "Student {}. Mark: {}. {}",
            student,
            self.mark.label(),
            self.visit.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_codes_are_preserved() {
        assert_eq!(LessonType::Lecture.code(), "1");
        assert_eq!(LessonType::PracticalWork.code(), "2");
        assert_eq!(LessonType::LaboratoryWork.code(), "3");
        assert_eq!(VisitStatus::Visited.code(), "1");
        assert_eq!(VisitStatus::Missed.code(), "2");
        let marks: Vec<&str> = Mark::all().iter().map(|m| m.code()).collect();
        assert_eq!(marks, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_labels_come_from_lookup_table() {
        assert_eq!(LessonType::PracticalWork.label(), "Practical work");
        assert_eq!(LessonType::LaboratoryWork.label(), "Laboratory work");
        assert_eq!(VisitStatus::Missed.label(), "Missed");
        assert_eq!(Mark::Four.label(), "4");
        assert_eq!(LESSON_TYPE_CHOICES.len(), 3);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(LessonType::default(), LessonType::Lecture);
        assert_eq!(Mark::default(), Mark::One);
        assert_eq!(VisitStatus::default(), VisitStatus::Visited);
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!("3".parse::<LessonType>(), Ok(LessonType::LaboratoryWork));
        assert!("4".parse::<LessonType>().is_err());
        assert!("0".parse::<Mark>().is_err());
        assert!("Visited".parse::<VisitStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&VisitStatus::Missed).unwrap();
        assert_eq!(json, "\"2\"");
        let mark: Mark = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(mark, Mark::Five);
        assert!(serde_json::from_str::<LessonType>("\"9\"").is_err());
    }

    #[test]
    fn test_lesson_label() {
        let lesson = Lesson {
            id: 1,
            group_in_stream_id: None,
            student_group_id: None,
            course_id: 1,
            lesson_type: LessonType::PracticalWork,
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        };
        assert_eq!(
            lesson.label("Physics", None),
            "Course: Physics Group: None, Practical work"
        );
        assert_eq!(
            lesson.label("Physics", Some("Engineering 101")),
            "Course: Physics Group: Engineering 101, Practical work"
        );
    }

    #[test]
    fn test_result_label() {
        let result = StudentLessonResult {
            id: 1,
            student_id: 2,
            lesson_id: 3,
            mark: Mark::Five,
            visit: VisitStatus::Visited,
            comment: String::new(),
        };
        assert_eq!(result.label("ivanov"), "Student ivanov. Mark: 5. Visited");
    }
}
