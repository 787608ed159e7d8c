//! 显示名称
//!
//! 名称由自身字段与关联记录的当前状态拼接，每次调用都会重新读取关联记录。

use super::SeaOrmStorage;
use crate::entity::prelude::{
    Courses, GroupInStreams, Lessons, Sections, StudentGroups, StudentLessonResults,
    StudentStreams, TaskWithTickOptions, TaskWithTickStudentResults, TasksWithTick, Users,
};
use crate::errors::{CoursesError, Result};
use crate::models::groups::entities::GroupInStream;
use sea_orm::{EntityTrait, ModelTrait};

impl SeaOrmStorage {
    /// `{流名称} {小组编号}`
    pub async fn group_in_stream_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(row) = GroupInStreams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组-流关联失败", e))?
        else {
            return Ok(None);
        };

        let stream = row
            .find_related(StudentStreams)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询学生流失败", e))?;
        let group = row
            .find_related(StudentGroups)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询小组失败", e))?;

        Ok(match (stream, group) {
            (Some(stream), Some(group)) => Some(GroupInStream::label(
                &stream.into_stream(),
                &group.into_group(),
            )),
            _ => None,
        })
    }

    pub async fn lesson_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(row) = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课时失败", e))?
        else {
            return Ok(None);
        };

        let Some(course) = row
            .find_related(Courses)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课程失败", e))?
        else {
            return Ok(None);
        };

        let group_in_stream = match row.group_in_stream_id {
            Some(gis_id) => self.group_in_stream_label_impl(gis_id).await?,
            None => None,
        };

        let lesson = row.into_lesson()?;
        Ok(Some(lesson.label(&course.name, group_in_stream.as_deref())))
    }

    pub async fn lesson_result_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(row) = StudentLessonResults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课时成绩失败", e))?
        else {
            return Ok(None);
        };

        let student = row
            .find_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询用户失败", e))?;

        match student {
            Some(user) => Ok(Some(row.into_lesson_result()?.label(&user.username))),
            None => Ok(None),
        }
    }

    pub async fn section_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(row) = Sections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询章节失败", e))?
        else {
            return Ok(None);
        };

        let course = row
            .find_related(Courses)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询课程失败", e))?;

        Ok(course.map(|course| row.into_section().label(&course.name)))
    }

    pub async fn task_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(task) = TasksWithTick::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务失败", e))?
        else {
            return Ok(None);
        };

        let section = self.section_label_impl(task.section_id).await?;
        Ok(section.map(|section| task.into_task().label(&section)))
    }

    pub async fn task_option_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(option) = TaskWithTickOptions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务选项失败", e))?
        else {
            return Ok(None);
        };

        let task = self.task_label_impl(option.task_with_tick_id).await?;
        Ok(task.map(|task| option.into_task_option().label(&task)))
    }

    pub async fn task_result_label_impl(&self, id: i64) -> Result<Option<String>> {
        let Some(result) = TaskWithTickStudentResults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoursesError::from_db("查询任务结果失败", e))?
        else {
            return Ok(None);
        };

        let option = self
            .task_option_label_impl(result.task_with_tick_option_id)
            .await?;
        Ok(option.map(|option| result.into_task_result().label(&option)))
    }
}
