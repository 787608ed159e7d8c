use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生流表
        manager
            .create_table(
                Table::create()
                    .table(StudentStreams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentStreams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentStreams::Title)
                            .string_len(60)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生小组表
        manager
            .create_table(
                Table::create()
                    .table(StudentGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentGroups::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGroups::Number)
                            .string_len(15)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGroups::YearOfReceipt)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建小组-流关联表
        manager
            .create_table(
                Table::create()
                    .table(GroupInStreams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupInStreams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GroupInStreams::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GroupInStreams::StreamId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupInStreams::Table, GroupInStreams::GroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GroupInStreams::Table, GroupInStreams::StreamId)
                            .to(StudentStreams::Table, StudentStreams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户表（小组引用为 PROTECT 语义）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(254)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(15)
                            .not_null()
                            .default("student"),
                    )
                    .col(
                        ColumnDef::new(Users::Tel)
                            .string_len(15)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Users::GroupId).big_integer().null())
                    .col(ColumnDef::new(Users::DateJoined).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::GroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Courses::Description)
                            .string_len(1024)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课时表
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lessons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Lessons::GroupInStreamId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Lessons::StudentGroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Lessons::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Lessons::LessonType)
                            .string_len(1)
                            .not_null()
                            .default("1")
                            .check(Expr::col(Lessons::LessonType).is_in(["1", "2", "3"])),
                    )
                    .col(ColumnDef::new(Lessons::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::GroupInStreamId)
                            .to(GroupInStreams::Table, GroupInStreams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::StudentGroupId)
                            .to(StudentGroups::Table, StudentGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课时成绩表
        manager
            .create_table(
                Table::create()
                    .table(StudentLessonResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentLessonResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentLessonResults::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentLessonResults::LessonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentLessonResults::Mark)
                            .string_len(1)
                            .not_null()
                            .default("1")
                            .check(
                                Expr::col(StudentLessonResults::Mark)
                                    .is_in(["1", "2", "3", "4", "5"]),
                            ),
                    )
                    .col(
                        ColumnDef::new(StudentLessonResults::Visit)
                            .string_len(1)
                            .not_null()
                            .default("1")
                            .check(Expr::col(StudentLessonResults::Visit).is_in(["1", "2"])),
                    )
                    .col(
                        ColumnDef::new(StudentLessonResults::Comment)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentLessonResults::Table, StudentLessonResults::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentLessonResults::Table, StudentLessonResults::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建章节表
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sections::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Sections::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Sections::Description)
                            .string_len(1024)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建打勾任务表
        manager
            .create_table(
                Table::create()
                    .table(TasksWithTick::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TasksWithTick::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TasksWithTick::SectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TasksWithTick::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TasksWithTick::Description)
                            .string_len(1024)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TasksWithTick::Table, TasksWithTick::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建打勾任务选项表
        manager
            .create_table(
                Table::create()
                    .table(TaskWithTickOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskWithTickOptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TaskWithTickOptions::TaskWithTickId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskWithTickOptions::Description)
                            .string_len(1024)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                TaskWithTickOptions::Table,
                                TaskWithTickOptions::TaskWithTickId,
                            )
                            .to(TasksWithTick::Table, TasksWithTick::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建打勾任务学生结果表
        manager
            .create_table(
                Table::create()
                    .table(TaskWithTickStudentResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskWithTickStudentResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TaskWithTickStudentResults::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskWithTickStudentResults::TaskWithTickOptionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskWithTickStudentResults::Perform)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                TaskWithTickStudentResults::Table,
                                TaskWithTickStudentResults::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                TaskWithTickStudentResults::Table,
                                TaskWithTickStudentResults::TaskWithTickOptionId,
                            )
                            .to(TaskWithTickOptions::Table, TaskWithTickOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 小组 (number, year_of_receipt) 唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_groups_number_year")
                    .table(StudentGroups::Table)
                    .col(StudentGroups::Number)
                    .col(StudentGroups::YearOfReceipt)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 外键查询索引
        create_fk_index(manager, "idx_users_group_id", Users::Table, Users::GroupId).await?;
        create_fk_index(
            manager,
            "idx_group_in_streams_group_id",
            GroupInStreams::Table,
            GroupInStreams::GroupId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_group_in_streams_stream_id",
            GroupInStreams::Table,
            GroupInStreams::StreamId,
        )
        .await?;
        create_fk_index(manager, "idx_lessons_course_id", Lessons::Table, Lessons::CourseId).await?;
        create_fk_index(
            manager,
            "idx_lessons_group_in_stream_id",
            Lessons::Table,
            Lessons::GroupInStreamId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_lessons_student_group_id",
            Lessons::Table,
            Lessons::StudentGroupId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_student_lesson_results_student_id",
            StudentLessonResults::Table,
            StudentLessonResults::StudentId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_student_lesson_results_lesson_id",
            StudentLessonResults::Table,
            StudentLessonResults::LessonId,
        )
        .await?;
        create_fk_index(manager, "idx_sections_course_id", Sections::Table, Sections::CourseId)
            .await?;
        create_fk_index(
            manager,
            "idx_tasks_with_tick_section_id",
            TasksWithTick::Table,
            TasksWithTick::SectionId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_task_with_tick_options_task_id",
            TaskWithTickOptions::Table,
            TaskWithTickOptions::TaskWithTickId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_task_with_tick_student_results_user_id",
            TaskWithTickStudentResults::Table,
            TaskWithTickStudentResults::UserId,
        )
        .await?;
        create_fk_index(
            manager,
            "idx_task_with_tick_student_results_option_id",
            TaskWithTickStudentResults::Table,
            TaskWithTickStudentResults::TaskWithTickOptionId,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(TaskWithTickStudentResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaskWithTickOptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TasksWithTick::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentLessonResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupInStreams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentStreams::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// 为外键列创建普通索引
async fn create_fk_index<T, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    column: C,
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name(name)
                .table(table)
                .col(column)
                .to_owned(),
        )
        .await
}

#[derive(DeriveIden)]
enum StudentStreams {
    #[sea_orm(iden = "student_streams")]
    Table,
    Id,
    Title,
}

#[derive(DeriveIden)]
enum StudentGroups {
    #[sea_orm(iden = "student_groups")]
    Table,
    Id,
    Title,
    Number,
    YearOfReceipt,
}

#[derive(DeriveIden)]
enum GroupInStreams {
    #[sea_orm(iden = "group_in_streams")]
    Table,
    Id,
    GroupId,
    StreamId,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    FirstName,
    LastName,
    Email,
    IsActive,
    Role,
    Tel,
    GroupId,
    DateJoined,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Lessons {
    #[sea_orm(iden = "lessons")]
    Table,
    Id,
    GroupInStreamId,
    StudentGroupId,
    CourseId,
    LessonType,
    Date,
}

#[derive(DeriveIden)]
enum StudentLessonResults {
    #[sea_orm(iden = "student_lesson_results")]
    Table,
    Id,
    StudentId,
    LessonId,
    Mark,
    Visit,
    Comment,
}

#[derive(DeriveIden)]
enum Sections {
    #[sea_orm(iden = "sections")]
    Table,
    Id,
    CourseId,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum TasksWithTick {
    #[sea_orm(iden = "tasks_with_tick")]
    Table,
    Id,
    SectionId,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum TaskWithTickOptions {
    #[sea_orm(iden = "task_with_tick_options")]
    Table,
    Id,
    TaskWithTickId,
    Description,
}

#[derive(DeriveIden)]
enum TaskWithTickStudentResults {
    #[sea_orm(iden = "task_with_tick_student_results")]
    Table,
    Id,
    UserId,
    TaskWithTickOptionId,
    Perform,
}
