use sea_orm_migration::prelude::*;

use crate::m20251001_000002_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Trainings::Title)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Trainings::Description).text().null())
                    .col(ColumnDef::new(Trainings::VideoUrl).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Trainings::DurationMinutes)
                            .integer()
                            .not_null()
                            .check(Expr::col(Trainings::DurationMinutes).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Trainings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Trainings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trainings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingAssignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::TrainingId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::AssignedById)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(TrainingAssignments::DueDate).date().null())
                    .col(
                        ColumnDef::new(TrainingAssignments::Status)
                            .string_len(16)
                            .not_null()
                            .default("Assigned")
                            .check(Expr::col(TrainingAssignments::Status).is_in([
                                "Assigned",
                                "InProgress",
                                "Completed",
                            ])),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::WatchedPercent)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(TrainingAssignments::WatchedPercent).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::CertificateCode)
                            .string_len(32)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrainingAssignments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_assignments_training_id")
                            .from(TrainingAssignments::Table, TrainingAssignments::TrainingId)
                            .to(Trainings::Table, Trainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_assignments_employee_id")
                            .from(TrainingAssignments::Table, TrainingAssignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_assignments_assigned_by_id")
                            .from(
                                TrainingAssignments::Table,
                                TrainingAssignments::AssignedById,
                            )
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_training_assignments_training_employee")
                    .table(TrainingAssignments::Table)
                    .col(TrainingAssignments::TrainingId)
                    .col(TrainingAssignments::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trainings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Trainings {
    Table,
    Id,
    Title,
    Description,
    VideoUrl,
    DurationMinutes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TrainingAssignments {
    Table,
    Id,
    TrainingId,
    EmployeeId,
    AssignedById,
    DueDate,
    Status,
    WatchedPercent,
    CompletedAt,
    CertificateCode,
    CreatedAt,
    UpdatedAt,
}
