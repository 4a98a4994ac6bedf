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
                    .table(LeaveRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LeaveRequests::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeaveRequests::ApproverId).integer().null())
                    .col(ColumnDef::new(LeaveRequests::StartDate).date().not_null())
                    .col(ColumnDef::new(LeaveRequests::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(LeaveRequests::DayCount)
                            .integer()
                            .not_null()
                            .check(Expr::col(LeaveRequests::DayCount).gt(0)),
                    )
                    .col(ColumnDef::new(LeaveRequests::Reason).text().null())
                    .col(
                        ColumnDef::new(LeaveRequests::Status)
                            .string_len(16)
                            .not_null()
                            .default("Pending")
                            .check(Expr::col(LeaveRequests::Status).is_in([
                                "Pending",
                                "Approved",
                                "Rejected",
                            ])),
                    )
                    .col(
                        ColumnDef::new(LeaveRequests::DecidedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(LeaveRequests::DecisionNote).text().null())
                    .col(
                        ColumnDef::new(LeaveRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(LeaveRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_requests_employee_id")
                            .from(LeaveRequests::Table, LeaveRequests::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_requests_approver_id")
                            .from(LeaveRequests::Table, LeaveRequests::ApproverId)
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
                    .name("idx_leave_requests_employee_id")
                    .table(LeaveRequests::Table)
                    .col(LeaveRequests::EmployeeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leave_requests_status")
                    .table(LeaveRequests::Table)
                    .col(LeaveRequests::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaveRequests {
    Table,
    Id,
    EmployeeId,
    ApproverId,
    StartDate,
    EndDate,
    DayCount,
    Reason,
    Status,
    DecidedAt,
    DecisionNote,
    CreatedAt,
    UpdatedAt,
}
