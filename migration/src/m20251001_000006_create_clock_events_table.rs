use sea_orm_migration::prelude::*;

use crate::m20251001_000002_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // personel giriş-çıkış kayıtları
        manager
            .create_table(
                Table::create()
                    .table(ClockEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClockEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClockEvents::EmployeeId).integer().not_null())
                    .col(
                        ColumnDef::new(ClockEvents::EventType)
                            .string_len(16)
                            .not_null()
                            .default("Normal")
                            .check(Expr::col(ClockEvents::EventType).is_in([
                                "Normal",
                                "Overtime",
                                "Weekend",
                            ])),
                    )
                    .col(
                        ColumnDef::new(ClockEvents::ClockIn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClockEvents::ClockOut)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ClockEvents::Note).text().null())
                    .col(
                        ColumnDef::new(ClockEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ClockEvents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clock_events_employee_id")
                            .from(ClockEvents::Table, ClockEvents::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_clock_events_employee_clock_in")
                    .table(ClockEvents::Table)
                    .col(ClockEvents::EmployeeId)
                    .col(ClockEvents::ClockIn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClockEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClockEvents {
    Table,
    Id,
    EmployeeId,
    EventType,
    ClockIn,
    ClockOut,
    Note,
    CreatedAt,
    UpdatedAt,
}
