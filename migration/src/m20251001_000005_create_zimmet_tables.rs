use sea_orm_migration::prelude::*;

use crate::m20251001_000002_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // zimmet stok kayıtları (承認フロー付き)
        manager
            .create_table(
                Table::create()
                    .table(ZimmetStocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ZimmetStocks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ZimmetStocks::ItemName).string_len(200).not_null())
                    .col(ColumnDef::new(ZimmetStocks::Category).string_len(100).not_null())
                    .col(ColumnDef::new(ZimmetStocks::Brand).string_len(100).null())
                    .col(ColumnDef::new(ZimmetStocks::Model).string_len(100).null())
                    .col(ColumnDef::new(ZimmetStocks::SerialNumber).string_len(100).null())
                    .col(
                        ColumnDef::new(ZimmetStocks::Quantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(ZimmetStocks::Quantity).gt(0)),
                    )
                    .col(
                        ColumnDef::new(ZimmetStocks::RemainingQuantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(ZimmetStocks::RemainingQuantity).gte(0)),
                    )
                    .col(
                        ColumnDef::new(ZimmetStocks::ApprovalStatus)
                            .string_len(16)
                            .not_null()
                            .default("Pending")
                            .check(Expr::col(ZimmetStocks::ApprovalStatus).is_in([
                                "Pending",
                                "Approved",
                                "Rejected",
                            ])),
                    )
                    .col(ColumnDef::new(ZimmetStocks::CreatedById).integer().not_null())
                    .col(ColumnDef::new(ZimmetStocks::ApprovedById).integer().null())
                    .col(
                        ColumnDef::new(ZimmetStocks::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ZimmetStocks::Note).text().null())
                    .col(
                        ColumnDef::new(ZimmetStocks::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ZimmetStocks::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zimmet_stocks_created_by_id")
                            .from(ZimmetStocks::Table, ZimmetStocks::CreatedById)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zimmet_stocks_approved_by_id")
                            .from(ZimmetStocks::Table, ZimmetStocks::ApprovedById)
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
                    .name("idx_zimmet_stocks_approval_status")
                    .table(ZimmetStocks::Table)
                    .col(ZimmetStocks::ApprovalStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ZimmetAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ZimmetAssignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ZimmetAssignments::StockId).integer().not_null())
                    .col(
                        ColumnDef::new(ZimmetAssignments::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ZimmetAssignments::AssignedById).integer().null())
                    .col(
                        ColumnDef::new(ZimmetAssignments::Quantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(ZimmetAssignments::Quantity).gt(0)),
                    )
                    .col(
                        ColumnDef::new(ZimmetAssignments::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ZimmetAssignments::ReturnedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ZimmetAssignments::Status)
                            .string_len(16)
                            .not_null()
                            .default("Assigned")
                            .check(
                                Expr::col(ZimmetAssignments::Status)
                                    .is_in(["Assigned", "Returned"]),
                            ),
                    )
                    .col(ColumnDef::new(ZimmetAssignments::Note).text().null())
                    .col(
                        ColumnDef::new(ZimmetAssignments::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ZimmetAssignments::LastModified)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zimmet_assignments_stock_id")
                            .from(ZimmetAssignments::Table, ZimmetAssignments::StockId)
                            .to(ZimmetStocks::Table, ZimmetStocks::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zimmet_assignments_employee_id")
                            .from(ZimmetAssignments::Table, ZimmetAssignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_zimmet_assignments_assigned_by_id")
                            .from(ZimmetAssignments::Table, ZimmetAssignments::AssignedById)
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
                    .name("idx_zimmet_assignments_employee_id")
                    .table(ZimmetAssignments::Table)
                    .col(ZimmetAssignments::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ZimmetAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ZimmetStocks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ZimmetStocks {
    Table,
    Id,
    ItemName,
    Category,
    Brand,
    Model,
    SerialNumber,
    Quantity,
    RemainingQuantity,
    ApprovalStatus,
    CreatedById,
    ApprovedById,
    ApprovedAt,
    Note,
    CreatedDate,
    LastModified,
}

#[derive(DeriveIden)]
enum ZimmetAssignments {
    Table,
    Id,
    StockId,
    EmployeeId,
    AssignedById,
    Quantity,
    AssignedAt,
    ReturnedAt,
    Status,
    Note,
    CreatedDate,
    LastModified,
}
