use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_organization_tables::{Cities, Departments, Positions};
use crate::m20251001_000002_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. iş ilanları
        manager
            .create_table(
                Table::create()
                    .table(JobPostings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostings::Title).string_len(200).not_null())
                    .col(ColumnDef::new(JobPostings::Description).text().not_null())
                    .col(ColumnDef::new(JobPostings::DepartmentId).integer().not_null())
                    .col(ColumnDef::new(JobPostings::PositionId).integer().null())
                    .col(
                        ColumnDef::new(JobPostings::Status)
                            .integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(JobPostings::Status).between(1, 4)),
                    )
                    .col(ColumnDef::new(JobPostings::PublishedAt).date().null())
                    .col(ColumnDef::new(JobPostings::ClosingDate).date().null())
                    .col(ColumnDef::new(JobPostings::CreatedById).integer().null())
                    .col(
                        ColumnDef::new(JobPostings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobPostings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_postings_department_id")
                            .from(JobPostings::Table, JobPostings::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_postings_position_id")
                            .from(JobPostings::Table, JobPostings::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_postings_created_by_id")
                            .from(JobPostings::Table, JobPostings::CreatedById)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. adaylar
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Candidates::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Candidates::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Candidates::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Candidates::Phone).string_len(30).null())
                    .col(ColumnDef::new(Candidates::NationalId).string_len(11).null())
                    .col(ColumnDef::new(Candidates::CityId).integer().null())
                    .col(
                        ColumnDef::new(Candidates::Status)
                            .integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(Candidates::Status).between(1, 13)),
                    )
                    .col(
                        ColumnDef::new(Candidates::CvSource)
                            .string_len(16)
                            .not_null()
                            .default("Auto")
                            .check(Expr::col(Candidates::CvSource).is_in(["Auto", "Uploaded"])),
                    )
                    .col(ColumnDef::new(Candidates::CvPath).string_len(500).null())
                    .col(
                        ColumnDef::new(Candidates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Candidates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidates_city_id")
                            .from(Candidates::Table, Candidates::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CandidateLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CandidateLanguages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CandidateLanguages::CandidateId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CandidateLanguages::Language)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CandidateLanguages::Reading)
                            .integer()
                            .not_null()
                            .check(Expr::col(CandidateLanguages::Reading).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(CandidateLanguages::Writing)
                            .integer()
                            .not_null()
                            .check(Expr::col(CandidateLanguages::Writing).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(CandidateLanguages::Speaking)
                            .integer()
                            .not_null()
                            .check(Expr::col(CandidateLanguages::Speaking).between(1, 5)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidate_languages_candidate_id")
                            .from(CandidateLanguages::Table, CandidateLanguages::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_candidate_languages_candidate_language")
                    .table(CandidateLanguages::Table)
                    .col(CandidateLanguages::CandidateId)
                    .col(CandidateLanguages::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 3. başvurular
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Applications::JobPostingId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::CandidateId).integer().not_null())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(Applications::Status).between(1, 10)),
                    )
                    .col(ColumnDef::new(Applications::CoverLetter).text().null())
                    .col(ColumnDef::new(Applications::DecidedById).integer().null())
                    .col(
                        ColumnDef::new(Applications::DecidedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_job_posting_id")
                            .from(Applications::Table, Applications::JobPostingId)
                            .to(JobPostings::Table, JobPostings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_candidate_id")
                            .from(Applications::Table, Applications::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_applications_decided_by_id")
                            .from(Applications::Table, Applications::DecidedById)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_applications_posting_candidate")
                    .table(Applications::Table)
                    .col(Applications::JobPostingId)
                    .col(Applications::CandidateId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 4. mülakatlar
        manager
            .create_table(
                Table::create()
                    .table(Interviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interviews::ApplicationId).integer().not_null())
                    .col(ColumnDef::new(Interviews::InterviewerId).integer().not_null())
                    .col(
                        ColumnDef::new(Interviews::InterviewType)
                            .integer()
                            .not_null()
                            .check(Expr::col(Interviews::InterviewType).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Interviews::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Interviews::DurationMinutes)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(ColumnDef::new(Interviews::Location).string_len(200).null())
                    .col(
                        ColumnDef::new(Interviews::Score)
                            .integer()
                            .null()
                            .check(Expr::col(Interviews::Score).between(1, 10)),
                    )
                    .col(ColumnDef::new(Interviews::Notes).text().null())
                    .col(
                        ColumnDef::new(Interviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Interviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interviews_application_id")
                            .from(Interviews::Table, Interviews::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interviews_interviewer_id")
                            .from(Interviews::Table, Interviews::InterviewerId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. teklifler (başvuru başına bir teklif)
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Offers::ApplicationId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Offers::Salary)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Offers::Salary).gt(0)),
                    )
                    .col(ColumnDef::new(Offers::StartDate).date().not_null())
                    .col(ColumnDef::new(Offers::ExpiresAt).date().null())
                    .col(ColumnDef::new(Offers::IsAccepted).boolean().null())
                    .col(ColumnDef::new(Offers::DecidedById).integer().not_null())
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Offers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_application_id")
                            .from(Offers::Table, Offers::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_decided_by_id")
                            .from(Offers::Table, Offers::DecidedById)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Interviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CandidateLanguages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobPostings {
    Table,
    Id,
    Title,
    Description,
    DepartmentId,
    PositionId,
    Status,
    PublishedAt,
    ClosingDate,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Candidates {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    NationalId,
    CityId,
    Status,
    CvSource,
    CvPath,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CandidateLanguages {
    Table,
    Id,
    CandidateId,
    Language,
    Reading,
    Writing,
    Speaking,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    JobPostingId,
    CandidateId,
    Status,
    CoverLetter,
    DecidedById,
    DecidedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Interviews {
    Table,
    Id,
    ApplicationId,
    InterviewerId,
    InterviewType,
    ScheduledAt,
    DurationMinutes,
    Location,
    Score,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    ApplicationId,
    Salary,
    StartDate,
    ExpiresAt,
    IsAccepted,
    DecidedById,
    CreatedAt,
    UpdatedAt,
}
