// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 組織構造
mod m20251001_000001_create_organization_tables;
mod m20251001_000002_create_employees_table;

// 勤怠・休暇
mod m20251001_000003_create_leave_requests_table;
mod m20251001_000006_create_clock_events_table;

// 画面権限
mod m20251001_000004_create_screen_permissions_tables;

// zimmet (備品管理)
mod m20251001_000005_create_zimmet_tables;

// 教育・採用
mod m20251001_000007_create_training_tables;
mod m20251001_000008_create_recruitment_tables;

// 初期管理者
mod m20251001_000009_create_initial_admin;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20251001_000001_create_organization_tables::Migration),
            // 2. 社員・アカウント（positionsに依存）
            Box::new(m20251001_000002_create_employees_table::Migration),
            // 3. 社員に依存するテーブル
            Box::new(m20251001_000003_create_leave_requests_table::Migration),
            Box::new(m20251001_000004_create_screen_permissions_tables::Migration),
            Box::new(m20251001_000005_create_zimmet_tables::Migration),
            Box::new(m20251001_000006_create_clock_events_table::Migration),
            Box::new(m20251001_000007_create_training_tables::Migration),
            Box::new(m20251001_000008_create_recruitment_tables::Migration),
            // 4. 初期管理者ユーザー作成
            Box::new(m20251001_000009_create_initial_admin::Migration),
        ]
    }
}
