use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_organization_tables::{Departments, Levels, Positions};
use crate::m20251001_000002_create_employees_table::{Accounts, Employees};
use crate::m20251001_000004_create_screen_permissions_tables::{LevelScreenGrants, SCREENS};

const ADMIN_LEVEL: &str = "Yönetici";
const ADMIN_DEPARTMENT_CODE: &str = "IK";
const ADMIN_POSITION: &str = "Sistem Yöneticisi";
const ADMIN_EMAIL: &str = "admin@example.com";

// パスワード: "Adm1n$ecurE2024!" をArgon2でハッシュ化した値
// INITIAL_ADMIN_PASSWORD_HASH が設定されていればそちらを優先する
const DEFAULT_ADMIN_PASSWORD_HASH: &str = "$argon2id$v=19$m=65536,t=3,p=4$rwjnw7itO1QP7YiQLYYPuw$bwYljZ/eNoieCwcPydAbagPt05UT9wcs+n0zH58ZxS4";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let admin_password_hash = std::env::var("INITIAL_ADMIN_PASSWORD_HASH")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD_HASH.to_string());

        let level_id = format!("(SELECT id FROM levels WHERE name = '{}')", ADMIN_LEVEL);
        let department_id = format!(
            "(SELECT id FROM departments WHERE code = '{}')",
            ADMIN_DEPARTMENT_CODE
        );
        let position_id = format!(
            "(SELECT id FROM positions WHERE name = '{}' AND level_id = {})",
            ADMIN_POSITION, level_id
        );
        let employee_id = format!("(SELECT id FROM employees WHERE email = '{}')", ADMIN_EMAIL);

        // 1. 管理者レベル・部署・ポジション
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Levels::Table)
                    .columns([Levels::Name, Levels::Rank, Levels::Description])
                    .values_panic([
                        ADMIN_LEVEL.into(),
                        1000.into(),
                        "Tüm ekranlara erişimi olan sistem kademesi".into(),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Departments::Table)
                    .columns([Departments::Name, Departments::Code])
                    .values_panic(["İnsan Kaynakları".into(), ADMIN_DEPARTMENT_CODE.into()])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Positions::Table)
                    .columns([Positions::Name, Positions::DepartmentId, Positions::LevelId])
                    .values_panic([
                        ADMIN_POSITION.into(),
                        Expr::cust(department_id),
                        Expr::cust(level_id.clone()),
                    ])
                    .to_owned(),
            )
            .await?;

        // 2. 管理者社員とアカウント
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Employees::Table)
                    .columns([
                        Employees::FirstName,
                        Employees::LastName,
                        Employees::NationalId,
                        Employees::Email,
                        Employees::HireDate,
                        Employees::PositionId,
                        Employees::IsActive,
                    ])
                    .values_panic([
                        "Sistem".into(),
                        "Yöneticisi".into(),
                        "10000000146".into(),
                        ADMIN_EMAIL.into(),
                        Expr::current_date().into(),
                        Expr::cust(position_id),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Accounts::Table)
                    .columns([
                        Accounts::Username,
                        Accounts::PasswordHash,
                        Accounts::EmployeeId,
                        Accounts::IsActive,
                    ])
                    .values_panic([
                        "admin".into(),
                        admin_password_hash.into(),
                        Expr::cust(employee_id),
                        true.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        // 3. 管理者レベルに全画面の全権限を付与
        let mut grants = Query::insert();
        grants.into_table(LevelScreenGrants::Table).columns([
            LevelScreenGrants::LevelId,
            LevelScreenGrants::ScreenPermissionId,
            LevelScreenGrants::CanRead,
            LevelScreenGrants::CanCreate,
            LevelScreenGrants::CanUpdate,
            LevelScreenGrants::CanDelete,
        ]);
        for (code, _) in SCREENS {
            grants.values_panic([
                Expr::cust(level_id.clone()),
                Expr::cust(format!(
                    "(SELECT id FROM screen_permissions WHERE screen_code = '{}')",
                    code
                )),
                true.into(),
                true.into(),
                true.into(),
                true.into(),
            ]);
        }
        manager.exec_stmt(grants.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 社員削除でアカウントはカスケード削除される
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Employees::Table)
                    .and_where(Expr::col(Employees::Email).eq(ADMIN_EMAIL))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Positions::Table)
                    .and_where(Expr::col(Positions::Name).eq(ADMIN_POSITION))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Departments::Table)
                    .and_where(Expr::col(Departments::Code).eq(ADMIN_DEPARTMENT_CODE))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Levels::Table)
                    .and_where(Expr::col(Levels::Name).eq(ADMIN_LEVEL))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
