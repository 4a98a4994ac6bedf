// src/db.rs
use crate::config::{Config, MigrationErrorPolicy};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    // SQLite は単一接続のまま使う（インメモリDBは接続ごとに別物になる）
    if config.database_url.starts_with("sqlite:") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(20)
            .min_connections(2)
            .idle_timeout(Duration::from_secs(8 * 60))
            .max_lifetime(Duration::from_secs(30 * 60));
    }

    Database::connect(opt).await
}

/// 起動時にマイグレーションを適用する
///
/// 失敗時は `MigrationErrorPolicy` に従う。`Continue` ならログのみで Ok を返す。
pub async fn run_migrations(db: &DbPool, policy: MigrationErrorPolicy) -> Result<(), DbErr> {
    match Migrator::up(db, None).await {
        Ok(()) => {
            tracing::info!("Database migrations applied");
            Ok(())
        }
        Err(e) => match policy {
            MigrationErrorPolicy::Continue => {
                tracing::warn!(error = %e, "Migration failed, continuing startup");
                Ok(())
            }
            MigrationErrorPolicy::Abort => {
                tracing::error!(error = %e, "Migration failed, aborting startup");
                Err(e)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_migrations_apply_on_sqlite() {
        let config = AppConfig::for_testing();
        let db = create_db_pool(&config).await.unwrap();
        run_migrations(&db, MigrationErrorPolicy::Abort)
            .await
            .unwrap();
        // 二度目は適用済みなので何もしない
        run_migrations(&db, MigrationErrorPolicy::Abort)
            .await
            .unwrap();
    }
}
