use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_organization_tables::Levels;

/// 画面コードと表示名の初期データ
pub(crate) const SCREENS: &[(&str, &str)] = &[
    ("personeller", "Personeller"),
    ("kademeler", "Kademeler"),
    ("departmanlar", "Departmanlar"),
    ("pozisyonlar", "Pozisyonlar"),
    ("sehirler", "Şehirler"),
    ("izin-talepleri", "İzin Talepleri"),
    ("izin-onay", "İzin Onay"),
    ("zimmet-stok", "Zimmet Stok"),
    ("zimmet-onay", "Zimmet Onay"),
    ("zimmet-atama", "Zimmet Atama"),
    ("giris-cikis", "Giriş Çıkış"),
    ("egitimler", "Eğitimler"),
    ("egitim-atama", "Eğitim Atama"),
    ("is-ilanlari", "İş İlanları"),
    ("adaylar", "Adaylar"),
    ("basvurular", "Başvurular"),
    ("mulakatlar", "Mülakatlar"),
    ("teklifler", "Teklifler"),
    ("ekran-yetkileri", "Ekran Yetkileri"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScreenPermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScreenPermissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScreenPermissions::ScreenCode)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ScreenPermissions::DisplayName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScreenPermissions::Description).text().null())
                    .col(
                        ColumnDef::new(ScreenPermissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ScreenPermissions::UpdatedAt)
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
                    .table(LevelScreenGrants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LevelScreenGrants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::LevelId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::ScreenPermissionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::CanRead)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::CanCreate)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::CanUpdate)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LevelScreenGrants::CanDelete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_level_screen_grants_level_id")
                            .from(LevelScreenGrants::Table, LevelScreenGrants::LevelId)
                            .to(Levels::Table, Levels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_level_screen_grants_screen_permission_id")
                            .from(
                                LevelScreenGrants::Table,
                                LevelScreenGrants::ScreenPermissionId,
                            )
                            .to(ScreenPermissions::Table, ScreenPermissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_level_screen_grants_level_screen")
                    .table(LevelScreenGrants::Table)
                    .col(LevelScreenGrants::LevelId)
                    .col(LevelScreenGrants::ScreenPermissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 初期データ投入
        let mut insert = Query::insert();
        insert
            .into_table(ScreenPermissions::Table)
            .columns([ScreenPermissions::ScreenCode, ScreenPermissions::DisplayName]);
        for (code, name) in SCREENS {
            insert.values_panic([(*code).into(), (*name).into()]);
        }
        manager.exec_stmt(insert.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LevelScreenGrants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScreenPermissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum ScreenPermissions {
    Table,
    Id,
    ScreenCode,
    DisplayName,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum LevelScreenGrants {
    Table,
    Id,
    LevelId,
    ScreenPermissionId,
    CanRead,
    CanCreate,
    CanUpdate,
    CanDelete,
}
