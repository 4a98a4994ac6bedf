// src/service/permission_service.rs

use crate::api::dto::permission_dto::*;
use crate::domain::{level_screen_grant_model, screen_permission_model};
use crate::error::{AppError, AppResult};
use crate::navigation::{ActionSet, ScreenGrant};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::organization_repository::LevelRepository;
use crate::repository::screen_permission_repository::ScreenPermissionRepository;
use sea_orm::{DbConn, Set};
use std::collections::HashMap;
use tracing::{debug, info};

/// 画面権限マスタと職位ごとの付与
pub struct PermissionService {
    db: DbConn,
    screen_repo: ScreenPermissionRepository,
    level_repo: LevelRepository,
    employee_repo: EmployeeRepository,
}

impl PermissionService {
    pub fn new(db: DbConn) -> Self {
        Self {
            screen_repo: ScreenPermissionRepository::new(db.clone()),
            level_repo: LevelRepository::new(db.clone()),
            employee_repo: EmployeeRepository::new(db.clone()),
            db,
        }
    }

    // --- 画面 ---

    pub async fn list_screens(&self) -> AppResult<Vec<screen_permission_model::Model>> {
        Ok(self.screen_repo.find_all().await?)
    }

    pub async fn get_screen(&self, id: i32) -> AppResult<screen_permission_model::Model> {
        self.screen_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Screen permission with id {} not found", id)))
    }

    pub async fn create_screen(
        &self,
        request: CreateScreenPermissionRequest,
    ) -> AppResult<screen_permission_model::Model> {
        let screen = self
            .screen_repo
            .create(screen_permission_model::ActiveModel {
                screen_code: Set(request.screen_code),
                display_name: Set(request.display_name),
                description: Set(request.description),
                ..Default::default()
            })
            .await?;
        info!(screen_id = screen.id, screen_code = %screen.screen_code, "Screen permission created");
        Ok(screen)
    }

    pub async fn update_screen(
        &self,
        id: i32,
        request: UpdateScreenPermissionRequest,
    ) -> AppResult<screen_permission_model::Model> {
        let screen = self.get_screen(id).await?;
        let mut active: screen_permission_model::ActiveModel = screen.into();
        if let Some(display_name) = request.display_name {
            active.display_name = Set(display_name);
        }
        if request.description.is_some() {
            active.description = Set(request.description);
        }
        Ok(self.screen_repo.update(active).await?)
    }

    /// 付与も連鎖削除される
    pub async fn delete_screen(&self, id: i32) -> AppResult<()> {
        let result = self.screen_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "Screen permission with id {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- 職位ごとの付与 ---

    pub async fn list_level_grants(&self, level_id: i32) -> AppResult<Vec<ScreenGrant>> {
        self.level_repo
            .find_by_id(level_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Level with id {} not found", level_id)))?;
        self.grants_for_level(level_id).await
    }

    /// 職位の付与を丸ごと置き換える。未知の画面コードがあれば何も変更しない
    pub async fn set_level_grants(
        &self,
        level_id: i32,
        request: SetLevelGrantsRequest,
    ) -> AppResult<Vec<ScreenGrant>> {
        self.level_repo
            .find_by_id(level_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Level with id {} not found", level_id)))?;

        let grant_count = request.grants.len();
        crate::with_transaction!(self.db, |txn| async move {
            let codes: Vec<String> = request
                .grants
                .iter()
                .map(|g| g.screen_code.clone())
                .collect();
            let screens: HashMap<String, i32> =
                ScreenPermissionRepository::find_by_codes_with(txn, codes)
                    .await?
                    .into_iter()
                    .map(|s| (s.screen_code, s.id))
                    .collect();

            let unknown: Vec<String> = request
                .grants
                .iter()
                .filter(|g| !screens.contains_key(&g.screen_code))
                .map(|g| format!("Unknown screen code: {}", g.screen_code))
                .collect();
            if !unknown.is_empty() {
                return Err(AppError::ValidationErrors(unknown));
            }

            ScreenPermissionRepository::delete_grants_for_level_with(txn, level_id).await?;
            for grant in request.grants {
                let Some(&screen_id) = screens.get(&grant.screen_code) else {
                    continue;
                };
                ScreenPermissionRepository::insert_grant_with(
                    txn,
                    level_screen_grant_model::ActiveModel {
                        level_id: Set(level_id),
                        screen_permission_id: Set(screen_id),
                        can_read: Set(grant.actions.can_read),
                        can_create: Set(grant.actions.can_create),
                        can_update: Set(grant.actions.can_update),
                        can_delete: Set(grant.actions.can_delete),
                        ..Default::default()
                    },
                )
                .await?;
            }
            Ok(())
        })?;

        info!(level_id, grant_count, "Level screen grants replaced");
        self.grants_for_level(level_id).await
    }

    /// 社員 → ポジション → 職位 → 付与 の順に解決する。職位が無ければ空
    pub async fn grants_for_employee(&self, employee_id: i32) -> AppResult<Vec<ScreenGrant>> {
        match self.employee_repo.find_level_id(employee_id).await? {
            Some(level_id) => self.grants_for_level(level_id).await,
            None => {
                debug!(employee_id, "No level resolved for employee");
                Ok(Vec::new())
            }
        }
    }

    async fn grants_for_level(&self, level_id: i32) -> AppResult<Vec<ScreenGrant>> {
        let mut grants: Vec<ScreenGrant> = self
            .screen_repo
            .find_grants_for_level(level_id)
            .await?
            .into_iter()
            .filter_map(|(grant, screen)| {
                screen.map(|screen| ScreenGrant {
                    screen_code: screen.screen_code,
                    actions: ActionSet {
                        can_read: grant.can_read,
                        can_create: grant.can_create,
                        can_update: grant.can_update,
                        can_delete: grant.can_delete,
                    },
                })
            })
            .collect();
        grants.sort_by(|a, b| a.screen_code.cmp(&b.screen_code));
        Ok(grants)
    }
}
