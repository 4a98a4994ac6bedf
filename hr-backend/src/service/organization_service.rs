// src/service/organization_service.rs

use crate::api::dto::organization_dto::*;
use crate::domain::{city_model, department_model, level_model, position_model};
use crate::error::{AppError, AppResult};
use crate::repository::organization_repository::{
    CityRepository, DepartmentRepository, LevelRepository, PositionRepository,
};
use sea_orm::{DbConn, Set};
use tracing::info;

/// 職位・部署・ポジション・都市のマスタ管理
pub struct OrganizationService {
    level_repo: LevelRepository,
    department_repo: DepartmentRepository,
    position_repo: PositionRepository,
    city_repo: CityRepository,
}

impl OrganizationService {
    pub fn new(db: DbConn) -> Self {
        Self {
            level_repo: LevelRepository::new(db.clone()),
            department_repo: DepartmentRepository::new(db.clone()),
            position_repo: PositionRepository::new(db.clone()),
            city_repo: CityRepository::new(db),
        }
    }

    // --- Level ---

    pub async fn list_levels(&self) -> AppResult<Vec<level_model::Model>> {
        Ok(self.level_repo.find_all().await?)
    }

    pub async fn get_level(&self, id: i32) -> AppResult<level_model::Model> {
        self.level_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Level with id {} not found", id)))
    }

    pub async fn create_level(&self, request: CreateLevelRequest) -> AppResult<level_model::Model> {
        let level = self
            .level_repo
            .create(level_model::ActiveModel {
                name: Set(request.name),
                rank: Set(request.rank),
                description: Set(request.description),
                ..Default::default()
            })
            .await?;
        info!(level_id = level.id, name = %level.name, "Level created");
        Ok(level)
    }

    pub async fn update_level(
        &self,
        id: i32,
        request: UpdateLevelRequest,
    ) -> AppResult<level_model::Model> {
        let level = self.get_level(id).await?;
        let mut active: level_model::ActiveModel = level.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(rank) = request.rank {
            active.rank = Set(rank);
        }
        if request.description.is_some() {
            active.description = Set(request.description);
        }
        Ok(self.level_repo.update(active).await?)
    }

    pub async fn delete_level(&self, id: i32) -> AppResult<()> {
        let result = self.level_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Level with id {} not found", id)));
        }
        info!(level_id = id, "Level deleted");
        Ok(())
    }

    // --- Department ---

    pub async fn list_departments(&self) -> AppResult<Vec<department_model::Model>> {
        Ok(self.department_repo.find_all().await?)
    }

    pub async fn get_department(&self, id: i32) -> AppResult<department_model::Model> {
        self.department_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Department with id {} not found", id)))
    }

    /// 部署コードの重複は一意制約に任せる（409 ConstraintViolation）
    pub async fn create_department(
        &self,
        request: CreateDepartmentRequest,
    ) -> AppResult<department_model::Model> {
        let department = self
            .department_repo
            .create(department_model::ActiveModel {
                name: Set(request.name),
                code: Set(request.code),
                description: Set(request.description),
                is_active: Set(true),
                ..Default::default()
            })
            .await?;
        info!(department_id = department.id, code = %department.code, "Department created");
        Ok(department)
    }

    pub async fn update_department(
        &self,
        id: i32,
        request: UpdateDepartmentRequest,
    ) -> AppResult<department_model::Model> {
        let department = self.get_department(id).await?;
        let mut active: department_model::ActiveModel = department.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(code) = request.code {
            active.code = Set(code);
        }
        if request.description.is_some() {
            active.description = Set(request.description);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }
        Ok(self.department_repo.update(active).await?)
    }

    pub async fn delete_department(&self, id: i32) -> AppResult<()> {
        let result = self.department_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Department with id {} not found", id)));
        }
        info!(department_id = id, "Department deleted");
        Ok(())
    }

    // --- Position ---

    pub async fn list_positions(
        &self,
        department_id: Option<i32>,
    ) -> AppResult<Vec<position_model::Model>> {
        Ok(self.position_repo.find_all(department_id).await?)
    }

    pub async fn get_position(&self, id: i32) -> AppResult<position_model::Model> {
        self.position_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Position with id {} not found", id)))
    }

    pub async fn create_position(
        &self,
        request: CreatePositionRequest,
    ) -> AppResult<position_model::Model> {
        self.get_department(request.department_id).await?;
        self.get_level(request.level_id).await?;

        let position = self
            .position_repo
            .create(position_model::ActiveModel {
                name: Set(request.name),
                department_id: Set(request.department_id),
                level_id: Set(request.level_id),
                description: Set(request.description),
                ..Default::default()
            })
            .await?;
        info!(
            position_id = position.id,
            department_id = position.department_id,
            level_id = position.level_id,
            "Position created"
        );
        Ok(position)
    }

    pub async fn update_position(
        &self,
        id: i32,
        request: UpdatePositionRequest,
    ) -> AppResult<position_model::Model> {
        let position = self.get_position(id).await?;
        let mut active: position_model::ActiveModel = position.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(department_id) = request.department_id {
            self.get_department(department_id).await?;
            active.department_id = Set(department_id);
        }
        if let Some(level_id) = request.level_id {
            self.get_level(level_id).await?;
            active.level_id = Set(level_id);
        }
        if request.description.is_some() {
            active.description = Set(request.description);
        }
        Ok(self.position_repo.update(active).await?)
    }

    pub async fn delete_position(&self, id: i32) -> AppResult<()> {
        let result = self.position_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Position with id {} not found", id)));
        }
        Ok(())
    }

    // --- City ---

    pub async fn list_cities(&self) -> AppResult<Vec<city_model::Model>> {
        Ok(self.city_repo.find_all().await?)
    }

    pub async fn get_city(&self, id: i32) -> AppResult<city_model::Model> {
        self.city_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City with id {} not found", id)))
    }

    pub async fn create_city(&self, request: CreateCityRequest) -> AppResult<city_model::Model> {
        Ok(self
            .city_repo
            .create(city_model::ActiveModel {
                name: Set(request.name),
                plate_code: Set(request.plate_code),
                ..Default::default()
            })
            .await?)
    }

    pub async fn update_city(
        &self,
        id: i32,
        request: UpdateCityRequest,
    ) -> AppResult<city_model::Model> {
        let city = self.get_city(id).await?;
        let mut active: city_model::ActiveModel = city.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(plate_code) = request.plate_code {
            active.plate_code = Set(plate_code);
        }
        Ok(self.city_repo.update(active).await?)
    }

    pub async fn delete_city(&self, id: i32) -> AppResult<()> {
        let result = self.city_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("City with id {} not found", id)));
        }
        Ok(())
    }
}
