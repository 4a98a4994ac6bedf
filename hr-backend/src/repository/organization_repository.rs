// src/repository/organization_repository.rs

use crate::domain::city_model::{self, ActiveModel as CityActiveModel, Entity as CityEntity};
use crate::domain::department_model::{
    self, ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity,
};
use crate::domain::level_model::{self, ActiveModel as LevelActiveModel, Entity as LevelEntity};
use crate::domain::position_model::{
    self, ActiveModel as PositionActiveModel, Entity as PositionEntity,
};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

// --- Level (kademe) ---

#[derive(Debug, Clone)]
pub struct LevelRepository {
    db: DbConn,
}

impl LevelRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 上位の職位から順に取得
    pub async fn find_all(&self) -> Result<Vec<level_model::Model>, DbErr> {
        LevelEntity::find()
            .order_by(level_model::Column::Rank, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<level_model::Model>, DbErr> {
        LevelEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(&self, level: LevelActiveModel) -> Result<level_model::Model, DbErr> {
        level.insert(&self.db).await
    }

    pub async fn update(&self, level: LevelActiveModel) -> Result<level_model::Model, DbErr> {
        level.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        LevelEntity::delete_by_id(id).exec(&self.db).await
    }
}

// --- Department ---

#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    db: DbConn,
}

impl DepartmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<department_model::Model>, DbErr> {
        DepartmentEntity::find()
            .order_by(department_model::Column::Name, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find()
            .filter(department_model::Column::Code.eq(code))
            .one(&self.db)
            .await
    }

    pub async fn create(
        &self,
        department: DepartmentActiveModel,
    ) -> Result<department_model::Model, DbErr> {
        department.insert(&self.db).await
    }

    pub async fn update(
        &self,
        department: DepartmentActiveModel,
    ) -> Result<department_model::Model, DbErr> {
        department.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        DepartmentEntity::delete_by_id(id).exec(&self.db).await
    }
}

// --- Position ---

#[derive(Debug, Clone)]
pub struct PositionRepository {
    db: DbConn,
}

impl PositionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(
        &self,
        department_id: Option<i32>,
    ) -> Result<Vec<position_model::Model>, DbErr> {
        let mut query = PositionEntity::find();
        if let Some(department_id) = department_id {
            query = query.filter(position_model::Column::DepartmentId.eq(department_id));
        }
        query
            .order_by(position_model::Column::Name, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<position_model::Model>, DbErr> {
        PositionEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(
        &self,
        position: PositionActiveModel,
    ) -> Result<position_model::Model, DbErr> {
        position.insert(&self.db).await
    }

    pub async fn update(
        &self,
        position: PositionActiveModel,
    ) -> Result<position_model::Model, DbErr> {
        position.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        PositionEntity::delete_by_id(id).exec(&self.db).await
    }
}

// --- City ---

#[derive(Debug, Clone)]
pub struct CityRepository {
    db: DbConn,
}

impl CityRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<city_model::Model>, DbErr> {
        CityEntity::find()
            .order_by(city_model::Column::PlateCode, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<city_model::Model>, DbErr> {
        CityEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(&self, city: CityActiveModel) -> Result<city_model::Model, DbErr> {
        city.insert(&self.db).await
    }

    pub async fn update(&self, city: CityActiveModel) -> Result<city_model::Model, DbErr> {
        city.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        CityEntity::delete_by_id(id).exec(&self.db).await
    }
}
