// src/repository/training_repository.rs

use crate::domain::training_assignment_model::{
    self, ActiveModel as AssignmentActiveModel, Entity as AssignmentEntity,
};
use crate::domain::training_model::{self, ActiveModel as TrainingActiveModel, Entity as TrainingEntity};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, DeleteResult, Order, QueryFilter, QueryOrder};

#[derive(Debug, Clone)]
pub struct TrainingRepository {
    db: DbConn,
}

impl TrainingRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_all(&self, only_active: bool) -> Result<Vec<training_model::Model>, DbErr> {
        let mut query = TrainingEntity::find();
        if only_active {
            query = query.filter(training_model::Column::IsActive.eq(true));
        }
        query
            .order_by(training_model::Column::Title, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<training_model::Model>, DbErr> {
        TrainingEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(
        &self,
        training: TrainingActiveModel,
    ) -> Result<training_model::Model, DbErr> {
        training.insert(&self.db).await
    }

    pub async fn update(
        &self,
        training: TrainingActiveModel,
    ) -> Result<training_model::Model, DbErr> {
        training.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        TrainingEntity::delete_by_id(id).exec(&self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct TrainingAssignmentRepository {
    db: DbConn,
}

impl TrainingAssignmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<training_assignment_model::Model>, DbErr> {
        AssignmentEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_training_and_employee(
        &self,
        training_id: i32,
        employee_id: i32,
    ) -> Result<Option<training_assignment_model::Model>, DbErr> {
        AssignmentEntity::find()
            .filter(training_assignment_model::Column::TrainingId.eq(training_id))
            .filter(training_assignment_model::Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
    }

    pub async fn find_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<training_assignment_model::Model>, DbErr> {
        AssignmentEntity::find()
            .filter(training_assignment_model::Column::EmployeeId.eq(employee_id))
            .order_by(training_assignment_model::Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn find_by_training(
        &self,
        training_id: i32,
    ) -> Result<Vec<training_assignment_model::Model>, DbErr> {
        AssignmentEntity::find()
            .filter(training_assignment_model::Column::TrainingId.eq(training_id))
            .order_by(training_assignment_model::Column::EmployeeId, Order::Asc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        assignment: AssignmentActiveModel,
    ) -> Result<training_assignment_model::Model, DbErr> {
        assignment.insert(&self.db).await
    }

    pub async fn update(
        &self,
        assignment: AssignmentActiveModel,
    ) -> Result<training_assignment_model::Model, DbErr> {
        assignment.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        AssignmentEntity::delete_by_id(id).exec(&self.db).await
    }
}
