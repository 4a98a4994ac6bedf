// src/service/employee_service.rs

use crate::api::dto::employee_dto::*;
use crate::domain::employee_model;
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::{EmployeeFilter, EmployeeRepository};
use crate::repository::organization_repository::PositionRepository;
use sea_orm::{DbConn, Set};
use std::collections::HashSet;
use tracing::{info, warn};

pub struct EmployeeService {
    employee_repo: EmployeeRepository,
    position_repo: PositionRepository,
}

impl EmployeeService {
    pub fn new(db: DbConn) -> Self {
        Self {
            employee_repo: EmployeeRepository::new(db.clone()),
            position_repo: PositionRepository::new(db),
        }
    }

    pub async fn get_employee(&self, id: i32) -> AppResult<employee_model::Model> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with id {} not found", id)))
    }

    /// (一覧, 総件数)
    pub async fn list_employees(
        &self,
        query: &EmployeeListQuery,
    ) -> AppResult<(Vec<employee_model::Model>, u64)> {
        let filter = EmployeeFilter {
            is_active: query.is_active,
            position_id: query.position_id,
            manager_id: query.manager_id,
        };
        let (page, per_page) = query.pagination.page_index_and_size();
        Ok(self
            .employee_repo
            .find_paginated(&filter, page, per_page)
            .await?)
    }

    pub async fn list_direct_reports(
        &self,
        manager_id: i32,
    ) -> AppResult<Vec<employee_model::Model>> {
        self.get_employee(manager_id).await?;
        Ok(self.employee_repo.find_direct_reports(manager_id).await?)
    }

    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> AppResult<employee_model::Model> {
        self.ensure_position_exists(request.position_id).await?;
        if let Some(manager_id) = request.manager_id {
            self.get_employee(manager_id).await?;
        }

        let employee = self
            .employee_repo
            .create(employee_model::ActiveModel {
                first_name: Set(request.first_name),
                last_name: Set(request.last_name),
                national_id: Set(request.national_id),
                email: Set(request.email.to_lowercase()),
                phone: Set(request.phone),
                hire_date: Set(request.hire_date),
                position_id: Set(request.position_id),
                manager_id: Set(request.manager_id),
                is_active: Set(true),
                ..Default::default()
            })
            .await?;

        info!(
            employee_id = employee.id,
            position_id = employee.position_id,
            "Employee created"
        );
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        id: i32,
        request: UpdateEmployeeRequest,
    ) -> AppResult<employee_model::Model> {
        let employee = self.get_employee(id).await?;
        let mut active: employee_model::ActiveModel = employee.into();

        if let Some(first_name) = request.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = request.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = request.email {
            active.email = Set(email.to_lowercase());
        }
        if request.phone.is_some() {
            active.phone = Set(request.phone);
        }
        if let Some(position_id) = request.position_id {
            self.ensure_position_exists(position_id).await?;
            active.position_id = Set(position_id);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }

        Ok(self.employee_repo.update(active).await?)
    }

    /// 上司を設定する。自分自身や自分の部下（間接含む）は設定できない
    pub async fn set_manager(
        &self,
        employee_id: i32,
        manager_id: Option<i32>,
    ) -> AppResult<employee_model::Model> {
        let employee = self.get_employee(employee_id).await?;

        if let Some(manager_id) = manager_id {
            if manager_id == employee_id {
                return Err(AppError::ValidationError(
                    "An employee cannot be their own manager".to_string(),
                ));
            }
            self.ensure_not_descendant(employee_id, manager_id).await?;
        }

        let mut active: employee_model::ActiveModel = employee.into();
        active.manager_id = Set(manager_id);
        let updated = self.employee_repo.update(active).await?;

        info!(employee_id, manager_id = ?manager_id, "Manager updated");
        Ok(updated)
    }

    /// 部下は削除されず manager_id が NULL になる。アカウント・休暇・打刻は連鎖削除
    pub async fn delete_employee(&self, id: i32) -> AppResult<()> {
        let result = self.employee_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Employee with id {} not found", id)));
        }
        info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    /// 候補の上司から上司チェーンを辿り、対象社員に行き着いたら循環とみなす
    async fn ensure_not_descendant(&self, employee_id: i32, manager_id: i32) -> AppResult<()> {
        let mut visited = HashSet::new();
        let mut current = Some(manager_id);

        while let Some(id) = current {
            if id == employee_id {
                warn!(employee_id, manager_id, "Rejected manager assignment that forms a cycle");
                return Err(AppError::ValidationError(
                    "Manager assignment would create a reporting cycle".to_string(),
                ));
            }
            // 既存データが壊れていても無限ループしない
            if !visited.insert(id) {
                break;
            }
            current = self.get_employee(id).await?.manager_id;
        }

        Ok(())
    }

    async fn ensure_position_exists(&self, position_id: i32) -> AppResult<()> {
        self.position_repo
            .find_by_id(position_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Position with id {} not found", position_id)))?;
        Ok(())
    }
}
