// src/service/training_service.rs

use crate::api::dto::training_dto::*;
use crate::domain::status::TrainingAssignmentStatus;
use crate::domain::{training_assignment_model, training_model};
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::training_repository::{TrainingAssignmentRepository, TrainingRepository};
use chrono::Utc;
use sea_orm::{DbConn, Set};
use tracing::info;

pub struct TrainingService {
    training_repo: TrainingRepository,
    assignment_repo: TrainingAssignmentRepository,
    employee_repo: EmployeeRepository,
}

impl TrainingService {
    pub fn new(db: DbConn) -> Self {
        Self {
            training_repo: TrainingRepository::new(db.clone()),
            assignment_repo: TrainingAssignmentRepository::new(db.clone()),
            employee_repo: EmployeeRepository::new(db),
        }
    }

    // --- 研修 ---

    pub async fn list_trainings(&self, only_active: bool) -> AppResult<Vec<training_model::Model>> {
        Ok(self.training_repo.find_all(only_active).await?)
    }

    pub async fn get_training(&self, id: i32) -> AppResult<training_model::Model> {
        self.training_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Training with id {} not found", id)))
    }

    pub async fn create_training(
        &self,
        request: CreateTrainingRequest,
    ) -> AppResult<training_model::Model> {
        let training = self
            .training_repo
            .create(training_model::ActiveModel {
                title: Set(request.title),
                description: Set(request.description),
                video_url: Set(request.video_url),
                duration_minutes: Set(request.duration_minutes),
                is_active: Set(true),
                ..Default::default()
            })
            .await?;
        info!(training_id = training.id, title = %training.title, "Training created");
        Ok(training)
    }

    pub async fn update_training(
        &self,
        id: i32,
        request: UpdateTrainingRequest,
    ) -> AppResult<training_model::Model> {
        let training = self.get_training(id).await?;
        let mut active: training_model::ActiveModel = training.into();
        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if request.description.is_some() {
            active.description = Set(request.description);
        }
        if let Some(video_url) = request.video_url {
            active.video_url = Set(video_url);
        }
        if let Some(duration_minutes) = request.duration_minutes {
            active.duration_minutes = Set(duration_minutes);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }
        Ok(self.training_repo.update(active).await?)
    }

    /// 割当も連鎖削除される
    pub async fn delete_training(&self, id: i32) -> AppResult<()> {
        let result = self.training_repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Training with id {} not found", id)));
        }
        Ok(())
    }

    // --- 割当 ---

    /// 研修を社員に割り当てる。既に割り当て済みの社員は既存の割当をそのまま返す
    pub async fn assign(
        &self,
        training_id: i32,
        assigned_by_id: i32,
        request: AssignTrainingRequest,
    ) -> AppResult<Vec<training_assignment_model::Model>> {
        let training = self.get_training(training_id).await?;
        if !training.is_active {
            return Err(AppError::Conflict(format!(
                "Training {} is not active",
                training_id
            )));
        }

        let mut assignments = Vec::with_capacity(request.employee_ids.len());
        for employee_id in request.employee_ids {
            if let Some(existing) = self
                .assignment_repo
                .find_by_training_and_employee(training_id, employee_id)
                .await?
            {
                assignments.push(existing);
                continue;
            }

            self.employee_repo
                .find_by_id(employee_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Employee with id {} not found", employee_id))
                })?;

            let assignment = self
                .assignment_repo
                .create(training_assignment_model::ActiveModel {
                    training_id: Set(training_id),
                    employee_id: Set(employee_id),
                    assigned_by_id: Set(Some(assigned_by_id)),
                    due_date: Set(request.due_date),
                    status: Set(TrainingAssignmentStatus::Assigned),
                    watched_percent: Set(0),
                    ..Default::default()
                })
                .await?;
            info!(
                assignment_id = assignment.id,
                training_id,
                employee_id,
                "Training assigned"
            );
            assignments.push(assignment);
        }

        Ok(assignments)
    }

    pub async fn list_for_employee(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<training_assignment_model::Model>> {
        Ok(self.assignment_repo.find_by_employee(employee_id).await?)
    }

    pub async fn list_for_training(
        &self,
        training_id: i32,
    ) -> AppResult<Vec<training_assignment_model::Model>> {
        self.get_training(training_id).await?;
        Ok(self.assignment_repo.find_by_training(training_id).await?)
    }

    /// 視聴進捗を報告する。進捗は減らない。100 に達すると修了証を発行する
    pub async fn report_progress(
        &self,
        assignment_id: i32,
        employee_id: i32,
        request: TrainingProgressRequest,
    ) -> AppResult<training_assignment_model::Model> {
        let assignment = self
            .assignment_repo
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Training assignment with id {} not found", assignment_id))
            })?;

        if assignment.employee_id != employee_id {
            return Err(AppError::Forbidden(
                "Progress can only be reported for your own assignments".to_string(),
            ));
        }
        if assignment.status == TrainingAssignmentStatus::Completed {
            return Ok(assignment);
        }

        let watched_percent = assignment.watched_percent.max(request.watched_percent.clamp(0, 100));
        let status = TrainingAssignmentStatus::from_watched_percent(watched_percent);

        let mut active: training_assignment_model::ActiveModel = assignment.into();
        active.watched_percent = Set(watched_percent);
        active.status = Set(status);
        if status == TrainingAssignmentStatus::Completed {
            active.completed_at = Set(Some(Utc::now()));
            active.certificate_code = Set(Some(new_certificate_code()));
        }
        let updated = self.assignment_repo.update(active).await?;

        if updated.status == TrainingAssignmentStatus::Completed {
            info!(
                assignment_id,
                employee_id,
                certificate_code = ?updated.certificate_code,
                "Training completed"
            );
        }
        Ok(updated)
    }
}

/// 修了証コード（"CRT-" + 大文字16進16桁）
fn new_certificate_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 8] = rng.gen();
    let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    format!("CRT-{}", hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_code_shape() {
        let code = new_certificate_code();
        assert_eq!(code.len(), 20);
        assert!(code.starts_with("CRT-"));
        assert!(code[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert_ne!(code, new_certificate_code());
    }
}
