// src/api/dto/mod.rs
pub mod auth_dto;
pub mod clock_dto;
pub mod common;
pub mod employee_dto;
pub mod leave_dto;
pub mod organization_dto;
pub mod permission_dto;
pub mod recruitment_dto;
pub mod training_dto;
pub mod zimmet_dto;

pub use common::{ApiResponse, PaginatedResponse};
