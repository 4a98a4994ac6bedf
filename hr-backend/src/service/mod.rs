// src/service/mod.rs
pub mod auth_service;
pub mod clock_service;
pub mod employee_service;
pub mod leave_service;
pub mod organization_service;
pub mod permission_service;
pub mod recruitment_service;
pub mod training_service;
pub mod zimmet_service;
