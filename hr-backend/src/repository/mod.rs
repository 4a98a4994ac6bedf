// src/repository/mod.rs
pub mod account_repository;
pub mod clock_event_repository;
pub mod employee_repository;
pub mod leave_request_repository;
pub mod organization_repository;
pub mod recruitment_repository;
pub mod screen_permission_repository;
pub mod training_repository;
pub mod zimmet_repository;
