// src/domain/mod.rs
pub mod timestamp;
pub mod status;

// 組織
pub mod city_model;
pub mod department_model;
pub mod level_model;
pub mod position_model;

// 社員・アカウント
pub mod account_model;
pub mod clock_event_model;
pub mod employee_model;
pub mod leave_request_model;

// 画面権限
pub mod level_screen_grant_model;
pub mod screen_permission_model;

// zimmet
pub mod zimmet_assignment_model;
pub mod zimmet_stock_model;

// 研修
pub mod training_assignment_model;
pub mod training_model;

// 採用
pub mod application_model;
pub mod candidate_language_model;
pub mod candidate_model;
pub mod interview_model;
pub mod job_posting_model;
pub mod offer_model;
