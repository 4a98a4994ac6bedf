// tests/integration/mod.rs

pub mod auth_tests;
pub mod clock_tests;
pub mod employee_tests;
pub mod leave_tests;
pub mod organization_tests;
pub mod permission_tests;
pub mod recruitment_tests;
pub mod timestamp_tests;
pub mod training_tests;
pub mod zimmet_tests;
