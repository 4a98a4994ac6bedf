pub mod jwt;
pub mod password;
pub mod transaction;
pub mod validation;
