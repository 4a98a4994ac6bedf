pub mod datetime;
pub mod query;

pub use datetime::{normalize_to_utc, parse_utc_datetime};
pub use query::{PaginationMeta, PaginationQuery};
