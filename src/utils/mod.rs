pub mod sql;
pub mod validate;

pub use sql::{escape_like_pattern, like_contains};
pub use validate::{validate_email, validate_max_length, validate_username};
