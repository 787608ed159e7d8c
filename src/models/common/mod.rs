mod choices;
pub mod pagination;

pub(crate) use choices::define_choice_enum;
pub use choices::lookup_label;
pub use pagination::{PaginationInfo, TableCounts, page_params};
