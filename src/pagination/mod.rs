pub mod enhancer;
pub mod view;

pub use enhancer::{enhance_tables, BuiltinPaginator, PaginationWidget, ENHANCED_TABLES};
pub use view::{PageLength, PagedView, PaginationOptions, SortOrder};
