pub mod columns;
pub mod config;
pub mod error;
pub mod ffi;
pub mod pagination;
pub mod table;

pub use columns::{ColumnHeader, TableRow};
pub use config::{DEFAULT_ROWS_PER_PAGE, TableConfig};
pub use error::TableError;
pub use pagination::{OverflowPolicy, PageCursor, PageWindow, Paginator, total_pages};
pub use table::{PageIndicator, PageSnapshot, RowClick, TableState, TableView};
