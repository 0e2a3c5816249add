pub mod column;
pub mod error;
pub mod paging;
pub mod row;
pub mod style;
mod value;

pub use column::{ColumnDef, Selector, SelectorFn};
pub use error::{Error, Result};
pub use paging::ItemsPerPage;
pub use row::{Row, TableData};
pub use style::{ConditionalRowStyle, PredicateFn, RowPredicate, RowStyle, first_matching_style};
pub use value::{cell_text, coerce_number, display_text};
