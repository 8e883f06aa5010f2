//! Filter, search, sort and paginate pipeline shared by every admin dataset.
//!
//! A dataset opts in by implementing [`ListRecord`] for its record type and [`RecordField`]
//! for the enum naming its columns. [`ListQuery`] then evaluates facet filters, the free-text
//! search, a stable sort and the page window in one pass over the borrowed records.

mod field;
mod params;
mod query;


pub use field::{FieldValue, ListRecord, RecordField};
pub use params::ListQueryParams;
pub use query::{FacetFilter, ListPage, ListQuery, ListQueryError, SortDirection, DEFAULT_PAGE_SIZE};
