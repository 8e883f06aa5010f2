use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::field::{ListRecord, RecordField};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Accepted value for one facet; `All` places no constraint on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetFilter {
    All,
    Equals(String),
}

impl FacetFilter {
    /// Empty values and `all` (any case) mean no constraint.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Equals(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListQueryError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("{param} must be a whole number, got '{value}'")]
    InvalidNumber { param: &'static str, value: String },
    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),
}

/// One window of a filtered and sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> ListPage<T> {
    pub fn map<U, F>(self, f: F) -> ListPage<U>
    where
        F: FnMut(T) -> U,
    {
        ListPage {
            items: self.items.into_iter().map(f).collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Typed listing request for records whose columns are named by `F`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    filters: Vec<(F, FacetFilter)>,
    search: String,
    search_fields: Vec<F>,
    sort: F,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl<F: RecordField> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            search: String::new(),
            search_fields: F::SEARCHABLE.to_vec(),
            sort: F::DEFAULT_SORT,
            direction: F::DEFAULT_DIRECTION,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F: RecordField> ListQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the facet for `field`, replacing any earlier value for the same field.
    pub fn filter(mut self, field: F, filter: FacetFilter) -> Self {
        self.filters.retain(|(existing, _)| *existing != field);
        self.filters.push((field, filter));
        self
    }

    pub fn equals(self, field: F, value: impl Into<String>) -> Self {
        self.filter(field, FacetFilter::Equals(value.into()))
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Restricts the search to `fields`; an empty list restores the defaults.
    pub fn search_fields(mut self, fields: Vec<F>) -> Self {
        self.search_fields = if fields.is_empty() {
            F::SEARCHABLE.to_vec()
        } else {
            fields
        };
        self
    }

    pub fn sort(mut self, field: F, direction: SortDirection) -> Self {
        self.sort = field;
        self.direction = direction;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort_field(&self) -> F {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// True when `record` passes every facet and the search.
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: ListRecord<Field = F>,
    {
        self.accepts(record, &self.search.to_lowercase())
    }

    fn accepts<T>(&self, record: &T, needle: &str) -> bool
    where
        T: ListRecord<Field = F>,
    {
        let facets_pass = self.filters.iter().all(|(field, filter)| match filter {
            FacetFilter::All => true,
            FacetFilter::Equals(expected) => record.field(*field).equals_raw(expected),
        });
        if !facets_pass {
            return false;
        }

        needle.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| record.field(*field).contains_folded(needle))
    }

    fn compare<T>(&self, left: &T, right: &T) -> Ordering
    where
        T: ListRecord<Field = F>,
    {
        let ordering = left.field(self.sort).compare(&right.field(self.sort));
        self.direction.apply(ordering)
    }

    /// Filters, sorts and slices `records`. Ties keep their input order.
    pub fn run<'a, T>(&self, records: &'a [T]) -> Result<ListPage<&'a T>, ListQueryError>
    where
        T: ListRecord<Field = F>,
    {
        if self.page_size == 0 {
            return Err(ListQueryError::InvalidPageSize);
        }
        if self.page == 0 {
            return Err(ListQueryError::InvalidPage);
        }

        let needle = self.search.to_lowercase();
        let mut matched: Vec<&'a T> = records
            .iter()
            .filter(|record| self.accepts(*record, &needle))
            .collect();
        matched.sort_by(|left, right| self.compare(*left, *right));

        let total_matched = matched.len();
        let total_pages = total_matched.div_ceil(self.page_size);
        let start = (self.page - 1).saturating_mul(self.page_size);
        let items = matched
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        Ok(ListPage {
            items,
            total_matched,
            total_pages,
            page: self.page,
            page_size: self.page_size,
        })
    }
}
