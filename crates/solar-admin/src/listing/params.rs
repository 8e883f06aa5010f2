use std::collections::BTreeMap;

use super::field::RecordField;
use super::query::{FacetFilter, ListQuery, ListQueryError, SortDirection};

/// Keys with a fixed meaning; every other key is read as a facet filter.
const RESERVED_KEYS: &[&str] = &[
    "search",
    "q",
    "search_fields",
    "sort",
    "direction",
    "page",
    "page_size",
    "lang",
];

/// Untyped listing request as it arrives from a query string or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQueryParams {
    pub search: Option<String>,
    pub search_fields: Vec<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl ListQueryParams {
    /// Whether `key` names a listing option rather than a facet column.
    pub fn is_reserved(key: &str) -> bool {
        RESERVED_KEYS.contains(&key)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match key.as_str() {
                "search" | "q" => params.search = Some(value),
                "search_fields" => {
                    params.search_fields = value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "sort" => params.sort = Some(value),
                "direction" => params.direction = Some(value),
                "page" => params.page = Some(value),
                "page_size" => params.page_size = Some(value),
                _ if Self::is_reserved(&key) => {}
                _ => {
                    params.filters.insert(key, value);
                }
            }
        }
        params
    }

    /// Resolves names against `F`. Unknown sort keys and directions fall back to the
    /// record defaults; unknown filter or search fields are rejected.
    pub fn into_query<F: RecordField>(
        self,
        default_page_size: usize,
    ) -> Result<ListQuery<F>, ListQueryError> {
        let mut query = ListQuery::<F>::new().page_size(default_page_size);

        for (name, raw) in &self.filters {
            let field =
                F::from_name(name).ok_or_else(|| ListQueryError::UnknownField(name.clone()))?;
            query = query.filter(field, FacetFilter::parse(raw));
        }

        let search_fields = self
            .search_fields
            .iter()
            .map(|name| F::from_name(name).ok_or_else(|| ListQueryError::UnknownField(name.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        query = query.search_fields(search_fields);

        if let Some(search) = self.search {
            query = query.search(search);
        }

        let sort = self
            .sort
            .as_deref()
            .and_then(F::from_name)
            .unwrap_or(F::DEFAULT_SORT);
        let direction = self
            .direction
            .as_deref()
            .and_then(SortDirection::parse)
            .unwrap_or(F::DEFAULT_DIRECTION);
        query = query.sort(sort, direction);

        if let Some(raw) = self.page.as_deref() {
            let page = parse_count("page", raw)?;
            if page < 1 {
                return Err(ListQueryError::InvalidPage);
            }
            query = query.page(page as usize);
        }

        if let Some(raw) = self.page_size.as_deref() {
            let page_size = parse_count("page_size", raw)?;
            if page_size < 1 {
                return Err(ListQueryError::InvalidPageSize);
            }
            query = query.page_size(page_size as usize);
        }

        Ok(query)
    }
}

fn parse_count(param: &'static str, raw: &str) -> Result<i64, ListQueryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ListQueryError::InvalidNumber {
            param,
            value: raw.to_string(),
        })
}
