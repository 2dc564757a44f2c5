use crate::core::CafeCatalog;
use crate::domain::model::CafeQuery;
use crate::utils::error::ResolutionError;

/// Turns a [`CafeQuery`] into an ordered list of café names.
///
/// Resolution is a pure function of the query and the catalog:
///
/// 1. an unregistered (or empty) city is `UnknownCity`, before anything else is looked at;
/// 2. a supplied count that is not a non-negative integer is `InvalidCount`;
/// 3. a non-empty search keeps names containing it, compared after `to_lowercase` on both sides;
/// 4. the first `count` survivors are returned, in catalog order.
#[derive(Debug, Clone)]
pub struct Resolver<C: CafeCatalog> {
    catalog: C,
}

impl<C: CafeCatalog> Resolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn resolve(
        &self,
        city: &str,
        search: Option<&str>,
        count: Option<&str>,
    ) -> Result<Vec<String>, ResolutionError> {
        self.resolve_query(&CafeQuery::new(city, search, count))
    }

    pub fn resolve_query(&self, query: &CafeQuery) -> Result<Vec<String>, ResolutionError> {
        let cafes = self
            .catalog
            .lookup(&query.city)
            .ok_or(ResolutionError::UnknownCity)?;

        let limit = query.count.bound()?.unwrap_or(cafes.len());

        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let result = cafes
            .iter()
            .filter(|name| match &needle {
                Some(needle) => name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect();

        Ok(result)
    }
}
