use crate::utils::error::ResolutionError;

/// How many results a query may return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unbounded,
    AtMost(usize),
    /// Supplied text that is not a non-negative integer. Kept raw so the
    /// resolver can report it after the city check.
    Invalid(String),
}

impl Limit {
    /// Parse an optional raw `count` parameter. Empty text counts as absent.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Limit::Unbounded,
            Some(text) => match text.parse::<usize>() {
                Ok(n) => Limit::AtMost(n),
                Err(_) => Limit::Invalid(text.to_string()),
            },
        }
    }

    pub fn bound(&self) -> Result<Option<usize>, ResolutionError> {
        match self {
            Limit::Unbounded => Ok(None),
            Limit::AtMost(n) => Ok(Some(*n)),
            Limit::Invalid(_) => Err(ResolutionError::InvalidCount),
        }
    }
}

/// One café lookup request, already split into typed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CafeQuery {
    pub city: String,
    pub search: Option<String>,
    pub count: Limit,
}

impl CafeQuery {
    pub fn new(city: &str, search: Option<&str>, count: Option<&str>) -> Self {
        Self {
            city: city.to_string(),
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
            count: Limit::from_param(count),
        }
    }
}
