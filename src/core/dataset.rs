use crate::core::CafeCatalog;
use crate::utils::error::{CafeError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

const BUILTIN_CITIES: &[(&str, &[&str])] = &[
    (
        "moscow",
        &[
            "Мир кофе",
            "Сладкоежка",
            "Кофе и завтраки",
            "Сытый студент",
            "Ложка и вилка",
        ],
    ),
    ("tula", &["Кофе с собой", "Пирожковая", "Торты и пироги"]),
];

static BUILTIN: LazyLock<Dataset> = LazyLock::new(|| Dataset {
    cities: BUILTIN_CITIES
        .iter()
        .map(|(city, cafes)| {
            (
                city.to_string(),
                cafes.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect(),
});

/// Immutable city → café list mapping. Every registered city has at least one café.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    cities: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitySummary {
    pub city: String,
    pub cafes: usize,
}

impl Dataset {
    /// The dataset served when no configuration supplies one.
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut cities = HashMap::new();

        for (city, cafes) in entries {
            let city: String = city.into();
            let field = format!("cities.{}", city);
            validate_non_empty_string("cities", &city)?;
            validate_non_empty_list(&field, &cafes)?;

            let cafes: Vec<String> = cafes.into_iter().map(Into::into).collect();
            if cities.insert(city.clone(), cafes).is_some() {
                return Err(CafeError::InvalidConfigValueError {
                    field,
                    value: city,
                    reason: "City is registered more than once".to_string(),
                });
            }
        }

        Ok(Self { cities })
    }

    /// Registered city keys, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn summary(&self) -> Vec<CitySummary> {
        self.cities()
            .into_iter()
            .map(|city| CitySummary {
                city: city.to_string(),
                cafes: self.cities[city].len(),
            })
            .collect()
    }
}

impl CafeCatalog for Dataset {
    fn lookup(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }
}
