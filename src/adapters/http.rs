//! Request adapter: raw query string in, status + plain-text body out.
//!
//! `GET /cafe?city=..&search=..&count=..`
//!
//! - `200 OK` with the café names joined by `", "` (empty body for no results)
//! - `400 Bad Request` with `unknown city` or `incorrect count`

use crate::core::resolver::Resolver;
use crate::core::{CafeCatalog, CafeQuery, ResolutionError};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use url::form_urlencoded;

pub const CAFE_PATH: &str = "/cafe";
pub const SEPARATOR: &str = ", ";

pub fn router<C: CafeCatalog + 'static>(resolver: Arc<Resolver<C>>) -> Router {
    Router::new()
        .route(CAFE_PATH, get(list_cafes::<C>))
        .with_state(resolver)
}

/// Split a raw query string into a [`CafeQuery`].
///
/// The first occurrence of a repeated parameter wins, and a parameter with an
/// empty value is treated as absent.
pub fn parse_query(raw: Option<&str>) -> CafeQuery {
    let mut city: Option<String> = None;
    let mut search: Option<String> = None;
    let mut count: Option<String> = None;

    for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        let slot = match &*key {
            "city" => &mut city,
            "search" => &mut search,
            "count" => &mut count,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    CafeQuery::new(
        city.as_deref().unwrap_or_default(),
        search.as_deref(),
        count.as_deref(),
    )
}

pub fn render_cafes(cafes: &[String]) -> String {
    cafes.join(SEPARATOR)
}

async fn list_cafes<C: CafeCatalog + 'static>(
    State(resolver): State<Arc<Resolver<C>>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = parse_query(raw.as_deref());

    match resolver.resolve_query(&query) {
        Ok(cafes) => {
            tracing::debug!(
                city = %query.city,
                search = ?query.search,
                results = cafes.len(),
                "Resolved cafe query"
            );
            (StatusCode::OK, render_cafes(&cafes)).into_response()
        }
        Err(e) => {
            tracing::warn!(city = %query.city, count = ?query.count, "Rejected cafe query: {}", e);
            e.into_response()
        }
    }
}

impl IntoResponse for ResolutionError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
