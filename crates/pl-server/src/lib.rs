//! Peoplelens HTTP API (Axum).
//!
//! JSON endpoints over the contact analytics core: the raw people list,
//! email character histograms, and possible-duplicate email groups.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::people_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests;
