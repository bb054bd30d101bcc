//! Application state shared across all handlers.

use pl_analytics::{default_ignore_set, ThresholdSettings};
use pl_client::PeopleSource;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared application state. The people source is injected so handlers can
/// be exercised without the real upstream API.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PeopleSource>,
    pub settings: ThresholdSettings,
    pub ignore: Arc<HashSet<char>>,
}

impl AppState {
    pub fn new(people: Arc<dyn PeopleSource>) -> Self {
        Self {
            people,
            settings: ThresholdSettings::default(),
            ignore: Arc::new(default_ignore_set()),
        }
    }
}
