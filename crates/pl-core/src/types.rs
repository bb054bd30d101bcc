use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One contact record as returned by the upstream people API.
///
/// The upstream payload carries many more fields; only the ones the
/// analytics endpoints expose are deserialized, everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub secondary_email_address: Option<String>,
    pub personal_email_address: Option<String>,
    pub title: Option<String>,
}

/// Cursor metadata the upstream API attaches to every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingMetadata {
    pub per_page: Option<u32>,
    pub current_page: Option<u32>,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub paging: PagingMetadata,
}

/// Envelope for one page of the upstream people listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeoplePage {
    pub metadata: PageMetadata,
    pub data: Option<Vec<Person>>,
}
