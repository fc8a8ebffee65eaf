use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle stamps the CMS attaches to every published entry.
///
/// Flattened into the owning attributes, so on the wire these appear as
/// sibling `createdAt` / `updatedAt` / `publishedAt` fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
}

impl Timestamps {
    /// All three stamps set to `instant`.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
            published_at: instant,
        }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}
