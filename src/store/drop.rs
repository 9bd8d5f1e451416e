//! The Drop entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the storage engine on creation
pub type DropId = i64;

/// Metadata projection of a drop, as returned by listings.
///
/// The payload itself stays an opaque serialized-text column and is only
/// decoded by [`DropStore::get`](crate::store::DropStore::get).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSummary {
    pub id: DropId,
    /// Creation instant, stored as RFC 3339 text
    pub time: DateTime<Utc>,
}
