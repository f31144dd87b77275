//! Domain DTOs for the media API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. All entities
//! live on the server — these are transient request/response shapes, not an
//! authoritative local copy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A photo collection, referenced (not owned) by photo operations.
///
/// Only the id is needed client-side; the server holds everything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub id: Uuid,
}

/// A single photo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub album_id: Uuid,
    pub url: String,
}

/// Request payload for creating a photo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub album_id: Uuid,
    pub url: String,
}

/// A user as returned by the API: an id plus whatever other fields the
/// server sends, kept verbatim. No schema is enforced beyond the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
