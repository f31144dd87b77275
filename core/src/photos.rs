//! Stateless HTTP request builder and response parser for the photos API.
//!
//! # Design
//! `PhotosClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the photo operations deterministic and free of I/O dependencies.
//!
//! The placeholder-image URL attached to a new photo is parameterized by a
//! seed in `[0,1)`; `build_add_photo` draws one at random, while
//! `build_add_photo_with_seed` lets tests pin it.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Album, NewPhoto, Photo};

/// Fixed placeholder-image service template: seed plus a 150x150 size.
pub fn placeholder_url(seed: f64) -> String {
    format!("https://picsum.photos/seed/{seed}/150/150")
}

/// Stateless, sans-IO client for the photos API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct PhotosClient {
    base_url: String,
}

impl PhotosClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/photos` filtered to the given album via the `albumId` query
    /// parameter.
    pub fn build_fetch_photos(&self, album: &Album) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/photos", self.base_url),
            query: vec![("albumId".to_string(), album.id.to_string())],
            headers: Vec::new(),
            body: None,
        }
    }

    /// The server's photo list, verbatim. No ordering guarantee.
    pub fn parse_fetch_photos(&self, response: HttpResponse) -> Result<Vec<Photo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// POST `/photos` creating a photo in `album` with a freshly drawn
    /// placeholder-image URL.
    pub fn build_add_photo(&self, album: &Album) -> Result<HttpRequest, ApiError> {
        self.build_add_photo_with_seed(album, fastrand::f64())
    }

    /// Same as [`build_add_photo`](Self::build_add_photo) with the
    /// placeholder seed pinned, for deterministic tests.
    pub fn build_add_photo_with_seed(
        &self,
        album: &Album,
        seed: f64,
    ) -> Result<HttpRequest, ApiError> {
        let input = NewPhoto {
            album_id: album.id,
            url: placeholder_url(seed),
        };
        let body =
            serde_json::to_string(&input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/photos", self.base_url),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The created photo as reported by the server.
    pub fn parse_add_photo(&self, response: HttpResponse) -> Result<Photo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// DELETE `/photos/{id}` for the given photo.
    pub fn build_remove_photo(&self, photo: &Photo) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/photos/{}", self.base_url, photo.id),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Whatever body the server sends back for the delete — commonly empty
    /// (mapped to `Null`) or the deleted resource. Any 2xx counts as success.
    pub fn parse_remove_photo(
        &self,
        response: HttpResponse,
    ) -> Result<serde_json::Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        if response.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map a mismatched status code to `ApiError::Http`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
