//! API client core for the media service (photos and users).
//!
//! # Overview
//! Two thin layers over a local REST server:
//!
//! - [`PhotosClient`] builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern). The caller
//!   executes the actual HTTP round-trip, keeping the photo operations fully
//!   deterministic and testable.
//! - [`UsersClient`] performs its own asynchronous HTTP calls via reqwest,
//!   one request per operation, and resolves with the parsed payload.
//!
//! # Design
//! - Clients are stateless apart from an explicit `base_url` passed at
//!   construction; there is no ambient endpoint constant.
//! - No retries, no backoff, no caching: every failure propagates unmodified
//!   to the caller as an [`ApiError`].
//! - Placeholder-image URL generation is seedable so tests stay
//!   deterministic.

pub mod error;
pub mod http;
pub mod photos;
pub mod types;
pub mod users;

pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use photos::PhotosClient;
pub use types::{Album, NewPhoto, Photo, User};
pub use users::UsersClient;
