//! Typed collection fetch client for the JSONPlaceholder API.
//!
//! # Overview
//! Fetches `/posts` and `/users`, checks the HTTP status, and decodes the JSON
//! array into typed records. Results land in an observable `CollectionStore`
//! that a UI layer reads through `CollectionView`.
//!
//! # Design
//! - `client` is sans-IO: `build_fetch` validates the URL, `parse_collection`
//!   checks the status and decodes. A native host can drive these directly.
//! - `loader` runs the round-trip itself with reqwest and supports
//!   cancellation through a `CancellationToken`.
//! - Decoding is all-or-nothing; a single bad record fails the collection.
//! - Success means a status in `[200, 300)`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod state;
pub mod types;

pub use client::{
    build_fetch, check_status, decode_collection, parse_collection, PlaceholderClient,
};
pub use config::{ConfigError, LoaderConfig};
pub use error::FetchError;
pub use http::{HttpRequest, HttpResponse};
pub use loader::{LoadOutcome, RemoteCollectionLoader};
pub use state::{CollectionStore, CollectionView, LoadStatus, Snapshot};
pub use types::{Address, Company, Geo, Post, Record, User};

pub use tokio_util::sync::CancellationToken;
