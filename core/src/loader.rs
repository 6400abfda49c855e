//! Async collection loader.
//!
//! # Design
//! `fetch` runs one GET between `build_fetch` and `decode_collection`: no
//! retries, no custom headers, redirects and timeouts left to reqwest unless
//! `LoaderConfig::timeout` is set. The loader holds no state besides the
//! connection pool, so one instance can serve any number of concurrent callers.
//!
//! `load_into` is the screen-facing entry point. Disposal of the screen is
//! modelled by a `CancellationToken`: once it fires the in-flight request
//! future is dropped and the store is not written again.

use std::sync::Arc;

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::client::{build_fetch, check_status, decode_collection, PlaceholderClient};
use crate::config::LoaderConfig;
use crate::error::FetchError;
use crate::state::CollectionStore;
use crate::types::{Post, Record, User};

/// How a `load_into` call ended.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed(Arc<FetchError>),
    /// The scope was cancelled; the store was left as it was.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct RemoteCollectionLoader {
    http: Client,
}

impl RemoteCollectionLoader {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &LoaderConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Fetch `url` and decode it as a collection of `R`.
    #[instrument(skip(self), fields(collection = R::COLLECTION))]
    pub async fn fetch<R: Record>(&self, url: &str) -> Result<Vec<R>, FetchError> {
        let result = self.round_trip::<R>(url).await;
        match &result {
            Ok(records) => debug!(count = records.len(), "collection decoded"),
            Err(err) => warn!(error = %err, "collection fetch failed"),
        }
        result
    }

    async fn round_trip<R: Record>(&self, url: &str) -> Result<Vec<R>, FetchError> {
        let request = build_fetch(url)?;
        debug!(url = %request.url, "sending GET");

        let response = self
            .http
            .get(request.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        check_status(response.status().as_u16())?;
        let body = response.bytes().await.map_err(FetchError::Transport)?;
        decode_collection(&body)
    }

    pub async fn fetch_posts(&self, client: &PlaceholderClient) -> Result<Vec<Post>, FetchError> {
        self.fetch(&client.collection_url::<Post>()).await
    }

    pub async fn fetch_users(&self, client: &PlaceholderClient) -> Result<Vec<User>, FetchError> {
        self.fetch(&client.collection_url::<User>()).await
    }

    /// Fetch `url` into `store` unless `scope` is cancelled first.
    ///
    /// The token is checked before the request, raced against it, and checked
    /// again right before the write.
    pub async fn load_into<R: Record>(
        &self,
        url: &str,
        store: &mut CollectionStore<R>,
        scope: &CancellationToken,
    ) -> LoadOutcome {
        if scope.is_cancelled() {
            debug!(collection = R::COLLECTION, "scope already cancelled, skipping fetch");
            return LoadOutcome::Cancelled;
        }
        store.mark_loading();

        let result = tokio::select! {
            biased;
            () = scope.cancelled() => {
                debug!(collection = R::COLLECTION, "scope cancelled, dropping in-flight request");
                return LoadOutcome::Cancelled;
            }
            result = self.fetch::<R>(url) => result,
        };

        if scope.is_cancelled() {
            return LoadOutcome::Cancelled;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                store.publish(records);
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                let err = Arc::new(err);
                store.fail(Arc::clone(&err));
                LoadOutcome::Failed(err)
            }
        }
    }
}
