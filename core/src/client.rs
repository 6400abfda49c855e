//! Stateless request builder and response parser for collection fetches.
//!
//! # Design
//! A fetch is split into `build_fetch`, which validates the URL and produces
//! an `HttpRequest`, and `parse_collection`, which consumes an `HttpResponse`.
//! Neither touches the network. `RemoteCollectionLoader` runs the round-trip
//! in between with reqwest; a native host can run it with its own stack.
//!
//! Status policy: exactly `[200, 300)` is success. The body of any other
//! response is never decoded.

use std::collections::HashSet;

use reqwest::Url;

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Post, Record, User};

/// Validate `url` and describe the GET that fetches it.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn build_fetch(url: &str) -> Result<HttpRequest, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::invalid_url(url, e))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::invalid_url(url, format!("unsupported scheme `{other}`")));
        }
    }
    if !parsed.has_host() {
        return Err(FetchError::invalid_url(url, "missing host"));
    }
    Ok(HttpRequest { url: parsed })
}

/// Map a status code outside `[200, 300)` to `FetchError::Http`.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Http { status })
    }
}

/// Decode a JSON array into records. All or nothing.
pub fn decode_collection<R: Record>(body: &[u8]) -> Result<Vec<R>, FetchError> {
    let records: Vec<R> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(duplicate) = records.iter().map(Record::id).find(|id| !seen.insert(*id)) {
        return Err(FetchError::Decode(format!(
            "duplicate id {duplicate} in {}",
            R::COLLECTION
        )));
    }
    Ok(records)
}

/// Check the status, then decode the body.
pub fn parse_collection<R: Record>(response: HttpResponse) -> Result<Vec<R>, FetchError> {
    check_status(response.status)?;
    decode_collection(&response.body)
}

/// Builds collection requests against one API base URL.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    base_url: String,
}

impl PlaceholderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of the collection endpoint for `R`.
    pub fn collection_url<R: Record>(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    pub fn build_list<R: Record>(&self) -> Result<HttpRequest, FetchError> {
        build_fetch(&self.collection_url::<R>())
    }

    pub fn build_list_posts(&self) -> Result<HttpRequest, FetchError> {
        self.build_list::<Post>()
    }

    pub fn build_list_users(&self) -> Result<HttpRequest, FetchError> {
        self.build_list::<User>()
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, FetchError> {
        parse_collection(response)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, FetchError> {
        parse_collection(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PlaceholderClient {
        PlaceholderClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts().unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:3000/posts");
    }

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users().unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:3000/users");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PlaceholderClient::new("http://localhost:3000/");
        assert_eq!(client.collection_url::<Post>(), "http://localhost:3000/posts");
    }

    #[test]
    fn malformed_base_url_fails_at_build() {
        let client = PlaceholderClient::new("not a url");
        let err = client.build_list_posts().unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn build_fetch_rejects_relative_url() {
        let err = build_fetch("/posts").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { ref url, .. } if url == "/posts"));
    }

    #[test]
    fn build_fetch_rejects_non_http_scheme() {
        let err = build_fetch("ftp://example.com/posts").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn build_fetch_accepts_https() {
        let req = build_fetch("https://jsonplaceholder.typicode.com/posts").unwrap();
        assert_eq!(req.url.host_str(), Some("jsonplaceholder.typicode.com"));
    }

    #[test]
    fn check_status_accepts_whole_2xx_range() {
        for status in [200, 201, 203, 204, 299] {
            assert!(check_status(status).is_ok(), "{status} should pass");
        }
    }

    #[test]
    fn check_status_rejects_outside_2xx() {
        for status in [100, 199, 300, 304, 404, 500] {
            let err = check_status(status).unwrap_err();
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn parse_list_posts_single_record() {
        let posts = client()
            .parse_list_posts(ok(r#"[{"id":1,"userId":1,"title":"t","body":"b"}]"#))
            .unwrap();
        assert_eq!(
            posts,
            vec![Post {
                id: 1,
                user_id: 1,
                title: "t".to_string(),
                body: "b".to_string(),
            }]
        );
    }

    #[test]
    fn parse_list_posts_empty_array() {
        let posts = client().parse_list_posts(ok("[]")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_list_posts_not_found_skips_decoding() {
        let response = HttpResponse {
            status: 404,
            body: br#"[{"id":1,"userId":1,"title":"t","body":"b"}]"#.to_vec(),
        };
        let err = client().parse_list_posts(response).unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 404 }));
    }

    #[test]
    fn parse_list_posts_server_error_with_garbage_body_is_http_error() {
        let response = HttpResponse {
            status: 500,
            body: b"internal error".to_vec(),
        };
        let err = client().parse_list_posts(response).unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500 }));
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(ok("not json")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn parse_list_posts_object_instead_of_array() {
        let err = client()
            .parse_list_posts(ok(r#"{"id":1,"userId":1,"title":"t","body":"b"}"#))
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn one_bad_record_fails_the_collection() {
        let body = r#"[
            {"id":1,"userId":1,"title":"t","body":"b"},
            {"id":2,"userId":1,"body":"no title"}
        ]"#;
        let err = client().parse_list_posts(ok(body)).unwrap_err();
        assert!(matches!(err, FetchError::Decode(ref msg) if msg.contains("title")));
    }

    #[test]
    fn duplicate_ids_fail_the_collection() {
        let body = r#"[
            {"id":3,"userId":1,"title":"a","body":"b"},
            {"id":3,"userId":2,"title":"c","body":"d"}
        ]"#;
        let err = client().parse_list_posts(ok(body)).unwrap_err();
        assert!(matches!(err, FetchError::Decode(ref msg) if msg == "duplicate id 3 in posts"));
    }

    #[test]
    fn wrong_field_type_fails() {
        let err = client()
            .parse_list_posts(ok(r#"[{"id":"1","userId":1,"title":"t","body":"b"}]"#))
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn invalid_utf8_body_is_decode_error() {
        let response = HttpResponse {
            status: 200,
            body: b"[{\"id\":1,\"userId\":1,\"title\":\"\xFF\",\"body\":\"b\"}]".to_vec(),
        };
        let err = client().parse_list_posts(response).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
