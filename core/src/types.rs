//! Record shapes for the placeholder API.
//!
//! # Design
//! These types mirror the mock-server's fixtures but are defined independently;
//! integration tests catch any schema drift between the two crates.
//!
//! Every field is required: an object missing any declared key fails the
//! whole collection. Unknown extra keys are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record shape that can be fetched as a collection.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection endpoint, e.g. `posts`.
    const COLLECTION: &'static str;

    /// Identifier, unique within one fetched collection.
    fn id(&self) -> i64;
}

/// A single post returned by `/posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Record for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> i64 {
        self.id
    }
}

/// A single user returned by `/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    /// Single-line form used by detail views: `street, suite, city, zipcode`.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}, {}", self.street, self.suite, self.city, self.zipcode)
    }
}

/// Coordinates are kept as the strings the API sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reads_camel_case_user_id() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"userId":7,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(post.user_id, 7);
        assert_eq!(post.id(), 1);
    }

    #[test]
    fn post_rejects_missing_title() {
        let result: Result<Post, _> = serde_json::from_str(r#"{"id":1,"userId":1,"body":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn post_ignores_unknown_keys() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"userId":1,"title":"t","body":"b","extra":true}"#)
                .unwrap();
        assert_eq!(post.title, "t");
    }

    #[test]
    fn user_rejects_missing_nested_geo() {
        let raw = r#"{
            "id": 1, "name": "n", "username": "u", "email": "e",
            "address": {"street": "s", "suite": "x", "city": "c", "zipcode": "z"},
            "phone": "p", "website": "w",
            "company": {"name": "c", "catchPhrase": "cp", "bs": "bs"}
        }"#;
        let result: Result<User, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn company_serializes_catch_phrase_in_camel_case() {
        let company = Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        };
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["catchPhrase"], "Multi-layered client-server neural-net");
        assert!(json.get("catch_phrase").is_none());
    }

    #[test]
    fn address_one_line_joins_fields() {
        let address = Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        };
        assert_eq!(address.one_line(), "Kulas Light, Apt. 556, Gwenborough, 92998-3874");
    }
}
