//! HTTP transport types for the host-does-IO path.
//!
//! # Design
//! A native host (a UI shell with its own HTTP stack) asks the core for an
//! `HttpRequest`, executes it, and hands back an `HttpResponse` for parsing.
//! Every collection fetch is a bare GET, so the request is just a URL.

use reqwest::Url;

/// A GET request described as plain data. Built by `build_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `parse_collection` for status checking and decoding. The body is kept
/// as raw bytes so invalid UTF-8 reaches the JSON decoder unaltered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
