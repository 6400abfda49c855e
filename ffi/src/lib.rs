//! C-ABI wrapper around `placeholder-core`.
//!
//! # Overview
//! Lets a native UI host (Swift, Kotlin, C) drive collection fetches with its
//! own HTTP stack: ask for a request, execute it, hand the status and body
//! back for parsing into C structs.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `build_*` / `parse_*` mirror the core client 1:1.
//! - A single `FfiResult` envelope with `FfiDataTag` + `void* data`
//!   conveys decoded lists and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `placeholder_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use placeholder_core::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a client bound to `base_url`.
///
/// Returns null if `base_url` is null, not UTF-8, or not an absolute
/// http(s) URL; call `placeholder_validate_base_url` for the reason.
/// The caller must free the returned pointer with `placeholder_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_client_new(base_url: *const c_char) -> *mut FfiPlaceholderClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        let client = placeholder_core::PlaceholderClient::new(url);
        if client.build_list_posts().is_err() {
            return std::ptr::null_mut();
        }
        Box::into_raw(Box::new(FfiPlaceholderClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Check `base_url` the way `placeholder_client_new` does.
///
/// Returns null if the URL is usable, otherwise a C string naming the URL and
/// why it was rejected. Free a non-null return with `placeholder_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_validate_base_url(base_url: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        if base_url.is_null() {
            return to_c_string("null argument: base_url".to_string());
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_string_lossy();
        match placeholder_core::PlaceholderClient::new(&url).build_list_posts() {
            Ok(_) => std::ptr::null_mut(),
            Err(e) => to_c_string(e.to_string()),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `placeholder_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_client_free(client: *mut FfiPlaceholderClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the GET request for `/posts`.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `placeholder_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_build_list_posts(
    client: *const FfiPlaceholderClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_list_posts() {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the GET request for `/users`.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_build_list_users(
    client: *const FfiPlaceholderClient,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_list_users() {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Copy a host response into a core `HttpResponse`. A null body reads as empty.
///
/// Bytes are passed through untouched; invalid UTF-8 is left for the JSON
/// decoder to reject.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        Vec::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }.to_bytes().to_vec()
    };
    HttpResponse {
        status: resp.status,
        body,
    }
}

/// Parse the response to a `/posts` request.
///
/// Returns a result with `data_tag = PostList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_parse_posts(
    client: *const FfiPlaceholderClient,
    response: *const FfiHttpResponse,
) -> *mut FfiResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiResult::null_arg("client");
        }
        if response.is_null() {
            return FfiResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_list_posts(ffi_response_to_core(resp)) {
            Ok(posts) => FfiResult::ok_posts(posts),
            Err(e) => FfiResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiResult::panic("panic in placeholder_parse_posts"))
}

/// Parse the response to a `/users` request.
///
/// Returns a result with `data_tag = UserList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_parse_users(
    client: *const FfiPlaceholderClient,
    response: *const FfiHttpResponse,
) -> *mut FfiResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiResult::null_arg("client");
        }
        if response.is_null() {
            return FfiResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_list_users(ffi_response_to_core(resp)) {
            Ok(users) => FfiResult::ok_users(users),
            Err(e) => FfiResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiResult::panic("panic in placeholder_parse_users"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a request returned by any `placeholder_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        unsafe { free_c_string(req.url) };
    });
}

/// Free a result returned by any `placeholder_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_free_result(result: *mut FfiResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        unsafe { free_c_string(result.error_message) };
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::PostList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiPostList) };
                for post in unsafe { from_raw_slice(list.items, list.len) }.iter() {
                    unsafe { post.free_fields() };
                }
            }
            FfiDataTag::UserList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiUserList) };
                for user in unsafe { from_raw_slice(list.items, list.len) }.iter() {
                    unsafe { user.free_fields() };
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn placeholder_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| unsafe { free_c_string(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
