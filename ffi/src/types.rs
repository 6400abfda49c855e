//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, boxed slices handed out as
//! pointer + length, and tagged enums with explicit discriminants. Nested
//! user records are embedded by value so a host reads them without extra
//! indirection. Conversion and release helpers live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use placeholder_core::{Address, Company, FetchError, Geo, HttpRequest, Post, User};

/// Opaque handle to a `PlaceholderClient`.
pub struct FfiPlaceholderClient {
    pub(crate) inner: placeholder_core::PlaceholderClient,
}

/// Move `s` into a C string owned by the caller. Interior NULs are dropped.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let c = CString::new(s).unwrap_or_else(|err| {
        let mut bytes = err.into_vec();
        bytes.retain(|b| *b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    c.into_raw()
}

/// Release a string produced by `to_c_string`. Null is ignored.
///
/// # Safety
/// `s` must be null or come from `to_c_string` and not have been freed.
pub(crate) unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Hand a vector to C as pointer + length. Empty vectors become null.
fn into_raw_slice<T>(items: Vec<T>) -> (*mut T, usize) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let boxed = items.into_boxed_slice();
    let len = boxed.len();
    (Box::into_raw(boxed) as *mut T, len)
}

/// Reclaim a slice produced by `into_raw_slice`.
///
/// # Safety
/// `items`/`len` must come from `into_raw_slice` and not have been freed.
pub(crate) unsafe fn from_raw_slice<T>(items: *mut T, len: usize) -> Box<[T]> {
    if items.is_null() || len == 0 {
        return Box::default();
    }
    Box::from_raw(std::ptr::slice_from_raw_parts_mut(items, len))
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// A GET request for the host to execute.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        Box::into_raw(Box::new(FfiHttpRequest {
            url: to_c_string(req.url.into()),
        }))
    }
}

/// An HTTP response built by the host on its own stack.
///
/// The FFI layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct FfiPost {
    pub id: i64,
    pub user_id: i64,
    pub title: *mut c_char,
    pub body: *mut c_char,
}

impl From<Post> for FfiPost {
    fn from(p: Post) -> Self {
        FfiPost {
            id: p.id,
            user_id: p.user_id,
            title: to_c_string(p.title),
            body: to_c_string(p.body),
        }
    }
}

impl FfiPost {
    /// # Safety
    /// Fields must have been produced by `From<Post>` and not freed.
    pub(crate) unsafe fn free_fields(&self) {
        free_c_string(self.title);
        free_c_string(self.body);
    }
}

#[repr(C)]
pub struct FfiGeo {
    pub lat: *mut c_char,
    pub lng: *mut c_char,
}

impl From<Geo> for FfiGeo {
    fn from(g: Geo) -> Self {
        FfiGeo {
            lat: to_c_string(g.lat),
            lng: to_c_string(g.lng),
        }
    }
}

#[repr(C)]
pub struct FfiAddress {
    pub street: *mut c_char,
    pub suite: *mut c_char,
    pub city: *mut c_char,
    pub zipcode: *mut c_char,
    pub geo: FfiGeo,
}

impl From<Address> for FfiAddress {
    fn from(a: Address) -> Self {
        FfiAddress {
            street: to_c_string(a.street),
            suite: to_c_string(a.suite),
            city: to_c_string(a.city),
            zipcode: to_c_string(a.zipcode),
            geo: a.geo.into(),
        }
    }
}

#[repr(C)]
pub struct FfiCompany {
    pub name: *mut c_char,
    pub catch_phrase: *mut c_char,
    pub bs: *mut c_char,
}

impl From<Company> for FfiCompany {
    fn from(c: Company) -> Self {
        FfiCompany {
            name: to_c_string(c.name),
            catch_phrase: to_c_string(c.catch_phrase),
            bs: to_c_string(c.bs),
        }
    }
}

#[repr(C)]
pub struct FfiUser {
    pub id: i64,
    pub name: *mut c_char,
    pub username: *mut c_char,
    pub email: *mut c_char,
    pub address: FfiAddress,
    pub phone: *mut c_char,
    pub website: *mut c_char,
    pub company: FfiCompany,
}

impl From<User> for FfiUser {
    fn from(u: User) -> Self {
        FfiUser {
            id: u.id,
            name: to_c_string(u.name),
            username: to_c_string(u.username),
            email: to_c_string(u.email),
            address: u.address.into(),
            phone: to_c_string(u.phone),
            website: to_c_string(u.website),
            company: u.company.into(),
        }
    }
}

impl FfiUser {
    /// # Safety
    /// Fields must have been produced by `From<User>` and not freed.
    pub(crate) unsafe fn free_fields(&self) {
        for s in [
            self.name,
            self.username,
            self.email,
            self.address.street,
            self.address.suite,
            self.address.city,
            self.address.zipcode,
            self.address.geo.lat,
            self.address.geo.lng,
            self.phone,
            self.website,
            self.company.name,
            self.company.catch_phrase,
            self.company.bs,
        ] {
            free_c_string(s);
        }
    }
}

#[repr(C)]
pub struct FfiPostList {
    pub items: *mut FfiPost,
    pub len: usize,
}

#[repr(C)]
pub struct FfiUserList {
    pub items: *mut FfiUser,
    pub len: usize,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiResult`.
///
/// The parse functions only ever produce `Ok`, `Http`, `Decode`, `NullArg`
/// and `Panic`. `InvalidUrl` and `Transport` mirror the remaining
/// `FetchError` variants so a host can report its own build and network
/// failures with the same numbering. Values are part of the C ABI and never
/// change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidUrl = 1,
    Transport = 2,
    Http = 3,
    Decode = 4,
    NullArg = 5,
    Panic = 6,
}

/// Tag that tells `placeholder_free_result` what `FfiResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    PostList = 1,
    UserList = 2,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the decoded list (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, `http_status` is set for `Http` errors, and
/// `data` is null.
#[repr(C)]
pub struct FfiResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiResult {
    fn ok(data_tag: FfiDataTag, data: *mut c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    pub(crate) fn ok_posts(posts: Vec<Post>) -> *mut Self {
        let (items, len) = into_raw_slice(posts.into_iter().map(FfiPost::from).collect());
        let list = Box::new(FfiPostList { items, len });
        Self::ok(FfiDataTag::PostList, Box::into_raw(list) as *mut c_void)
    }

    pub(crate) fn ok_users(users: Vec<User>) -> *mut Self {
        let (items, len) = into_raw_slice(users.into_iter().map(FfiUser::from).collect());
        let list = Box::new(FfiUserList { items, len });
        Self::ok(FfiDataTag::UserList, Box::into_raw(list) as *mut c_void)
    }

    pub(crate) fn from_error(err: FetchError) -> *mut Self {
        let msg = err.to_string();
        match err {
            FetchError::InvalidUrl { .. } => Self::err(FfiErrorCode::InvalidUrl, 0, msg),
            FetchError::Transport(_) => Self::err(FfiErrorCode::Transport, 0, msg),
            FetchError::Http { status } => Self::err(FfiErrorCode::Http, status, msg),
            FetchError::Decode(_) => Self::err(FfiErrorCode::Decode, 0, msg),
        }
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }
}
