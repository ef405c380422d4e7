//! Book Social Network API bindings
//!
//! One module per resource, one submodule per remote operation. Each operation
//! module holds the request parameter object and its
//! [`RestRequest`](booknet_common::rest::RestRequest) implementation.

pub mod book;
pub mod feedback;
pub mod models;

/// Optional pagination query shared by list operations.
///
/// Absent fields are left out of the query string entirely.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub page: std::option::Option<i32>,
    /// Page size
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size: std::option::Option<i32>,
}
