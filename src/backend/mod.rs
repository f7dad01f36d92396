//! Seller search backend: wire types and HTTP client

pub mod api;
pub mod types;

pub use api::{ClientError, SearchClient, SellerSearch};
pub use types::{SearchMode, SearchRequest, SearchResponse, SellerResult, DEFAULT_LIMIT};
