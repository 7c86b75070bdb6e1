/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod client;
pub mod error;
pub mod nodes;

pub use error::{ApiErrorBody, ResellerError, Result};

pub use client::{ClientConfig, Credentials, ResellerClient, MAX_PAGE_SIZE};
