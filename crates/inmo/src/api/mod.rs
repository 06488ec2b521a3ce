//! REST plumbing shared by every resource service.

mod client;
mod error;
mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{
    ApiRequest, ApiResponse, FilePart, HttpTransport, Method, RequestBody, Transport,
};
