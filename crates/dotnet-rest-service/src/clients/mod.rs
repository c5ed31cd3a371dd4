//! Type-safe clients for the DotnetRest service.
//!
//! - [`DotnetRestClient`] talks to the resource actor in-process.
//! - [`DotnetRestHttpClient`] talks to a running server over HTTP.
//!
//! Both implement [`DotnetRestService`](crate::service::DotnetRestService).

pub mod dotnet_rest_client;
pub mod http_client;

pub use dotnet_rest_client::DotnetRestClient;
pub use http_client::DotnetRestHttpClient;
