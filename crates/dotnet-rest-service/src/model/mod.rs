//! Data structures: the stored [`DotnetRest`] entity and the camelCase wire DTOs.

pub mod dotnet_rest;
pub mod dto;

pub use dotnet_rest::*;
pub use dto::*;
