//! # DotnetRest Service
//!
//! An in-memory CRUD resource served over HTTP with role-based access control.
//!
//! - **[dotnet_rest_actor]**: the resource actor that owns the store, built on
//!   [`resource_framework`]
//! - **[model]**: the stored entity and the camelCase wire DTOs
//! - **[service]**: the [`DotnetRestService`](service::DotnetRestService) API
//! - **[clients]**: in-process and HTTP implementations of that API
//! - **[validation]**, **[auth]**: request checks and JWT roles
//! - **[http]**: axum router, handlers and server
//! - **[config]**, **[lifecycle]**: configuration loading, startup/shutdown, logging

pub mod auth;
pub mod clients;
pub mod config;
pub mod dotnet_rest_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod validation;
