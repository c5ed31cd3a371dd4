//! # DotnetRest Actor
//!
//! The resource actor owning every `DotnetRest` entry.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`DotnetRest`]
//! - [`error`] - [`DotnetRestError`], shared by every layer of the service
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use dotnet_rest_service::dotnet_rest_actor;
//! use dotnet_rest_service::model::DotnetRestDto;
//! use dotnet_rest_service::service::DotnetRestService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dotnet_rest_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client.create_dotnet_rest(DotnetRestDto::new("alpha")).await?;
//!     assert!(created.dotnet_rest.id.is_some());
//!     Ok(())
//! }
//! ```
//!
//! Generated ids are random UUID v4 strings.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DotnetRestClient;
use crate::model::DotnetRest;
use resource_framework::ResourceActor;
use uuid::Uuid;

/// Creates a new DotnetRest actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DotnetRest>, DotnetRestClient) {
    let next_id = || Uuid::new_v4().to_string();

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_id);
    let client = DotnetRestClient::new(generic_client);

    (actor, client)
}
