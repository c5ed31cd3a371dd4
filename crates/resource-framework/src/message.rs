//! # Resource Requests
//!
//! Messages a [`ResourceClient`](crate::ResourceClient) sends to its
//! [`ResourceActor`](crate::ResourceActor). Each carries a `oneshot` sender the actor answers on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::page::{Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The operations every resource actor serves.
///
/// - **Create**: inserts a new entity, or overwrites the one under [`ActorEntity::requested_id`].
/// - **Get**: returns a copy of the stored entity, or `NotFound`.
/// - **List**: returns one page of the store in insertion order.
/// - **Update**: replaces a stored entity through [`ActorEntity::on_update`].
/// - **Delete**: removes an entity and answers `true`.
///
/// Payload types come from the entity's associated types, so a request built for one
/// resource cannot be sent to another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
