//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource must implement to be owned by a
//! [`ResourceActor`](crate::ResourceActor). It names the identifier and payload types, the
//! entity kind used in `NotFound` errors, and the lifecycle hooks the actor calls while it
//! creates, replaces, and removes entries.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::requested_id`]: defaults to "always generate".
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default hooks do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other clients. The `Context` type is
/// injected into every hook when the actor is started (`run(context)`), not when it is
/// constructed, so dependencies can be wired after all actors exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., `String`, `Uuid`, `u64`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create an instance.
    type Create: Send + Sync + Debug;

    /// The data an update carries. Whether it replaces or merges is up to `on_update`.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Entity kind reported in `NotFound` errors and log fields (e.g. `"DotnetRest"`).
    const KIND: &'static str;

    /// Identifier supplied by the caller, if any.
    ///
    /// When this returns `Some`, the actor stores the entity under that key and
    /// overwrites any existing entry. When it returns `None`, the actor's id
    /// generator assigns a fresh one.
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full entity from its identifier and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update. The actor calls this on a copy and only stores the copy
    /// when the hook succeeds, so a failed update leaves the stored value untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
