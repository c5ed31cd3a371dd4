//! # Resource Framework
//!
//! Building blocks for in-memory resource services: an entity trait, an actor that owns an
//! insertion-ordered store, page arithmetic, and a cloneable async client. A resource is
//! written once as an [`ActorEntity`]; the framework supplies create, get, list, update and
//! delete with consistent `NotFound` handling.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource's fields, id type and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - owns the [`OrderedStore`] and serves requests one at a time
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async calls
//!
//! Because the actor is the only owner of its store, no caller ever takes a lock, and a
//! [`Page`] is always an exact snapshot of the store at one point in time.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_framework::{ActorEntity, PageRequest, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u32,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct BookCreate { title: String }
//! #[derive(Debug)] struct BookUpdate { title: String }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct BookError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u32;
//!     type Create = BookCreate;
//!     type Update = BookUpdate;
//!     type Context = ();
//!     type Error = BookError;
//!     const KIND: &'static str = "Book";
//!
//!     fn from_create_params(id: u32, params: BookCreate) -> Result<Self, BookError> {
//!         Ok(Self { id, title: params.title })
//!     }
//!
//!     async fn on_update(&mut self, update: BookUpdate, _: &()) -> Result<(), BookError> {
//!         self.title = update.title;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut counter = 0;
//!     let (actor, client) = ResourceActor::<Book>::new(32, move || {
//!         counter += 1;
//!         counter
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     for title in ["Dune", "Emma", "Ulysses"] {
//!         client.create(BookCreate { title: title.into() }).await.unwrap();
//!     }
//!
//!     let page = client.list(PageRequest::new(1, 2)).await.unwrap();
//!     assert_eq!(page.items.len(), 2);
//!     assert_eq!(page.total_pages, 2);
//!     assert!(page.has_next);
//!
//!     let missing = client.get(99).await.unwrap_err();
//!     assert_eq!(missing.to_string(), "Book not found: 99");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] for scripting answers without an actor,
//! and channel-level helpers for asserting on the exact requests a client sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use page::{paginate, Page, PageBounds, PageRequest};
pub use store::OrderedStore;
