//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a resource's store. It is
//! the "Server" side of the actor model: messages are processed one at a time, so the store
//! needs no `Mutex` or `RwLock` and every answer reflects a single consistent state.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::paginate;
use crate::store::OrderedStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Any number of cloned [`ResourceClient`]s can send requests at once. The actor drains its
/// channel sequentially and each request is a short in-memory step, so callers never block
/// on each other beyond channel back-pressure. A `List` is answered in one step as well, which
/// makes it an exact snapshot: concurrent creates and deletes are either fully visible or not
/// at all.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: Clone the client into whatever needs it (HTTP state, other actors' contexts).
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use resource_framework::{ActorEntity, PageRequest, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///     const KIND: &'static str = "Note";
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         self.text = update.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     let page = client.list(PageRequest::default()).await.unwrap();
///     assert_eq!(page.items[0].id, note.id);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: uses [`ActorEntity::requested_id`] when it yields an id, otherwise asks the id
///   generator for one that is not already stored. Builds the entity, runs `on_create`, then
///   upserts it. An existing entry keeps its position.
/// * **Get**: clones the stored entity or fails with `NotFound`.
/// * **List**: normalizes the request and paginates the store in insertion order.
/// * **Update**: runs `on_update` on a copy and stores the copy only if the hook succeeds.
/// * **Delete**: runs `on_delete`, removes the entry, answers `true`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: OrderedStore<T::Id, T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel. When it is full, client calls wait.
    /// * `next_id` - produces identifiers for creates that do not request one.
    pub fn new<F>(buffer_size: usize, next_id: F) -> (Self, ResourceClient<T>)
    where
        F: FnMut() -> T::Id + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: OrderedStore::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    fn fresh_id(&mut self) -> T::Id {
        loop {
            let id = (self.next_id)();
            if !self.store.contains_key(&id) {
                return id;
            }
            warn!(entity_type = T::KIND, %id, "Generated id already in use");
        }
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook. It is supplied here rather than in
    /// `new()` so it can hold clients of actors created later.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match T::requested_id(&params) {
                        Some(id) => id,
                        None => self.fresh_id(),
                    };

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    let replaced = self.store.upsert(id.clone(), item.clone());
                    if replaced {
                        info!(entity_type, %id, size = self.store.len(), "Replaced");
                    } else {
                        info!(entity_type, %id, size = self.store.len(), "Created");
                    }
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| FrameworkError::not_found(entity_type, &id));
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { page, respond_to } => {
                    let bounds = page.normalize();
                    let page = paginate(self.store.values().cloned(), self.store.len(), bounds);
                    debug!(
                        entity_type,
                        start_page = bounds.start_page,
                        page_size = bounds.page_size,
                        returned = page.items.len(),
                        total = page.total_elements,
                        "List"
                    );
                    let _ = respond_to.send(Ok(page));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut item) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::not_found(entity_type, &id)));
                        continue;
                    };
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.upsert(id.clone(), item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::not_found(entity_type, &id)));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(true));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
