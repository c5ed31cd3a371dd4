use crate::{ActorEntity, FrameworkError, Page, PageRequest, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read and delete operations.
///
/// A wrapper only supplies its inner [`ResourceClient`] and an error mapping; `get`, `list`
/// and `delete` come for free. Create and update usually need payload translation and stay on
/// the wrapper.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use resource_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// impl From<String> for TagError {
///     fn from(s: String) -> Self { TagError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Context = ();
///     type Error = TagError;
///     const KIND: &'static str = "Tag";
///
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> TagError {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch one page of entities.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn list(&self, page: PageRequest) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(page).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
