use crate::clients::DotnetRestClient;
use crate::config::StoreConfig;
use tracing::{error, info};

/// Owns the running store actor.
///
/// # Example
///
/// ```rust
/// use dotnet_rest_service::config::StoreConfig;
/// use dotnet_rest_service::lifecycle::DotnetRestSystem;
/// use dotnet_rest_service::model::DotnetRestDto;
/// use dotnet_rest_service::service::DotnetRestService;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = DotnetRestSystem::new(&StoreConfig::default());
///     system
///         .client
///         .create_dotnet_rest(DotnetRestDto::new("alpha"))
///         .await
///         .map_err(|e| e.to_string())?;
///     system.shutdown().await
/// }
/// ```
pub struct DotnetRestSystem {
    /// Client for the store actor. Clone it to share.
    pub client: DotnetRestClient,

    handle: tokio::task::JoinHandle<()>,
}

impl DotnetRestSystem {
    /// Spawns the store actor. Must be called inside a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (actor, client) = crate::dotnet_rest_actor::new(config.buffer_size);
        let handle = tokio::spawn(actor.run(()));
        info!(buffer_size = config.buffer_size, "Store actor spawned");

        Self { client, handle }
    }

    /// Drops this system's client and waits for the actor to finish.
    ///
    /// Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the last sender ends the actor's receive loop.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
