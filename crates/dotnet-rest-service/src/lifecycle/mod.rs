//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the service's actors, and installing the log subscriber.
//!
//! ## The DotnetRestSystem Pattern
//!
//! [`DotnetRestSystem`] is the only place the store actor is created. It spawns the actor,
//! keeps its task handle, and hands out cloneable clients:
//!
//! ```rust,ignore
//! let system = DotnetRestSystem::new(&config.store);
//! let state = AppState::new(Arc::new(system.client.clone()), auth);
//! // ... serve ...
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the actor's channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - the actor logs its final store size and its task ends
//!
//! Clients cloned into other places (the HTTP state, a test) keep the actor alive until
//! they are dropped too, so shut the server down first.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber. `RUST_LOG` wins over `logging.level`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Request payloads and every store operation
//! ```

pub mod dotnet_rest_system;
pub mod tracing;

pub use dotnet_rest_system::*;
pub use self::tracing::*;
