//! # HTTP Transport
//!
//! axum routes over a [`DotnetRestService`]:
//!
//! | Method | Path | Roles |
//! |--------|------|-------|
//! | `POST` | `/api/DotnetRestService` | admin, write |
//! | `GET` | `/api/DotnetRestService?startPage=&pageSize=` | admin, write, read |
//! | `GET` | `/api/DotnetRestService/{id}` | admin, write, read |
//! | `PUT` | `/api/DotnetRestService/{id}` | admin, write |
//! | `DELETE` | `/api/DotnetRestService/{id}` | admin |
//! | `GET` | `/health` | public |

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{shutdown_signal, Server};

use crate::auth::JwtAuth;
use crate::service::DotnetRestService;
use crate::validation::ValidationService;
use axum::{middleware, routing::get, routing::post, Router};
use handlers::RESOURCE_PATH;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn DotnetRestService>,
    pub auth: JwtAuth,
    pub validation: ValidationService,
}

impl AppState {
    pub fn new(service: Arc<dyn DotnetRestService>, auth: JwtAuth) -> Self {
        Self {
            service,
            auth,
            validation: ValidationService::new(),
        }
    }
}

/// Builds the application router. Every route except `/health` requires a bearer token.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            RESOURCE_PATH,
            post(handlers::create_dotnet_rest).get(handlers::get_dotnet_rests),
        )
        .route(
            &format!("{RESOURCE_PATH}/{{id}}"),
            get(handlers::get_dotnet_rest)
                .put(handlers::update_dotnet_rest)
                .delete(handlers::delete_dotnet_rest),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            JwtAuth::middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
