//! # DotnetRest Service
//!
//! Command-line entry point.
//!
//! ```text
//! dotnet-rest-service [--config PATH] [--ephemeral] [serve]
//! dotnet-rest-service [--config PATH] token --subject NAME --role admin [--role read]
//! ```
//!
//! `--ephemeral` binds a free port and, when no `jwt.secret` is configured, signs with a
//! random secret that lives only as long as the process.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotnet_rest_service::auth::{JwtAuth, Role};
use dotnet_rest_service::config::Config;
use dotnet_rest_service::http::{router, AppState, Server};
use dotnet_rest_service::lifecycle::{setup_tracing, DotnetRestSystem};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "dotnet-rest-service", version, about = "In-memory DotnetRest CRUD service")]
struct Cli {
    /// TOML configuration file (defaults to ./config.toml when present)
    #[arg(long, short, global = true, env = "DOTNET_REST_CONFIG")]
    config: Option<PathBuf>,

    /// Bind an ephemeral port and generate a signing secret if none is configured
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a signed bearer token
    Token {
        #[arg(long)]
        subject: String,
        /// Role to grant (admin, write, read); repeatable
        #[arg(long = "role", required = true)]
        roles: Vec<Role>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<(Config, bool)> {
    let mut config = Config::extract(cli.config.as_deref())?;
    let mut generated_secret = false;

    if cli.ephemeral {
        config.service.port = 0;
        if config.jwt.secret.is_empty() {
            config.jwt.secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
            generated_secret = true;
        }
    }

    config.validate()?;
    Ok((config, generated_secret))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, generated_secret) = load_config(&cli).context("loading configuration")?;
    let auth = JwtAuth::new(&config.jwt);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Token { subject, roles } => {
            println!("{}", auth.issue_token(&subject, &roles)?);
            Ok(())
        }
        Command::Serve => serve(config, auth, generated_secret).await,
    }
}

async fn serve(config: Config, auth: JwtAuth, generated_secret: bool) -> anyhow::Result<()> {
    setup_tracing(&config.logging);
    info!(service = %config.service.name, "Starting");

    if generated_secret {
        warn!("Using a generated signing secret; tokens die with this process");
        println!("admin token: {}", auth.issue_token("ephemeral-admin", &[Role::Admin])?);
    }

    let system = DotnetRestSystem::new(&config.store);
    let state = AppState::new(Arc::new(system.client.clone()), auth);

    let server = Server::bind(&config.bind_addr(), router(state))
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    info!(addr = %server.local_addr()?, "Ready");

    server.serve().await.context("serving HTTP")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Stopped");
    Ok(())
}
