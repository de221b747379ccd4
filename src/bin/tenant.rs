use clap::Parser;
use joybor::application::session::AuthBridge;
use joybor::config::Config;
use joybor::infrastructure::auth::AuthClient;
use joybor::interfaces::tenant::TenantApp;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

/// Student-facing housing browser for Joy Bor.
#[derive(Parser, Debug)]
#[command(name = "tenant", version, about)]
struct Args {
    /// Override the auth API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Default interface language ("uz" or "ru")
    #[arg(long)]
    language: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?.with_overrides(args.base_url, args.language, false);

    info!("Starting Joy Bor tenant app...");

    // Tenants can hold any role, so no role gate here
    let auth_client = AuthClient::new(
        &config.auth_base_url,
        None,
        config.demo_login,
        config.http_timeout_secs,
    )?;
    let auth = AuthBridge::spawn(Arc::new(auth_client));

    let app = TenantApp::new(config, auth);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_title("Joy Bor"),
        ..Default::default()
    };

    eframe::run_native(
        "Joy Bor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
