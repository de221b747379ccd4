use clap::Parser;
use joybor::application::session::AuthBridge;
use joybor::config::Config;
use joybor::infrastructure::auth::{AuthClient, client::LANDLORD_ROLE};
use joybor::interfaces::ui::LandlordApp;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

/// Landlord dashboard for the Joy Bor student housing marketplace.
#[derive(Parser, Debug)]
#[command(name = "joybor", version, about)]
struct Args {
    /// Override the auth API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Default interface language ("uz" or "ru")
    #[arg(long)]
    language: Option<String>,

    /// Disable the built-in demo credentials fallback
    #[arg(long)]
    no_demo: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();
    let config =
        Config::from_env()?.with_overrides(args.base_url, args.language, args.no_demo);

    info!("Starting Joy Bor landlord dashboard...");

    let auth_client = AuthClient::new(
        &config.auth_base_url,
        Some(LANDLORD_ROLE.to_string()),
        config.demo_login,
        config.http_timeout_secs,
    )?;
    let auth = AuthBridge::spawn(Arc::new(auth_client));

    let app = LandlordApp::new(config, auth);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
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
