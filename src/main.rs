#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use nxtwatch_core::{default_data_dir, ClientConfig, CredentialStore, VideoApi, DEFAULT_API_BASE};

use crate::context::ThemeMode;

/// Startup settings resolved from the command line.
pub struct AppConfig {
    pub api: VideoApi,
    pub initial_theme: ThemeMode,
}

/// Global app settings, set once in `main` before launch
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the startup settings.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| AppConfig {
        api: VideoApi::new(ClientConfig::default()).unwrap_or_else(|e| {
            tracing::error!("Failed to build default client: {}", e);
            std::process::exit(1)
        }),
        initial_theme: ThemeMode::Light,
    })
}

/// NxtWatch - video search desktop client
#[derive(Parser, Debug)]
#[command(name = "nxtwatch-desktop")]
#[command(about = "NxtWatch - search and browse videos")]
struct Args {
    /// Data directory holding the stored credential
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the video API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Bearer token; stored in the data directory for later runs
    #[arg(short, long)]
    token: Option<String>,

    /// Start in dark theme
    #[arg(long)]
    dark: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let credentials = CredentialStore::new(&data_dir);

    // A token on the command line replaces the stored one
    let token = match args.token {
        Some(token) => {
            if let Err(e) = credentials.save(&token) {
                tracing::warn!("Failed to store credential: {}", e);
            }
            Some(token)
        }
        None => credentials.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to read credential: {}", e);
            None
        }),
    };

    let client_config = match ClientConfig::new(&args.api_base) {
        Ok(config) => config
            .with_token(token)
            .with_timeout(Duration::from_secs(args.timeout_secs)),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    let api = match VideoApi::new(client_config) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting NxtWatch against {} with data dir: {:?}",
        api.config().base_url,
        data_dir
    );

    let initial_theme = if args.dark { ThemeMode::Dark } else { ThemeMode::Light };
    let _ = APP_CONFIG.set(AppConfig { api, initial_theme });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NxtWatch")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
