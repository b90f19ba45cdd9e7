#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use ecommerce_input_core::{Catalog, Translator};
use ecommerce_input_ui::InputVariant;

use crate::context::{DemoConfig, DEFAULT_TITLE};

/// Global demo configuration, set from command line
static DEMO_CONFIG: OnceLock<DemoConfig> = OnceLock::new();

/// Get the demo configuration (set from command line or default)
pub fn get_demo_config() -> DemoConfig {
    DEMO_CONFIG.get().cloned().unwrap_or_default()
}

/// Visual variant of the demo fields
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Variant {
    /// Dark filled fields
    #[default]
    Default,
    /// Light rounded fields
    Rounded,
}

impl From<Variant> for InputVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Default => InputVariant::Default,
            Variant::Rounded => InputVariant::Rounded,
        }
    }
}

/// Ecommerce Input - accessible input components demo
#[derive(Parser, Debug)]
#[command(name = "ecommerce-input-demo")]
#[command(about = "Ecommerce Input - labelled, password and date inputs")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Visual variant of the demo fields
    #[arg(long, value_enum, default_value_t = Variant::Default)]
    variant: Variant,

    /// JSON file mapping UI strings to translations, e.g. {"Show": "Mostrar"}
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Window and page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Read a translation catalog from a JSON file
fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read translations from {}", path.display()))?;
    let catalog = Catalog::from_json_str(&json)
        .with_context(|| format!("Invalid translations in {}", path.display()))?;
    Ok(catalog)
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let translator = match args.translations.as_deref() {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} translations from {:?}", catalog.len(), path);
                Translator::new(catalog)
            }
            Err(e) => {
                tracing::warn!("{:#}; falling back to untranslated strings", e);
                Translator::identity()
            }
        },
        None => Translator::identity(),
    };

    let config = DemoConfig {
        title: args.title.clone(),
        variant: args.variant.into(),
        translator,
    };
    let _ = DEMO_CONFIG.set(config);

    tracing::info!("Starting '{}' with {:?} variant", args.title, args.variant);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
