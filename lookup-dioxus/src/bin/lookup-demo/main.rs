//! Entry point for the lookup-demo binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use lookup_dioxus::LookupConfig;

fn main() -> Result<()> {
    // Load lookup.toml, falling back to defaults if it is broken
    let config = LookupConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load lookup.toml: {err:#}");
        eprintln!("Using default configuration");
        LookupConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    let args = args::parse_args();
    let mobile = args.mobile || config.display.is_mobile;
    let mut config = config.with_mobile(mobile);
    if let Some(catalog) = args.catalog {
        config = config.with_catalog(catalog);
    }

    log::info!("Starting lookup-demo");
    lookup_dioxus::launch(config)
}
