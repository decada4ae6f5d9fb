//! Resolves a handful of icon references against a local data directory.
//!
//! Run with: `cargo run -q --example resolve -p hearth_core -- [endpoint]`

use async_trait::async_trait;
use hearth_core::registry::{CustomIcon, IconSet};
use hearth_core::{Config, IconResolver};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

struct DemoIcons;

#[async_trait]
impl IconSet for DemoIcons {
    async fn get_icon(&self, name: &str) -> Result<CustomIcon, String> {
        match name {
            "bulb" => Ok(CustomIcon {
                path: "M12,2A7,7 0 0,0 5,9C5,11.4 6.2,13.5 8,14.7V17A1,1 0 0,0 9,18H15A1,1 0 0,0 16,17V14.7C17.8,13.5 19,11.4 19,9A7,7 0 0,0 12,2Z".to_string(),
                secondary_path: None,
                view_box: None,
            }),
            _ => Err(format!("demo set has no icon named {name}")),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8123/static/icons".to_string());

    let data_dir = std::env::temp_dir().join("hearth-resolve-demo");
    println!("Using data path: {}", data_dir.display());

    let config = Config::new(data_dir, endpoint);
    let resolver = IconResolver::open(&config)
        .await
        .expect("Failed to open icon resolver");
    println!("Icon pack version: {}", resolver.manifest().version);
    resolver
        .icon_sets()
        .register("demo", Arc::new(DemoIcons))
        .await;

    for icon in [
        "mdi:home-assistant",
        "demo:bulb",
        "phu:bulb",
        "thermostat",
        "mdi:thermostat",
    ] {
        match resolver
            .load_icon_with(icon, |warning| println!("  warning: {warning}"))
            .await
        {
            Ok(resolved) => match resolved.path {
                Some(path) => println!("{icon} -> {path}"),
                None if resolved.legacy => println!("{icon} -> legacy reference"),
                None => println!("{icon} -> no icon data"),
            },
            Err(err) => println!("{icon} -> error: {err}"),
        }
    }
}
