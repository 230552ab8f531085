mod cli;
mod script;

use std::path::PathBuf;

use midway_config::MidwayConfig;
use midway_windows::{stock, WindowManager};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    // Config is read before logging so its filter can apply; failures are
    // reported once the subscriber is up.
    let (mut config, config_path, load_error) = load_config(args.config.clone());

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "midway=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Midway v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = config_path {
        tracing::info!("Using config at {}", path.display());
    }

    if args.print_config {
        println!("{}", midway_config::config_to_json(&config));
        return;
    }

    if let Some(width) = args.width {
        config.display.width = width;
    }
    if let Some(height) = args.height {
        config.display.height = height;
    }

    let mut manager = WindowManager::from_config(&config);
    stock::open_reserved(&mut manager);
    tracing::info!(
        "Window manager ready ({} windows, limit {})",
        manager.live_count(),
        manager.window_limit()
    );

    if let Some(ref path) = args.script {
        let result = script::load_script(path).and_then(|steps| {
            script::Replay::new(&mut manager, &mut config, config_path.clone()).run(steps)
        });
        if let Err(e) = result {
            tracing::error!("Script failed: {e}");
            std::process::exit(1);
        }
    }

    manager.compact();
    match serde_json::to_string_pretty(&manager.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize window stack: {e}"),
    }
    tracing::info!("Shutdown complete");
}

/// Returns the config, the file it came from, and the load error if the
/// defaults had to be used.
fn load_config(
    explicit: Option<PathBuf>,
) -> (MidwayConfig, Option<PathBuf>, Option<midway_common::ConfigError>) {
    let loaded = match explicit {
        Some(path) => midway_config::load_config_from(&path).map(|config| (config, Some(path))),
        None => midway_config::load_config().map(|config| {
            let path = midway_config::toml_loader::default_config_path().ok();
            (config, path)
        }),
    };
    match loaded {
        Ok((config, path)) => (config, path, None),
        Err(e) => (MidwayConfig::default(), None, Some(e)),
    }
}
