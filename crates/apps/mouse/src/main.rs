//! Mouse Engine
//!
//! Opens an 800x600 window with an egui overlay. Run without arguments for
//! the defaults, or pass `--config <PATH>` for a TOML settings file.

use clap::Parser;
use mouse_engine::{load_or_default, MouseApp};
use system::{run_app, CommonArgs};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mouse-engine", version, about = "Drag rectangles, watch your input")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = load_or_default(args.common.config_path().map(|p| p.as_path()))?;
    if let Some(path) = args.common.config_path() {
        info!("Loaded settings from {}", path.display());
    }

    let app_config = args.common.apply_to(config.app_config());
    let app = MouseApp::new(&config);

    if let Err(e) = run_app(app, app_config) {
        if e.is_window_failure() {
            error!("Window startup failed");
        } else {
            error!("Graphics startup failed");
        }
        return Err(e.into());
    }
    Ok(())
}
