use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use widgetry::config::AppConfig;
use widgetry::{build_registry, layout, render_tree, RenderMode};
use widgetry_core::collect_ids;

/// widgetry - inspect the widget registry and run render passes over layouts
#[derive(Parser, Debug)]
#[command(name = "widgetry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL")]
    debug: Option<u8>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered widget kinds in registration order
    Types,
    /// Print validations and property maps for every kind as JSON
    ConfigMap,
    /// Print the annotated property pane config of a kind as JSON
    Pane {
        /// Widget kind, e.g. CHART_WIDGET
        kind: String,
    },
    /// Instantiate every node of a layout file and print the outcome
    Render {
        /// Layout file holding a widget tree
        #[arg(value_name = "LAYOUT_FILE")]
        layout_file: PathBuf,

        /// Render mode (CANVAS, CANVAS_SELECTED, COMPONENT_PANE, PAGE)
        #[arg(short = 'm', long = "mode", value_name = "MODE")]
        mode: Option<RenderMode>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load configuration before the logger so its log level can apply
    let (config, config_error) = match load_config(&cli) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug.or(config.log_level).unwrap_or(0) {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {:#}", e);
    }
    info!("Starting widgetry v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    match cli.config {
        Some(ref path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    let registry = build_registry(config);

    match command {
        Command::Types => {
            for kind in registry.widget_types() {
                println!("{}", kind);
            }
        }
        Command::ConfigMap => {
            let map = registry.widget_type_config_map();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        Command::Pane { kind } => {
            let kind = registry
                .widget_type(&kind)
                .ok_or_else(|| anyhow!("Unknown widget kind: {}", kind))?;
            let pane = registry.pane_config(kind);
            info!("{} has {} annotated pane nodes", kind, collect_ids(pane).len());
            println!("{}", serde_json::to_string_pretty(pane)?);
        }
        Command::Render { layout_file, mode } => {
            let skeleton = layout::load_skeleton(&layout_file)?;
            let mode = mode.unwrap_or(config.default_render_mode);
            let rendered = render_tree(&registry, &skeleton, mode);
            let (ok, total) = rendered.counts();
            println!("{}", serde_json::to_string_pretty(&rendered)?);
            if ok < total {
                warn!("{} of {} widgets could not be rendered", total - ok, total);
            }
        }
    }
    Ok(())
}
