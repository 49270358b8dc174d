//! MirrorDeck shell entry point.
//!
//! Wires together all infrastructure services and starts the Tokio async
//! runtime.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load ShellConfig      -- TOML from the platform config dir
//!  └─ InMemoryShellState    -- shared store seeded from config
//!  └─ start services
//!       ├─ StdinKeySource   -- dev input harness (dedicated thread)
//!       │    └─ KeyRouter pump
//!       ├─ FixedPanelSource -- panel size observation
//!       │    └─ ViewportSync pump
//!       └─ surface consumer -- drains the command channel
//! ```
//!
//! # Usage
//!
//! ```text
//! deck-shell [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Explicit config file path [default: platform dir]
//! ```
//!
//! With the shell running, type a DOM key code ("Enter", "ArrowLeft") and
//! press return to feed one key-down event through the routing pipeline.
//! Set `RUST_LOG=debug` to watch commands and sizes flow.

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use deck_shell::application::route_keys::{CommandSink, KeyRouter, ReleaseScheduler};
use deck_shell::application::store::ShellStateStore;
use deck_shell::application::sync_viewport::ViewportSync;
use deck_shell::infrastructure::key_events::{stdin::StdinKeySource, KeyEventSource};
use deck_shell::infrastructure::resize::{fixed::FixedPanelSource, ResizeSource};
use deck_shell::infrastructure::scheduler::TokioReleaseScheduler;
use deck_shell::infrastructure::state::{InMemoryShellState, ShellState};
use deck_shell::infrastructure::storage::config::{self, ShellConfig};
use deck_shell::infrastructure::surface::ChannelCommandSink;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// MirrorDeck shell.
///
/// Routes key events to the media-mirroring surface and keeps its rendered
/// size in step with the shell chrome.
#[derive(Debug, Parser)]
#[command(
    name = "deck-shell",
    about = "In-vehicle multimedia shell: key routing and viewport sync for the mirroring surface",
    version
)]
struct Cli {
    /// Explicit path to the config file (TOML).
    ///
    /// When absent, the platform config directory is used and a default
    /// file is written on first run.
    #[arg(long, env = "DECK_CONFIG")]
    config: Option<PathBuf>,
}

/// Loads the configuration, seeding the platform config file with defaults
/// on first run when no explicit path was given.
fn load_shell_config(cli: &Cli) -> anyhow::Result<ShellConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            let cfg = config::load_config().context("failed to load config")?;
            if let Ok(path) = config::config_file_path() {
                if !path.exists() {
                    config::save_config(&cfg).context("failed to write default config")?;
                    info!("wrote default config to {}", path.display());
                }
            }
            Ok(cfg)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("MirrorDeck shell starting");

    let cli = Cli::parse();
    let cfg = load_shell_config(&cli)?;

    // Duplicate bindings are a config mistake, surfaced at startup rather
    // than resolved arbitrarily at routing time.
    let bindings = cfg.binding_table().context("invalid [bindings] table")?;

    // ── Shared state ──────────────────────────────────────────────────────────
    let store = Arc::new(InMemoryShellState::new(ShellState {
        switch_key: cfg.switch_key(),
        top_bar_height: cfg.chrome.top_bar_height,
        ..ShellState::default()
    }));

    // ── Surface consumer ──────────────────────────────────────────────────────
    let (sink, mut command_rx) = ChannelCommandSink::new();
    let surface_task = tokio::spawn(async move {
        // Stand-in for the mirroring surface: the real renderer is an
        // external collaborator, so the shell just hands commands over.
        while let Some(command) = command_rx.recv().await {
            debug!(
                action = %command.action,
                sequence = command.sequence,
                "mirroring surface received command"
            );
        }
    });

    // ── Key routing pipeline ──────────────────────────────────────────────────
    let scheduler = Arc::new(TokioReleaseScheduler::new());
    let mut router = KeyRouter::new(
        Arc::clone(&store) as Arc<dyn ShellStateStore>,
        bindings,
        Arc::new(sink) as Arc<dyn CommandSink>,
        scheduler as Arc<dyn ReleaseScheduler>,
    );

    let key_source = StdinKeySource::new();
    let key_rx = key_source.start().context("failed to start key source")?;
    // Dedicated thread: recv() blocks, and the stdin reader may park on a
    // blocking read past shutdown – a plain thread exits with the process
    // instead of holding the runtime open.
    std::thread::Builder::new()
        .name("deck-key-pump".to_string())
        .spawn(move || {
            while let Ok(event) = key_rx.recv() {
                router.handle_key_down(&event.code);
            }
            // Channel closed: the source was stopped.  Cancel any scheduled
            // releases so nothing fires into the torn-down surface.
            router.shutdown();
        })
        .context("failed to spawn key pump")?;

    // ── Startup complete ──────────────────────────────────────────────────────
    //
    // All services are wired; flip the readiness flag before the first size
    // observation so the sizer publishes immediately.
    store.set_started_up(true);

    // ── Viewport pipeline ─────────────────────────────────────────────────────
    let resize_source = FixedPanelSource::new(cfg.panel.size());
    let resize_rx = resize_source
        .observe()
        .context("failed to observe panel size")?;
    let mut viewport = ViewportSync::new(Arc::clone(&store) as Arc<dyn ShellStateStore>);
    let viewport_pump = std::thread::Builder::new()
        .name("deck-viewport-pump".to_string())
        .spawn(move || {
            while let Ok(observation) = resize_rx.recv() {
                viewport.handle_resize(observation);
            }
        })
        .context("failed to spawn viewport pump")?;

    // ── Ctrl-C / SIGTERM handler ──────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    info!(
        panel_width = cfg.panel.width,
        panel_height = cfg.panel.height,
        top_bar_height = cfg.chrome.top_bar_height,
        "MirrorDeck shell ready.  Type key codes on stdin; press Ctrl-C to exit."
    );

    loop {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        if !running.load(Ordering::Relaxed) {
            break;
        }
    }

    // ── Teardown ──────────────────────────────────────────────────────────────
    //
    // Stop the sources first; the pumps drain their closed channels and
    // exit, and the key pump cancels pending releases on its way out.  The
    // key pump itself is not joined: its channel only closes once the
    // parked stdin reader sees another line, and the thread dies with the
    // process anyway.
    key_source.stop();
    resize_source.disconnect();
    viewport_pump
        .join()
        .map_err(|_| anyhow::anyhow!("viewport pump panicked"))?;
    surface_task.abort();

    info!("MirrorDeck shell stopped");
    Ok(())
}
