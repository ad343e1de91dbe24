//! # menuflow - Menu action engine demo
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Creates: InMemoryBackend (adapters)                      │
//! │    ├── Creates: ActionDispatcher, DupeGuard (domain services)   │
//! │    └── Runs: A scripted session on a wall-clock tick loop       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use audit::TracingDiagnostics;
use clap::Parser;
use menuflow_adapter::InMemoryBackend;
use menuflow_domain::{
    schedule_actions, Arguments, ClickAction, ItemMarker, ItemStack, Menus, OnlinePlayer,
    ScreenDefinition, Session, SubstitutionFlags,
};
use shared::EngineConfig;
use tracing::info;

#[derive(Parser)]
#[command(name = "menuflow")]
#[command(about = "menuflow - Menu click actions and menu-item dupe guard")]
#[command(version)]
struct Cli {
    /// Engine configuration (.json, .yml or .yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ticks to run before exiting
    #[arg(short, long, default_value_t = 40)]
    ticks: u64,
}

const SHOP_ACTIONS: &[&str] = &[
    "[message] &aYou bought {amount}x {item}!",
    "[takemoney] {price}",
    "[console] give %player_name% {item} {amount}",
    "[sound] level_up 1.0 1.5",
    "[log] INFO %player_name% bought {item}",
    "[openmenu] confirm <delay=5>",
    "[close] <delay=20>",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    info!("menuflow - Menu action engine");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let sink = Arc::new(TracingDiagnostics::new(config.debug_level));
    let backend = InMemoryBackend::new(config.clone()).with_diagnostics(sink);
    let dispatcher = backend.dispatcher();
    let guard = backend.dupe_guard();

    backend.menus.register(
        ScreenDefinition::new("shop").with_parameters(["item", "amount", "price"]),
    );
    backend.menus.register(ScreenDefinition::new("confirm"));

    // ========================================
    // Players
    // ========================================

    let steve = backend.server.join("Steve", "world");
    backend.economy.set_balance(steve.id(), 250.0);
    guard.on_login(steve.id());

    let mut display = ItemStack::new("DIAMOND", 1);
    backend.marker.mark(&mut display);
    steve.give_item(display);

    let arguments: Arguments = [("item", "diamond"), ("amount", "2"), ("price", "120")]
        .into_iter()
        .collect();
    backend
        .menus
        .insert_session(Session::new(steve.id(), "shop").with_arguments(arguments.clone()));

    // ========================================
    // Click
    // ========================================

    let actions = SHOP_ACTIONS
        .iter()
        .map(|line| ClickAction::parse(line))
        .collect::<Result<Vec<_>, _>>()
        .context("parsing shop actions")?;

    info!(player = %steve.name(), actions = actions.len(), "Steve clicked the buy button");
    schedule_actions(
        &dispatcher,
        steve.id(),
        &actions,
        &arguments,
        SubstitutionFlags::default(),
    );

    // ========================================
    // Tick loop
    // ========================================

    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_millis));
    let mut closed = false;
    for _ in 0..cli.ticks {
        ticker.tick().await;
        backend.scheduler.tick();

        if !closed && backend.menus.session(steve.id()).is_none() {
            closed = true;
            guard.on_inventory_close(steve.id());
        }
    }

    // ========================================
    // Summary
    // ========================================

    let state = steve.state();
    info!(
        balance = backend.economy.balance(steve.id()),
        messages = state.messages.len(),
        sounds = state.sounds.len(),
        items = state.inventory.items().count(),
        "Final state of Steve"
    );
    for command in backend.server.console_commands() {
        info!(%command, "Console");
    }

    let stats = backend.log.get_stats();
    info!(
        total = stats.total_entries,
        warnings = stats.warning_count,
        "Diagnostics recorded"
    );

    Ok(())
}
