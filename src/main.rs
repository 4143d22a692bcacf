// Snake draft simulator entry point.
//
// Startup sequence:
// 1. Initialize tracing
// 2. Load config
// 3. Build the draft order and board state
// 4. Create mpsc channels, spawn the simulation runner
// 5. Consume simulation events until the draft completes (or Ctrl+C)
// 6. Write the pick log to logs/ and shut down

use snakeclock::config;
use snakeclock::draft::order::DraftOrder;
use snakeclock::draft::state::DraftState;
use snakeclock::sim::runner::{SimCommand, SimEvent, Simulation};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Snake draft simulator starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {} teams, {} rounds, {}s pick clock ({} total picks)",
        config.team_count(),
        config.rounds,
        config.pick_clock_seconds,
        config.total_picks()
    );

    // 3. Build the draft order and board state
    let order = DraftOrder::new(config.teams.clone()).context("invalid draft order")?;
    let state = DraftState::new(order, config.rounds).context("failed to build draft board")?;

    // 4. Create mpsc channels, spawn the simulation runner
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (event_tx, mut event_rx) = mpsc::channel(256);

    let simulation = Simulation::new(state, config.pick_clock_seconds);
    let sim_handle = tokio::spawn(simulation.run(cmd_rx, event_tx));

    // Ctrl+C requests a clean quit; the runner keeps partial progress.
    let quit_tx = cmd_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received, stopping simulation");
            let _ = quit_tx.send(SimCommand::Quit).await;
        }
    });

    // 5. Consume simulation events until the runner finishes
    while let Some(event) = event_rx.recv().await {
        match event {
            SimEvent::Tick {
                pick_number,
                remaining,
            } => {
                debug!("Pick {pick_number}: {remaining}s on the clock");
            }
            SimEvent::PickMade(pick) => {
                println!(
                    "{:>5}  pick {:>3}  {}{}",
                    pick.label,
                    pick.pick_number,
                    pick.team_id,
                    if pick.auto { "" } else { "  (locked in)" }
                );
            }
            SimEvent::Complete => {
                println!("Draft complete.");
            }
        }
    }

    // 6. Write the pick log and shut down
    let final_state = sim_handle
        .await
        .context("simulation task panicked")?
        .context("simulation failed")?;
    write_pick_log(&final_state).context("failed to write pick log")?;

    info!(
        "Shut down cleanly after {} of {} picks",
        final_state.pick_count(),
        final_state.total_picks()
    );
    Ok(())
}

/// Write the made picks as JSON under logs/ for later inspection or replay
/// via `DraftState::restore_from_picks`.
fn write_pick_log(state: &DraftState) -> anyhow::Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("draft-log.json");
    let json = serde_json::to_string_pretty(state.picks())?;
    std::fs::write(&path, json)?;
    info!("Pick log written to {}", path.display());
    Ok(())
}

/// Initialize tracing to stderr; pick lines go to stdout.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snakeclock=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
