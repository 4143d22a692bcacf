// Simulation event loop.
//
// Owns the draft state and the pick clock. A one-second interval drives
// the countdown; commands come in over an mpsc channel and events go back
// out the same way. Single logical thread of control: all state lives
// here, nothing is shared.

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::draft::pick::DraftPick;
use crate::draft::state::{DraftState, StateError};

use super::clock::{PickClock, TickOutcome};

// ---------------------------------------------------------------------------
// Commands and events
// ---------------------------------------------------------------------------

/// User commands into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    /// Freeze the pick clock at its current value.
    Pause,
    /// Resume a paused clock.
    Resume,
    /// Lock in the current pick immediately, without waiting for expiry.
    PickNow,
    /// Stop the simulation, keeping whatever picks were made.
    Quit,
}

/// Events emitted by the simulation for the caller to render or log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// One second elapsed on the pick clock.
    Tick { pick_number: u32, remaining: u32 },
    /// A pick was recorded (clock expiry or an explicit PickNow).
    PickMade(DraftPick),
    /// All picks have been made.
    Complete,
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

pub struct Simulation {
    state: DraftState,
    clock: PickClock,
    paused: bool,
}

impl Simulation {
    pub fn new(state: DraftState, pick_seconds: u32) -> Self {
        Simulation {
            state,
            clock: PickClock::new(pick_seconds),
            paused: false,
        }
    }

    /// Run the simulation to completion (or until a Quit command / all
    /// command senders dropped), returning the final draft state.
    pub async fn run(
        mut self,
        mut cmd_rx: mpsc::Receiver<SimCommand>,
        event_tx: mpsc::Sender<SimEvent>,
    ) -> Result<DraftState, StateError> {
        if self.state.is_complete() {
            let _ = event_tx.send(SimEvent::Complete).await;
            return Ok(self.state);
        }

        self.clock.arm();
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick fires immediately; consume it so the
        // opening pick gets a full clock.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.paused {
                        continue;
                    }
                    match self.clock.tick() {
                        TickOutcome::Running { remaining } => {
                            if let Some(pick_number) = self.state.next_pick_number() {
                                let _ = event_tx
                                    .send(SimEvent::Tick { pick_number, remaining })
                                    .await;
                            }
                        }
                        TickOutcome::Expired => {
                            if self.make_pick(true, &event_tx).await? {
                                break;
                            }
                        }
                        TickOutcome::Idle => {}
                    }
                }
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(SimCommand::Pause) => {
                            debug!("Simulation paused");
                            self.paused = true;
                        }
                        Some(SimCommand::Resume) => {
                            debug!("Simulation resumed");
                            self.paused = false;
                        }
                        Some(SimCommand::PickNow) => {
                            if self.make_pick(false, &event_tx).await? {
                                break;
                            }
                        }
                        Some(SimCommand::Quit) | None => {
                            info!(
                                "Simulation stopped after {} of {} picks",
                                self.state.pick_count(),
                                self.state.total_picks()
                            );
                            break;
                        }
                    }
                }
            }
        }

        Ok(self.state)
    }

    /// Record the next pick and re-arm the clock. Returns true when the
    /// draft just completed.
    async fn make_pick(
        &mut self,
        auto: bool,
        event_tx: &mpsc::Sender<SimEvent>,
    ) -> Result<bool, StateError> {
        let pick = self.state.record_next(Utc::now(), auto)?.clone();
        info!(
            "Pick {} ({}): {}{}",
            pick.pick_number,
            pick.label,
            pick.team_id,
            if auto { " [clock expired]" } else { "" }
        );
        let _ = event_tx.send(SimEvent::PickMade(pick)).await;

        if self.state.is_complete() {
            info!("Draft complete: {} picks made", self.state.pick_count());
            let _ = event_tx.send(SimEvent::Complete).await;
            self.clock.stop();
            return Ok(true);
        }
        self.clock.arm();
        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// Unit tests (paused tokio time; the interval auto-advances)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::order::DraftOrder;

    fn small_state(teams: usize, rounds: usize) -> DraftState {
        let order = DraftOrder::new((1..=teams).map(|i| format!("TEAM{i}")).collect()).unwrap();
        DraftState::new(order, rounds).unwrap()
    }

    fn channels() -> (
        mpsc::Sender<SimCommand>,
        mpsc::Receiver<SimCommand>,
        mpsc::Sender<SimEvent>,
        mpsc::Receiver<SimEvent>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(256);
        (cmd_tx, cmd_rx, event_tx, event_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn clock_expiry_plays_out_the_whole_board() {
        let (_cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        let sim = Simulation::new(small_state(2, 2), 2);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        let mut made = Vec::new();
        while let Some(event) = event_rx.recv().await {
            match event {
                SimEvent::PickMade(pick) => made.push(pick),
                SimEvent::Complete => break,
                SimEvent::Tick { .. } => {}
            }
        }

        let teams: Vec<&str> = made.iter().map(|p| p.team_id.as_str()).collect();
        assert_eq!(teams, ["TEAM1", "TEAM2", "TEAM2", "TEAM1"]);
        assert!(made.iter().all(|p| p.auto));
        assert_eq!(
            made.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
            ["1.01", "1.02", "2.01", "2.02"]
        );

        let final_state = handle.await.unwrap().unwrap();
        assert!(final_state.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_report_the_countdown() {
        let (cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        let sim = Simulation::new(small_state(2, 1), 3);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        // First pick: two Running ticks (2, 1) then expiry.
        assert_eq!(
            event_rx.recv().await,
            Some(SimEvent::Tick {
                pick_number: 1,
                remaining: 2
            })
        );
        assert_eq!(
            event_rx.recv().await,
            Some(SimEvent::Tick {
                pick_number: 1,
                remaining: 1
            })
        );
        match event_rx.recv().await {
            Some(SimEvent::PickMade(pick)) => assert_eq!(pick.pick_number, 1),
            other => panic!("expected PickMade, got: {other:?}"),
        }

        cmd_tx.send(SimCommand::Quit).await.unwrap();
        let final_state = handle.await.unwrap().unwrap();
        assert_eq!(final_state.pick_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn pick_now_skips_the_clock() {
        let (cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        // Long clock so expiry never fires during the test.
        let sim = Simulation::new(small_state(2, 1), 600);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        cmd_tx.send(SimCommand::PickNow).await.unwrap();
        cmd_tx.send(SimCommand::PickNow).await.unwrap();

        let mut made = Vec::new();
        while let Some(event) = event_rx.recv().await {
            match event {
                SimEvent::PickMade(pick) => made.push(pick),
                SimEvent::Complete => break,
                SimEvent::Tick { .. } => {}
            }
        }

        assert_eq!(made.len(), 2);
        assert!(made.iter().all(|p| !p.auto));
        let final_state = handle.await.unwrap().unwrap();
        assert!(final_state.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn paused_clock_never_expires() {
        let (cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        let sim = Simulation::new(small_state(2, 1), 2);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        cmd_tx.send(SimCommand::Pause).await.unwrap();
        // Give the loop time to process the pause, then let the wall clock
        // run far past where expiry would have landed.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(30)).await;

        cmd_tx.send(SimCommand::Quit).await.unwrap();
        let final_state = handle.await.unwrap().unwrap();

        // Nothing but (possibly) pre-pause ticks should have happened.
        assert_eq!(final_state.pick_count(), 0);
        while let Ok(event) = event_rx.try_recv() {
            assert!(matches!(event, SimEvent::Tick { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn already_complete_state_reports_complete_immediately() {
        let mut state = small_state(2, 1);
        state.record_next(Utc::now(), true).unwrap();
        state.record_next(Utc::now(), true).unwrap();

        let (_cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        let sim = Simulation::new(state, 5);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        assert_eq!(event_rx.recv().await, Some(SimEvent::Complete));
        let final_state = handle.await.unwrap().unwrap();
        assert!(final_state.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_preserves_partial_progress() {
        let (cmd_tx, cmd_rx, event_tx, mut event_rx) = channels();
        let sim = Simulation::new(small_state(3, 2), 1);
        let handle = tokio::spawn(sim.run(cmd_rx, event_tx));

        // With a 1-second clock every tick is an expiry; wait for two picks
        // then quit.
        let mut made = 0;
        while made < 2 {
            if let Some(SimEvent::PickMade(_)) = event_rx.recv().await {
                made += 1;
            }
        }
        cmd_tx.send(SimCommand::Quit).await.unwrap();

        let final_state = handle.await.unwrap().unwrap();
        assert!(final_state.pick_count() >= 2);
        assert!(!final_state.is_complete() || final_state.pick_count() == 6);
    }
}
