use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use snake_engine::game::{GameEndReason, LeaderboardEntry, SessionController, TickOutcome};
use snake_engine::log;

use crate::autopilot::Autopilot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub result: LeaderboardEntry,
    pub reason: GameEndReason,
    pub ticks: u64,
}

#[derive(Clone)]
pub struct SessionDriver {
    controller: Arc<Mutex<SessionController>>,
    autopilot: Autopilot,
    max_ticks: u64,
}

impl SessionDriver {
    pub fn new(controller: SessionController, autopilot: Autopilot, max_ticks: u64) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            autopilot,
            max_ticks,
        }
    }

    pub fn controller(&self) -> Arc<Mutex<SessionController>> {
        self.controller.clone()
    }

    pub async fn run_session(&self, player_name: &str) -> Option<SessionReport> {
        {
            let mut controller = self.controller.lock().await;
            if !controller.start(player_name) {
                log!("Start ignored for player name {:?}", player_name);
                return None;
            }
        }

        let director = tokio::spawn(run_director(self.controller.clone(), self.autopilot));
        let report = self.run_ticks().await;
        if let Err(e) = director.await {
            log!("Director task failed: {}", e);
        }
        report
    }

    async fn run_ticks(&self) -> Option<SessionReport> {
        let mut ticks: u64 = 0;

        loop {
            let period = {
                let controller = self.controller.lock().await;
                controller.period_ms()
            };
            sleep(Duration::from_millis(period)).await;

            // held until the outcome is handled, so no tick follows game over
            let mut controller = self.controller.lock().await;
            let outcome = if ticks >= self.max_ticks {
                log!("Tick limit {} reached, stopping session", self.max_ticks);
                controller.stop();
                controller
                    .last_end_reason()
                    .map(TickOutcome::GameOver)
                    .unwrap_or(TickOutcome::Ignored)
            } else {
                ticks += 1;
                controller.tick()
            };

            match outcome {
                TickOutcome::Moved | TickOutcome::Grew => {
                    let snapshot = controller.snapshot();
                    log!(
                        "tick {}: head {:?}, length {}, score {}, period {}ms",
                        ticks,
                        snapshot.snake_cells.first(),
                        snapshot.snake_cells.len(),
                        snapshot.score,
                        snapshot.speed_period_ms
                    );
                }
                TickOutcome::GameOver(reason) => {
                    let result = controller.snapshot().last_result?;
                    return Some(SessionReport {
                        result,
                        reason,
                        ticks,
                    });
                }
                TickOutcome::Ignored => return None,
            }
        }
    }
}

async fn run_director(controller: Arc<Mutex<SessionController>>, autopilot: Autopilot) {
    loop {
        let period = {
            let mut controller = controller.lock().await;
            if !controller.is_running() {
                break;
            }
            if let Some(direction) = autopilot.calculate_move(&controller) {
                controller.set_direction(direction);
            }
            controller.period_ms()
        };
        sleep(Duration::from_millis((period / 2).max(1))).await;
    }
}
