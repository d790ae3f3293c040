//! Grid snake simulation: geometry, collision, target placement, the snake
//! itself and the session controller that ties them together.

mod collision;
mod grid;
mod leaderboard;
mod session;
mod session_rng;
mod settings;
mod snake;
mod snapshot;
mod target;
mod types;

pub use collision::CollisionDetector;
pub use grid::Grid;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use session::{SessionController, SessionPhase, TickOutcome};
pub use session_rng::SessionRng;
pub use settings::{EngineSettings, MAX_SCORE_PER_TARGET};
pub use snake::{Snake, StepOutcome};
pub use snapshot::Snapshot;
pub use target::{TargetPlacer, MAX_PLACEMENT_ATTEMPTS};
pub use types::{Cell, CollisionKind, Direction, GameEndReason};
