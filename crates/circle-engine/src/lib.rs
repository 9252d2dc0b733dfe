pub mod api;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scoring;
pub mod session;
pub mod stroke;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use api::types::{GameEvent, SoundEvent};
pub use error::EngineError;
pub use geometry::{closure_gap, path_length, point_in_polygon, Point};
pub use input::queue::{InputEvent, InputQueue};
pub use scoring::{score_breakdown, score_stroke, Rejection, ScoreBreakdown, ScoreOutcome};
pub use session::{BestScore, MemoryStore, SessionStore, BEST_SCORE_KEY};
pub use stroke::{client_to_canvas, Stroke, StrokeCapture};
pub use systems::vector::{VectorColor, VectorState, VectorVertex};
