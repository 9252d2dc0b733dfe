use serde::{Deserialize, Serialize};

use crate::api::types::{GameEvent, SoundEvent};
use crate::error::EngineError;
use crate::geometry::Point;
use crate::input::queue::InputQueue;
use crate::session::{MemoryStore, SessionStore};
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game or loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels.
    pub world_width: f32,
    /// Canvas height in pixels.
    pub world_height: f32,
    /// DOM id of the canvas element, used to map client coordinates.
    pub canvas_id: String,
    /// Volume of the scribble cue (0.0 - 1.0), read by the page.
    pub audio_volume: f32,
    /// Initial vector vertex capacity (default: 65536). Long strokes grow past it.
    pub vector_capacity: usize,
    /// Maximum number of sound events per dispatch (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per dispatch (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 600.0,
            world_height: 600.0,
            canvas_id: "stage".to_string(),
            audio_volume: 0.3,
            vector_capacity: 65536,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The fixed point the player has to draw around: the canvas center.
    pub fn center(&self) -> Point {
        Point::new(self.world_width as f64 / 2.0, self.world_height as f64 / 2.0)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, e.g. restore the session's best score.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle the pending input events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass that draws the current state.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    pub session: Box<dyn SessionStore>,
    max_sounds: usize,
    max_events: usize,
}

impl EngineContext {
    /// Context backed by an in-memory session store.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    /// Context backed by the given session store.
    pub fn with_store(config: &GameConfig, session: Box<dyn SessionStore>) -> Self {
        Self {
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            session,
            max_sounds: config.max_sounds,
            max_events: config.max_events,
        }
    }

    /// Emit a sound event to be forwarded to JavaScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() >= self.max_sounds {
            log::warn!("sound queue full, dropping {:?}", event);
            return;
        }
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to JavaScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event queue full, dropping kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-dispatch transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Render context handed to Game::render.
pub struct RenderContext<'a> {
    pub vectors: &'a mut VectorState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_center_is_canvas_middle() {
        let config = GameConfig::default();
        assert_eq!(config.center(), Point::new(300.0, 300.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "world_width": 800, "canvas_id": "board" }"#).unwrap();
        assert_eq!(config.world_width, 800.0);
        assert_eq!(config.world_height, 600.0);
        assert_eq!(config.canvas_id, "board");
        assert_eq!(config.audio_volume, 0.3);
        assert_eq!(config.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = GameConfig::from_json("{ world_width: ").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn emit_respects_capacity() {
        let config = GameConfig {
            max_sounds: 2,
            max_events: 1,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::new(&config);
        for _ in 0..5 {
            ctx.emit_sound(SoundEvent(1));
            ctx.emit_event(GameEvent::default());
        }
        assert_eq!(ctx.sounds.len(), 2);
        assert_eq!(ctx.events.len(), 1);

        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn context_session_is_usable() {
        let mut ctx = EngineContext::default();
        ctx.session.set("k", "v").unwrap();
        assert_eq!(ctx.session.get("k").unwrap().as_deref(), Some("v"));
    }
}
