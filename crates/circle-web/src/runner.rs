use circle_engine::{
    EngineContext, Game, GameConfig, InputEvent, InputQueue, RenderContext, SessionStore,
    VectorState,
};

/// Generic game runner that wires up the engine.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
///
/// There is no frame loop: every input event is handled to completion as
/// soon as it arrives, and the draw buffers are rebuilt right after.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    vectors: VectorState,
    config: GameConfig,
    initialized: bool,
    /// Flat buffer of sound event IDs for JavaScript reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    /// Runner with an in-memory session store.
    pub fn new(game: G) -> Self {
        let config = game.config();
        let ctx = EngineContext::new(&config);
        Self::assemble(game, config, ctx)
    }

    /// Runner whose best score lives in the given session store.
    pub fn with_store(game: G, store: Box<dyn SessionStore>) -> Self {
        let config = game.config();
        let ctx = EngineContext::with_store(&config, store);
        Self::assemble(game, config, ctx)
    }

    fn assemble(game: G, config: GameConfig, ctx: EngineContext) -> Self {
        Self {
            game,
            ctx,
            input: InputQueue::new(),
            vectors: VectorState::new(config.vector_capacity),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            config,
            initialized: false,
        }
    }

    /// Initialize the game and draw the empty board. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.redraw();
    }

    /// Push an input event into the queue without processing it.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Push an input event and process the queue right away.
    pub fn dispatch(&mut self, event: InputEvent) {
        self.push_input(event);
        self.pump();
    }

    /// Process all queued input: update the game, redraw, pack sounds.
    pub fn pump(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-dispatch transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.redraw();

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    fn redraw(&mut self) {
        self.vectors.clear();
        let mut render_ctx = RenderContext {
            vectors: &mut self.vectors,
        };
        self.game.render(&mut render_ctx);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- Pointer accessors for reads straight out of wasm memory ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn audio_volume(&self) -> f32 {
        self.config.audio_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_engine::{GameEvent, SoundEvent, VectorColor};
    use glam::Vec2;

    /// Counts pointer presses, beeps on each, draws a dot per press.
    #[derive(Default)]
    struct Clicker {
        presses: u32,
    }

    impl Game for Clicker {
        fn config(&self) -> GameConfig {
            GameConfig {
                vector_capacity: 8,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                if let InputEvent::PointerDown { .. } = event {
                    self.presses += 1;
                    ctx.emit_sound(SoundEvent(3));
                    ctx.emit_event(GameEvent {
                        kind: 1.0,
                        a: self.presses as f32,
                        ..GameEvent::default()
                    });
                }
            }
        }

        fn render(&self, ctx: &mut RenderContext) {
            for i in 0..self.presses {
                ctx.vectors
                    .fill_circle(Vec2::new(10.0 * i as f32, 0.0), 3.0, VectorColor::RED);
            }
        }
    }

    #[test]
    fn input_before_init_is_held_back() {
        let mut runner = GameRunner::new(Clicker::default());
        runner.dispatch(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        assert_eq!(runner.game().presses, 0);

        runner.init();
        runner.pump();
        assert_eq!(runner.game().presses, 1);
    }

    #[test]
    fn dispatch_updates_and_redraws() {
        let mut runner = GameRunner::new(Clicker::default());
        runner.init();
        assert_eq!(runner.vector_vertex_count(), 0);

        runner.dispatch(InputEvent::PointerDown { x: 1.0, y: 2.0 });
        let one_dot = runner.vector_vertex_count();
        assert!(one_dot > 0);
        assert_eq!(runner.sound_events_len(), 1);
        assert_eq!(runner.game_events_len(), 1);

        runner.dispatch(InputEvent::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(runner.vector_vertex_count(), one_dot * 2);
    }

    #[test]
    fn transient_data_is_cleared_between_dispatches() {
        let mut runner = GameRunner::new(Clicker::default());
        runner.init();
        runner.dispatch(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        runner.dispatch(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        assert_eq!(runner.sound_events_len(), 0);
        assert_eq!(runner.game_events_len(), 0);
    }

    #[test]
    fn config_accessors() {
        let runner = GameRunner::new(Clicker::default());
        assert_eq!(runner.world_width(), 600.0);
        assert_eq!(runner.audio_volume(), 0.3);
        assert!(!runner.is_initialized());
    }
}
