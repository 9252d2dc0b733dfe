pub mod dom;
pub mod runner;
pub mod storage;

pub use circle_engine;
#[doc(hidden)]
pub use console_error_panic_hook;
#[doc(hidden)]
pub use console_log;
#[doc(hidden)]
pub use log;
pub use dom::{canvas_origin, to_canvas};
pub use runner::GameRunner;
pub use storage::{open_session_store, BrowserSessionStore};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - a `with_runner()` helper, usable by the game crate for its own extra exports
/// - the wasm-bindgen exports (game_init, pointer handlers, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// circle_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: a type implementing `circle_engine::Game`, with
///   `fn new() -> Self` and `fn with_config(GameConfig) -> Self`
/// - `$game_name`: a string literal used in the initialization log message
///
/// The calling crate must depend on `wasm-bindgen` and have its prelude in scope.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        fn start_runner(game: $game_type) {
            let store = $crate::open_session_store();
            let runner = $crate::GameRunner::with_store(game, store);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        fn install_logging() {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);
        }

        #[wasm_bindgen]
        pub fn game_init() {
            install_logging();
            start_runner(<$game_type>::new());
        }

        /// Initialize with a JSON config. Falls back to defaults if it does not parse.
        #[wasm_bindgen]
        pub fn game_init_with_config(json: &str) {
            install_logging();
            let game = match $crate::circle_engine::GameConfig::from_json(json) {
                Ok(config) => <$game_type>::with_config(config),
                Err(e) => {
                    $crate::log::warn!("{}: {}, using defaults", $game_name, e);
                    <$game_type>::new()
                }
            };
            start_runner(game);
        }

        // ---- Input (client coordinates; mouse and touch share these) ----

        #[wasm_bindgen]
        pub fn game_pointer_down(client_x: f64, client_y: f64) {
            with_runner(|r| {
                let p = $crate::to_canvas(&r.config().canvas_id, client_x, client_y);
                r.dispatch($crate::circle_engine::InputEvent::PointerDown { x: p.x, y: p.y });
            });
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(client_x: f64, client_y: f64) {
            with_runner(|r| {
                let p = $crate::to_canvas(&r.config().canvas_id, client_x, client_y);
                r.dispatch($crate::circle_engine::InputEvent::PointerMove { x: p.x, y: p.y });
            });
        }

        #[wasm_bindgen]
        pub fn game_pointer_up() {
            with_runner(|r| r.dispatch($crate::circle_engine::InputEvent::PointerUp));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| {
                r.dispatch($crate::circle_engine::InputEvent::Custom { kind, a, b, c })
            });
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_audio_volume() -> f32 {
            with_runner(|r| r.audio_volume())
        }
    };
}
