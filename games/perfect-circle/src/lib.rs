use wasm_bindgen::prelude::*;

pub mod game;
pub use game::CircleGame;

circle_web::export_game!(CircleGame, "perfect-circle");

// ---- HUD accessors ----

#[wasm_bindgen]
pub fn get_score_text() -> String {
    with_runner(|r| r.game().score_text())
}

#[wasm_bindgen]
pub fn get_best_text() -> String {
    with_runner(|r| r.game().best_text())
}

#[wasm_bindgen]
pub fn get_message_text() -> String {
    with_runner(|r| r.game().message_text().to_string())
}

#[wasm_bindgen]
pub fn get_mute_label() -> String {
    with_runner(|r| r.game().mute_label().to_string())
}

#[wasm_bindgen]
pub fn get_best_score() -> u32 {
    with_runner(|r| r.game().best_score())
}

/// `{"outcome": ...}` for the last finished gesture, or `null`.
#[wasm_bindgen]
pub fn get_last_outcome_json() -> String {
    with_runner(|r| r.game().outcome_json())
}
