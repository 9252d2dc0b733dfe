use circle_engine::*;
use glam::Vec2;

const STROKE_WIDTH: f32 = 2.0;
const DOT_RADIUS: f32 = 5.0;
const GUIDE_DASH: f32 = 6.0;
const GUIDE_GAP: f32 = 6.0;
const GUIDE_WIDTH: f32 = 2.0;

/// Custom event kinds from the page
pub const CUSTOM_RESET: u32 = 1;
pub const CUSTOM_TOGGLE_MUTE: u32 = 2;

/// Game event kinds to the page
pub const EVENT_OUTCOME: f32 = 1.0;
pub const EVENT_BEST: f32 = 2.0;
pub const EVENT_MUTE: f32 = 3.0;

/// Start the looping scribble sound from the beginning.
pub const SOUND_SCRIBBLE_START: SoundEvent = SoundEvent(1);
/// Pause the scribble sound and rewind it.
pub const SOUND_SCRIBBLE_STOP: SoundEvent = SoundEvent(2);

const NOT_INSIDE_MESSAGE: &str = "The red dot is not inside your circle!";

pub struct CircleGame {
    config: GameConfig,
    center: Point,
    capture: StrokeCapture,
    outcome: Option<ScoreOutcome>,
    best: BestScore,
    muted: bool,
}

impl CircleGame {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            center: config.center(),
            config,
            capture: StrokeCapture::new(),
            outcome: None,
            best: BestScore::default(),
            muted: false,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Outcome of the last finished gesture, cleared by reset.
    pub fn outcome(&self) -> Option<ScoreOutcome> {
        self.outcome
    }

    pub fn best_score(&self) -> u32 {
        self.best.get()
    }

    pub fn is_drawing(&self) -> bool {
        self.capture.is_drawing()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn score_text(&self) -> String {
        match self.outcome {
            Some(ScoreOutcome::TooShort) => "Score: too short!".to_string(),
            Some(ScoreOutcome::Scored { score, .. }) => format!("Score: {score}"),
            Some(ScoreOutcome::NotEnclosed) | None => "Score: —".to_string(),
        }
    }

    pub fn best_text(&self) -> String {
        format!("Best: {}", self.best.get())
    }

    pub fn message_text(&self) -> &'static str {
        match self.outcome {
            Some(ScoreOutcome::NotEnclosed) => NOT_INSIDE_MESSAGE,
            _ => "",
        }
    }

    pub fn mute_label(&self) -> &'static str {
        if self.muted {
            "🔇"
        } else {
            "🔊"
        }
    }

    /// JSON of the last outcome, `null` if there is none.
    pub fn outcome_json(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_json(),
            None => "null".to_string(),
        }
    }

    fn finish_stroke(&mut self, ctx: &mut EngineContext, stroke: &Stroke) {
        let outcome = score_stroke(stroke.points(), self.center);
        let (score, mean_radius) = match outcome {
            ScoreOutcome::Scored { score, mean_radius } => {
                log::info!("scored {score} ({} points, mean radius {mean_radius:.1})", stroke.len());
                if self.best.record(score, &mut *ctx.session) {
                    ctx.emit_event(GameEvent {
                        kind: EVENT_BEST,
                        a: score as f32,
                        b: 0.0,
                        c: 0.0,
                    });
                }
                (score as f32, mean_radius as f32)
            }
            rejected => {
                log::info!("stroke rejected: {rejected:?} ({} points)", stroke.len());
                (0.0, 0.0)
            }
        };

        ctx.emit_event(GameEvent {
            kind: EVENT_OUTCOME,
            a: outcome.code() as f32,
            b: score,
            c: mean_radius,
        });
        self.outcome = Some(outcome);
    }

    fn reset(&mut self) {
        self.capture.reset();
        self.outcome = None;
    }
}

impl Default for CircleGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for CircleGame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.best = BestScore::load(&*ctx.session);
        ctx.emit_event(GameEvent {
            kind: EVENT_BEST,
            a: self.best.get() as f32,
            b: 0.0,
            c: 0.0,
        });
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.capture.begin(Point::new(x, y));
                    ctx.emit_sound(SOUND_SCRIBBLE_START);
                    log::debug!("gesture started at ({x:.0}, {y:.0})");
                }
                InputEvent::PointerMove { x, y } => {
                    self.capture.extend(Point::new(x, y));
                }
                InputEvent::PointerUp => {
                    if let Some(stroke) = self.capture.end() {
                        ctx.emit_sound(SOUND_SCRIBBLE_STOP);
                        log::debug!("gesture ended with {} points", stroke.len());
                        self.finish_stroke(ctx, &stroke);
                    }
                }
                InputEvent::Custom { kind, .. } if kind == CUSTOM_RESET => {
                    self.reset();
                }
                InputEvent::Custom { kind, .. } if kind == CUSTOM_TOGGLE_MUTE => {
                    self.muted = !self.muted;
                    ctx.emit_event(GameEvent {
                        kind: EVENT_MUTE,
                        a: if self.muted { 1.0 } else { 0.0 },
                        b: 0.0,
                        c: 0.0,
                    });
                }
                InputEvent::Custom { .. } => {}
            }
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        let path: Vec<Vec2> = self.capture.points().iter().map(|p| p.as_vec2()).collect();
        ctx.vectors.stroke_polyline(&path, STROKE_WIDTH, VectorColor::LIME);

        let center = self.center.as_vec2();
        ctx.vectors.fill_circle(center, DOT_RADIUS, VectorColor::RED);

        // Guide circle only between a scored gesture and the next press.
        if let Some(ScoreOutcome::Scored { mean_radius, .. }) = self.outcome {
            if !self.capture.is_drawing() {
                ctx.vectors.stroke_dashed_circle(
                    center,
                    mean_radius as f32,
                    GUIDE_DASH,
                    GUIDE_GAP,
                    GUIDE_WIDTH,
                    VectorColor::GUIDE_GRAY,
                );
            }
        }
    }
}
