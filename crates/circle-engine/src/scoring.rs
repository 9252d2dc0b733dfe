//! Circularity scoring for a finished stroke.
//!
//! The score rewards a loop whose points keep a constant distance from the
//! center, then subtracts penalties for a path much longer than the matching
//! circle and for a loop that was left open. Strokes that are too short, or
//! that do not go around the center, are rejected without a score.

use serde::Serialize;
use std::f64::consts::TAU;

use crate::geometry::{closure_gap, path_length, point_in_polygon, Point};

/// Strokes with fewer points than this are never scored.
pub const MIN_STROKE_POINTS: usize = 60;
/// A loop whose ends are further apart than this gets a closing point appended.
pub const CLOSE_GAP_THRESHOLD: f64 = 3.0;
/// Length penalty per unit of excess length ratio.
pub const LENGTH_PENALTY_SCALE: f64 = 20.0;
/// Gap penalty per unit of gap/mean ratio.
pub const GAP_PENALTY_SCALE: f64 = 100.0;
/// Upper bound of the gap penalty.
pub const GAP_PENALTY_CAP: f64 = 20.0;

/// Why a stroke produced no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    NotEnclosed,
}

/// Result of scoring one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScoreOutcome {
    TooShort,
    NotEnclosed,
    Scored {
        score: u32,
        #[serde(rename = "meanRadius")]
        mean_radius: f64,
    },
}

impl ScoreOutcome {
    /// Numeric code used in game events: 0 too short, 1 not enclosed, 2 scored.
    pub fn code(&self) -> u32 {
        match self {
            Self::TooShort => 0,
            Self::NotEnclosed => 1,
            Self::Scored { .. } => 2,
        }
    }

    /// The score, if the stroke was scored.
    pub fn score(&self) -> Option<u32> {
        match self {
            Self::Scored { score, .. } => Some(*score),
            _ => None,
        }
    }

    /// Serialize to the JSON shape handed to the presentation layer.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<Rejection> for ScoreOutcome {
    fn from(r: Rejection) -> Self {
        match r {
            Rejection::TooShort => Self::TooShort,
            Rejection::NotEnclosed => Self::NotEnclosed,
        }
    }
}

/// Every intermediate value of a successful scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Distance between the stroke's first and last recorded point.
    pub gap: f64,
    /// Mean distance from the loop's points to the center.
    pub mean_radius: f64,
    /// Population standard deviation of those distances.
    pub std_dev: f64,
    /// Length of the closed loop.
    pub path_length: f64,
    /// Rounded circularity score before penalties (0..=100).
    pub base: f64,
    pub length_penalty: f64,
    pub gap_penalty: f64,
    /// Final clamped score.
    pub score: u32,
}

/// Round half toward +infinity, the way browsers round.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Penalty for a loop whose ends were left `gap` apart.
pub fn gap_penalty(gap: f64, mean_radius: f64) -> f64 {
    (gap / mean_radius * GAP_PENALTY_SCALE).min(GAP_PENALTY_CAP)
}

/// Penalty for a loop longer than the circumference of its mean circle.
pub fn length_penalty(path_length: f64, mean_radius: f64) -> f64 {
    let ideal = TAU * mean_radius;
    ((path_length / ideal - 1.0) * LENGTH_PENALTY_SCALE).max(0.0)
}

/// Mean and population standard deviation of `values`.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Score a stroke and keep every intermediate value.
pub fn score_breakdown(stroke: &[Point], center: Point) -> Result<ScoreBreakdown, Rejection> {
    if stroke.len() < MIN_STROKE_POINTS {
        return Err(Rejection::TooShort);
    }

    let gap = closure_gap(stroke);
    let mut closed = stroke.to_vec();
    if gap > CLOSE_GAP_THRESHOLD {
        closed.push(stroke[0]);
    }

    if !point_in_polygon(center, &closed) {
        return Err(Rejection::NotEnclosed);
    }

    let radii: Vec<f64> = closed.iter().map(|p| p.distance(center)).collect();
    let (mean_radius, std_dev) = mean_and_std(&radii);

    let base = round_half_up(100.0 * (1.0 - std_dev / mean_radius)).max(0.0);
    let path_length = path_length(&closed);
    let length_penalty = length_penalty(path_length, mean_radius);
    let gap_penalty = gap_penalty(gap, mean_radius);
    let score = round_half_up(base - length_penalty - gap_penalty).max(0.0) as u32;

    Ok(ScoreBreakdown {
        gap,
        mean_radius,
        std_dev,
        path_length,
        base,
        length_penalty,
        gap_penalty,
        score,
    })
}

/// Score a stroke against the fixed center.
pub fn score_stroke(stroke: &[Point], center: Point) -> ScoreOutcome {
    match score_breakdown(stroke, center) {
        Ok(b) => ScoreOutcome::Scored {
            score: b.score,
            mean_radius: b.mean_radius,
        },
        Err(r) => r.into(),
    }
}
