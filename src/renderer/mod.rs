//! Rendering module
//!
//! Pure layout helpers (overlay text, body gradient) plus the browser
//! 2D canvas renderer. Rendering only reads `RenderView`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::game::RenderView;
use crate::sim::GamePhase;

pub const BACKGROUND: &str = "#1a1a2e";
pub const HEAD_COLOR: u32 = 0x00ff88;
pub const FOOD_COLOR: &str = "#ff4444";
pub const SCORE_COLOR: &str = "#00ff88";
pub const BEST_COLOR: &str = "#ffcc00";
pub const HINT_COLOR: &str = "#aaaaaa";
pub const REWIND_COLOR: &str = "#44aaff";

/// One centred line of overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub color: &'static str,
    /// Font size in pixels
    pub size: u32,
    pub bold: bool,
    /// Vertical offset from the board centre
    pub dy: f64,
}

impl OverlayLine {
    fn new(text: impl Into<String>, color: &'static str, size: u32, bold: bool, dy: f64) -> Self {
        Self {
            text: text.into(),
            color,
            size,
            bold,
            dy,
        }
    }

    /// CSS font shorthand
    pub fn font(&self) -> String {
        if self.bold {
            format!("bold {}px monospace", self.size)
        } else {
            format!("{}px monospace", self.size)
        }
    }
}

/// Overlay text for the current phase; empty while running
pub fn overlay_lines(view: &RenderView<'_>) -> Vec<OverlayLine> {
    match view.phase {
        GamePhase::Running => Vec::new(),
        GamePhase::Idle => vec![
            OverlayLine::new("SNAKE", SCORE_COLOR, 48, true, -60.0),
            OverlayLine::new("Press SPACE or tap to start", "#ffffff", 20, false, 0.0),
            OverlayLine::new("Arrow Keys / WASD to move", HINT_COLOR, 14, false, 35.0),
            OverlayLine::new("P to pause", HINT_COLOR, 14, false, 55.0),
        ],
        GamePhase::Paused => vec![
            OverlayLine::new("PAUSED", BEST_COLOR, 40, true, -20.0),
            OverlayLine::new("Press P to resume", HINT_COLOR, 16, false, 25.0),
        ],
        GamePhase::Rewind => {
            let at_tip = view
                .timeline
                .is_some_and(|t| t.index + 1 >= t.len);
            let (title, color) = if at_tip {
                ("GAME OVER", FOOD_COLOR)
            } else {
                ("REWIND", REWIND_COLOR)
            };
            let mut lines = vec![
                OverlayLine::new(title, color, 40, true, -80.0),
                OverlayLine::new(format!("Score: {}", view.score), "#ffffff", 22, false, -30.0),
                OverlayLine::new(format!("Best: {}", view.best_score), BEST_COLOR, 18, false, 0.0),
            ];
            if let Some(t) = view.timeline {
                lines.push(OverlayLine::new(
                    format!("Frame {} / {}", t.index + 1, t.len),
                    HINT_COLOR,
                    14,
                    false,
                    30.0,
                ));
            }
            lines.push(OverlayLine::new(
                "\u{2190}/\u{2192} rewind  SPACE resume  R restart",
                HINT_COLOR,
                14,
                false,
                60.0,
            ));
            lines
        }
    }
}

/// Body colour: bright head, then a green gradient fading toward the tail
pub fn segment_color(index: usize, len: usize) -> u32 {
    if index == 0 {
        return HEAD_COLOR;
    }
    let ratio = 1.0 - (index as f64 / len.max(1) as f64) * 0.5;
    let g = (200.0 * ratio).floor() as u32;
    let b = (100.0 * ratio).floor() as u32;
    (g << 8) | b
}

/// `#rrggbb` for an RGB value
pub fn css_color(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xff_ffff)
}

/// Fraction of the rewind bar to fill
pub fn timeline_fraction(view: &RenderView<'_>) -> Option<f64> {
    view.timeline.map(|t| {
        if t.len <= 1 {
            1.0
        } else {
            t.index as f64 / (t.len - 1) as f64
        }
    })
}
