//! Browser 2D canvas renderer

use web_sys::CanvasRenderingContext2d;

use super::{
    BACKGROUND, BEST_COLOR, FOOD_COLOR, REWIND_COLOR, SCORE_COLOR, css_color, overlay_lines,
    segment_color, timeline_fraction,
};
use crate::config::GameConfig;
use crate::game::RenderView;
use crate::particles::ParticleSystem;
use crate::sim::{GamePhase, GridPos};

/// Height of the score strip along the top edge
const HUD_HEIGHT: f64 = 36.0;
/// Height of the rewind bar along the bottom edge
const TIMELINE_HEIGHT: f64 = 6.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    config: GameConfig,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, config: GameConfig) -> Self {
        Self { ctx, config }
    }

    /// Draw one frame. `pulse` animates the food.
    pub fn render(&self, view: &RenderView<'_>, particles: &ParticleSystem, pulse: f64) {
        self.clear();
        self.draw_food(view.food, pulse);
        self.draw_snake(view.body);
        self.draw_particles(particles);
        self.draw_score(view.score, view.best_score);
        if view.phase != GamePhase::Running {
            self.draw_overlay(view);
        }
        self.draw_timeline(view);
    }

    fn size(&self) -> (f64, f64) {
        let (w, h) = self.config.pixel_size();
        (w as f64, h as f64)
    }

    fn clear(&self) {
        let ctx = &self.ctx;
        let (w, h) = self.size();
        let cs = self.config.cell_size as f64;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str("rgba(255,255,255,0.03)");
        ctx.set_line_width(0.5);
        for x in 0..=self.config.columns {
            ctx.begin_path();
            ctx.move_to(x as f64 * cs, 0.0);
            ctx.line_to(x as f64 * cs, h);
            ctx.stroke();
        }
        for y in 0..=self.config.rows {
            ctx.begin_path();
            ctx.move_to(0.0, y as f64 * cs);
            ctx.line_to(w, y as f64 * cs);
            ctx.stroke();
        }
    }

    fn draw_snake(&self, body: &[GridPos]) {
        let ctx = &self.ctx;
        let cs = self.config.cell_size as f64;

        for (index, segment) in body.iter().enumerate() {
            let padding = if index == 0 { 1.0 } else { 2.0 };
            ctx.set_fill_style_str(&css_color(segment_color(index, body.len())));
            ctx.fill_rect(
                segment.x as f64 * cs + padding,
                segment.y as f64 * cs + padding,
                cs - padding * 2.0,
                cs - padding * 2.0,
            );
        }

        if let Some(head) = body.first() {
            ctx.set_fill_style_str(BACKGROUND);
            let eye = 3.0;
            ctx.fill_rect(head.x as f64 * cs + cs - 8.0, head.y as f64 * cs + 5.0, eye, eye);
            ctx.fill_rect(head.x as f64 * cs + cs - 8.0, head.y as f64 * cs + cs - 8.0, eye, eye);
        }
    }

    fn draw_food(&self, pos: GridPos, pulse: f64) {
        let ctx = &self.ctx;
        let cs = self.config.cell_size as f64;
        let scale = 1.0 + pulse.sin() * 0.15;
        let offset = cs * (1.0 - scale) / 2.0;

        ctx.save();
        ctx.set_shadow_color(FOOD_COLOR);
        ctx.set_shadow_blur(10.0);
        ctx.set_fill_style_str(FOOD_COLOR);
        ctx.fill_rect(
            pos.x as f64 * cs + offset + 3.0,
            pos.y as f64 * cs + offset + 3.0,
            cs * scale - 6.0,
            cs * scale - 6.0,
        );
        ctx.restore();
    }

    fn draw_particles(&self, particles: &ParticleSystem) {
        let ctx = &self.ctx;
        for p in particles.particles() {
            ctx.set_global_alpha(p.life.max(0.0) as f64);
            ctx.set_fill_style_str(&css_color(p.color));
            let size = p.size as f64;
            ctx.fill_rect(
                (p.pos.x as f64 - size / 2.0).round(),
                (p.pos.y as f64 - size / 2.0).round(),
                size,
                size,
            );
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_score(&self, score: u32, best: u32) {
        let ctx = &self.ctx;
        let (w, _) = self.size();

        ctx.set_fill_style_str("rgba(0,0,0,0.4)");
        ctx.fill_rect(0.0, 0.0, w, HUD_HEIGHT);

        ctx.set_font("bold 16px monospace");
        ctx.set_text_align("left");
        ctx.set_fill_style_str(SCORE_COLOR);
        let _ = ctx.fill_text(&format!("Score: {}", score), 10.0, 22.0);

        ctx.set_text_align("right");
        ctx.set_fill_style_str(BEST_COLOR);
        let _ = ctx.fill_text(&format!("Best: {}", best), w - 10.0, 22.0);
    }

    fn draw_overlay(&self, view: &RenderView<'_>) {
        let ctx = &self.ctx;
        let (w, h) = self.size();

        ctx.set_fill_style_str("rgba(0,0,0,0.75)");
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_text_align("center");
        for line in overlay_lines(view) {
            ctx.set_font(&line.font());
            ctx.set_fill_style_str(line.color);
            let _ = ctx.fill_text(&line.text, w / 2.0, h / 2.0 + line.dy);
        }
    }

    fn draw_timeline(&self, view: &RenderView<'_>) {
        let Some(fraction) = timeline_fraction(view) else {
            return;
        };
        let ctx = &self.ctx;
        let (w, h) = self.size();

        ctx.set_fill_style_str("rgba(255,255,255,0.1)");
        ctx.fill_rect(0.0, h - TIMELINE_HEIGHT, w, TIMELINE_HEIGHT);
        ctx.set_fill_style_str(REWIND_COLOR);
        ctx.fill_rect(0.0, h - TIMELINE_HEIGHT, w * fraction, TIMELINE_HEIGHT);
    }
}
