//! Canvas rendering for the swap puzzle

use crate::game::GameState;
use crate::theme::Theme;
use bubble_core::Clock;
use web_sys::CanvasRenderingContext2d;

/// Box geometry for a canvas size and row length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub padding_x: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub boxes_y: f64,
    pub count: usize,
}

impl CanvasLayout {
    pub fn compute(width: f64, height: f64, count: usize) -> Self {
        // 10% padding either side, boxes share the rest
        let padding_x = 0.1 * width;
        let sorting_width = width - 2.0 * padding_x;
        let box_width = sorting_width / count.max(1) as f64;
        let box_height = (height * 0.4).clamp(40.0, 80.0).min(box_width * 1.5);
        let boxes_y = 0.3 * height;
        Self {
            padding_x,
            box_width,
            box_height,
            boxes_y,
            count,
        }
    }

    /// Left edge of a (possibly fractional) slot
    pub fn slot_x(&self, slot: f64) -> f64 {
        self.padding_x + slot * self.box_width
    }

    /// The box under a canvas point, in CSS pixels
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        if y < self.boxes_y || y >= self.boxes_y + self.box_height || x < self.padding_x {
            return None;
        }
        let slot = ((x - self.padding_x) / self.box_width).floor() as usize;
        (slot < self.count).then_some(slot)
    }
}

/// Render the complete game to canvas
pub fn render_game<C: Clock + Clone + 'static>(
    ctx: &CanvasRenderingContext2d,
    state: &GameState<C>,
    theme: &Theme,
    width: f64,
    height: f64,
) {
    let layout = CanvasLayout::compute(width, height, state.len());

    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_fill_style_str(&theme.title_text.as_css());
    ctx.set_font("bold 24px 'JetBrains Mono', monospace");
    let _ = ctx.fill_text("Bubble Sort", width / 2.0, 0.08 * height);

    ctx.set_fill_style_str(&theme.info_text.as_css());
    ctx.set_font("15px 'JetBrains Mono', monospace");
    let _ = ctx.fill_text("Click on two items to swap them.", width / 2.0, 0.17 * height);

    render_boxes(ctx, state, theme, &layout);
    render_cursor(ctx, state, theme, &layout);
    render_status(ctx, state, theme, width, layout.boxes_y + layout.box_height + 40.0);

    if let Some(msg) = state.message() {
        ctx.set_fill_style_str(&theme.message_text.as_css());
        ctx.set_font("15px 'JetBrains Mono', monospace");
        let _ = ctx.fill_text(msg, width / 2.0, layout.boxes_y + layout.box_height + 68.0);
    }
}

fn render_boxes<C: Clock + Clone + 'static>(
    ctx: &CanvasRenderingContext2d,
    state: &GameState<C>,
    theme: &Theme,
    layout: &CanvasLayout,
) {
    let row = state.row();
    let font_size = (layout.box_height * 0.4).clamp(14.0, 32.0);
    ctx.set_font(&format!("bold {}px 'JetBrains Mono', monospace", font_size));

    // Resting boxes first so sliding ones are drawn on top
    let mut order: Vec<usize> = (0..row.sprites().len()).collect();
    order.sort_by_key(|&slot| row.draw_slot(slot).fract() != 0.0);

    for slot in order {
        let sprite = &row.sprites()[slot];
        let x = layout.slot_x(row.draw_slot(slot));
        let y = layout.boxes_y;

        ctx.set_fill_style_str(&row.fill(slot, theme).as_css());
        ctx.fill_rect(x, y, layout.box_width, layout.box_height);

        ctx.set_stroke_style_str(&theme.box_border.as_css());
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x, y, layout.box_width, layout.box_height);

        ctx.set_fill_style_str(&theme.box_text.as_css());
        let _ = ctx.fill_text(
            &sprite.value.to_string(),
            x + layout.box_width / 2.0,
            y + layout.box_height / 2.0,
        );
    }
}

fn render_cursor<C: Clock + Clone + 'static>(
    ctx: &CanvasRenderingContext2d,
    state: &GameState<C>,
    theme: &Theme,
    layout: &CanvasLayout,
) {
    if state.len() == 0 || state.is_celebrating() {
        return;
    }
    let x = layout.slot_x(state.cursor() as f64);
    let y = layout.boxes_y + layout.box_height + 8.0;
    ctx.set_fill_style_str(&theme.cursor.as_css());
    ctx.fill_rect(x + layout.box_width * 0.25, y, layout.box_width * 0.5, 3.0);
}

fn render_status<C: Clock + Clone + 'static>(
    ctx: &CanvasRenderingContext2d,
    state: &GameState<C>,
    theme: &Theme,
    width: f64,
    y: f64,
) {
    ctx.set_font("15px 'JetBrains Mono', monospace");
    let text = if state.is_celebrating() {
        ctx.set_fill_style_str(&theme.box_success.as_css());
        format!(
            "Sorted in {} swaps with {} mistakes!",
            state.swaps_made(),
            state.mistakes()
        )
    } else {
        ctx.set_fill_style_str(&theme.info_text.as_css());
        format!(
            "Swaps left: {}   Mistakes: {}",
            state.remaining_swaps(),
            state.mistakes()
        )
    };
    let _ = ctx.fill_text(&text, width / 2.0, y);
}
