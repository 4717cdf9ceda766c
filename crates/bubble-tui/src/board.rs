//! On-screen state of the row of boxes.
//!
//! The board listens to the puzzle through [`Renderer`] and turns each
//! notification into a short frame-based animation.

use crate::animations::{blend, ease_in_out, FPS};
use crate::theme::Theme;
use bubble_core::Renderer;
use crossterm::style::Color;
use tracing::trace;

/// Length of the slide when two boxes trade places (1 s)
pub const SWAP_FRAMES: u32 = FPS;
/// Length of the error flash: half towards the error color, half back (1 s)
pub const ERROR_FRAMES: u32 = FPS;
/// Fade into the success color (1 s)
pub const SUCCESS_FRAMES: u32 = FPS;

#[derive(Debug, Clone, Copy)]
struct Slide {
    from: usize,
    start: u32,
}

/// One box as drawn
#[derive(Debug, Clone)]
pub struct BoxView {
    pub value: u32,
    pub selected: bool,
    slide: Option<Slide>,
    flash: Option<u32>,
}

impl BoxView {
    fn new(value: u32) -> Self {
        Self {
            value,
            selected: false,
            slide: None,
            flash: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    boxes: Vec<BoxView>,
    frame: u32,
    /// Frame at which the success fade started
    solved_at: Option<u32>,
    /// Skip the fade (puzzle was sorted from the start)
    solved_instantly: bool,
    /// Set by `solved()`, taken by the app to start the celebration
    just_solved: bool,
}

impl Board {
    pub fn new(arrangement: &[u32]) -> Self {
        Self {
            boxes: arrangement.iter().copied().map(BoxView::new).collect(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn boxes(&self) -> &[BoxView] {
        &self.boxes
    }

    /// Show the row as sorted without any transition
    pub fn mark_solved(&mut self) {
        self.solved_at = Some(self.frame);
        self.solved_instantly = true;
    }

    pub fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }

    /// Whether `solved()` arrived since the last call
    pub fn take_just_solved(&mut self) -> bool {
        std::mem::take(&mut self.just_solved)
    }

    /// Advance one frame, retiring finished animations
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        let frame = self.frame;
        for b in &mut self.boxes {
            if matches!(b.slide, Some(s) if frame.saturating_sub(s.start) >= SWAP_FRAMES) {
                b.slide = None;
            }
            if matches!(b.flash, Some(start) if frame.saturating_sub(start) >= ERROR_FRAMES) {
                b.flash = None;
            }
        }
    }

    /// Whether anything is still moving or fading
    pub fn is_animating(&self) -> bool {
        let fading = match self.solved_at {
            Some(start) => !self.solved_instantly && self.frame.saturating_sub(start) < SUCCESS_FRAMES,
            None => false,
        };
        fading
            || self
                .boxes
                .iter()
                .any(|b| b.slide.is_some() || b.flash.is_some())
    }

    /// Horizontal slot the box at `slot` is currently drawn at.
    ///
    /// Fractional while sliding, exactly `slot` at rest.
    pub fn draw_slot(&self, slot: usize) -> f32 {
        let Some(view) = self.boxes.get(slot) else {
            return slot as f32;
        };
        match view.slide {
            Some(slide) => {
                let t = self.frame.saturating_sub(slide.start) as f32 / SWAP_FRAMES as f32;
                let t = ease_in_out(t);
                slide.from as f32 + (slot as f32 - slide.from as f32) * t
            }
            None => slot as f32,
        }
    }

    /// Fill color of the box at `slot`
    pub fn fill(&self, slot: usize, theme: &Theme) -> Color {
        let Some(view) = self.boxes.get(slot) else {
            return theme.box_fill;
        };

        if let Some(start) = self.solved_at {
            let t = if self.solved_instantly {
                1.0
            } else {
                self.frame.saturating_sub(start) as f32 / SUCCESS_FRAMES as f32
            };
            return blend(theme.box_fill, theme.box_success, t);
        }

        if let Some(start) = view.flash {
            let t = self.frame.saturating_sub(start) as f32 / ERROR_FRAMES as f32;
            return if t < 0.5 {
                blend(theme.box_fill, theme.box_error, t * 2.0)
            } else {
                blend(theme.box_error, theme.box_fill, (t - 0.5) * 2.0)
            };
        }

        if view.selected {
            theme.box_selected
        } else {
            theme.box_fill
        }
    }
}

impl Renderer for Board {
    fn highlighted(&mut self, position: usize) {
        if let Some(b) = self.boxes.get_mut(position) {
            b.selected = true;
            b.flash = None;
        }
    }

    fn swapped(&mut self, first: usize, second: usize, arrangement: &[u32]) {
        trace!(first, second, "animating swap");
        self.boxes.swap(first, second);
        let start = self.frame;
        for (slot, from) in [(first, second), (second, first)] {
            if let Some(b) = self.boxes.get_mut(slot) {
                b.selected = false;
                b.slide = Some(Slide { from, start });
            }
        }
        for (view, &value) in self.boxes.iter_mut().zip(arrangement) {
            view.value = value;
        }
    }

    fn mismatched(&mut self, first: usize, second: usize) {
        let start = self.frame;
        for slot in [first, second] {
            if let Some(b) = self.boxes.get_mut(slot) {
                b.selected = false;
                b.flash = Some(start);
            }
        }
    }

    fn solved(&mut self) {
        self.solved_at = Some(self.frame);
        self.solved_instantly = false;
        self.just_solved = true;
        for b in &mut self.boxes {
            b.selected = false;
        }
    }
}
