//! Time-based box animations for the canvas UI

use crate::theme::{Color, Theme};
use bubble_core::Renderer;

/// Slide when two boxes trade places
pub const SWAP_MS: f64 = 1000.0;
/// Each half of the error flash
pub const FLASH_HALF_MS: f64 = 500.0;
/// Fade into the success color
pub const SUCCESS_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy)]
struct Slide {
    from: usize,
    start: f64,
}

#[derive(Debug, Clone)]
pub struct BoxSprite {
    pub value: u32,
    pub selected: bool,
    slide: Option<Slide>,
    flash: Option<f64>,
}

/// Visual state of the row, driven by puzzle notifications
#[derive(Debug, Clone, Default)]
pub struct BoxRow {
    sprites: Vec<BoxSprite>,
    /// Time (ms) stamped on incoming notifications
    now: f64,
    solved_at: Option<f64>,
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

impl BoxRow {
    pub fn new(arrangement: &[u32]) -> Self {
        Self {
            sprites: arrangement
                .iter()
                .map(|&value| BoxSprite {
                    value,
                    selected: false,
                    slide: None,
                    flash: None,
                })
                .collect(),
            now: 0.0,
            solved_at: None,
        }
    }

    pub fn sprites(&self) -> &[BoxSprite] {
        &self.sprites
    }

    /// Advance the animation clock, retiring finished animations
    pub fn set_time(&mut self, now: f64) {
        self.now = now;
        for s in &mut self.sprites {
            if matches!(s.slide, Some(slide) if now - slide.start >= SWAP_MS) {
                s.slide = None;
            }
            if matches!(s.flash, Some(start) if now - start >= 2.0 * FLASH_HALF_MS) {
                s.flash = None;
            }
        }
    }

    /// Show the row as sorted with no fade
    pub fn mark_solved(&mut self) {
        self.solved_at = Some(f64::NEG_INFINITY);
    }

    pub fn is_animating(&self) -> bool {
        let fading = matches!(self.solved_at, Some(start) if self.now - start < SUCCESS_MS);
        fading || self.sprites.iter().any(|s| s.slide.is_some() || s.flash.is_some())
    }

    /// Slot (possibly fractional) the box at `slot` is drawn at
    pub fn draw_slot(&self, slot: usize) -> f64 {
        match self.sprites.get(slot).and_then(|s| s.slide) {
            Some(slide) => {
                let t = ease_in_out((self.now - slide.start) / SWAP_MS);
                slide.from as f64 + (slot as f64 - slide.from as f64) * t
            }
            None => slot as f64,
        }
    }

    pub fn fill(&self, slot: usize, theme: &Theme) -> Color {
        let Some(sprite) = self.sprites.get(slot) else {
            return theme.box_fill;
        };
        if let Some(start) = self.solved_at {
            return theme.box_fill.lerp(theme.box_success, (self.now - start) / SUCCESS_MS);
        }
        if let Some(start) = sprite.flash {
            let elapsed = self.now - start;
            return if elapsed < FLASH_HALF_MS {
                theme.box_fill.lerp(theme.box_error, elapsed / FLASH_HALF_MS)
            } else {
                theme
                    .box_error
                    .lerp(theme.box_fill, (elapsed - FLASH_HALF_MS) / FLASH_HALF_MS)
            };
        }
        if sprite.selected {
            theme.box_selected
        } else {
            theme.box_fill
        }
    }
}

impl Renderer for BoxRow {
    fn highlighted(&mut self, position: usize) {
        if let Some(s) = self.sprites.get_mut(position) {
            s.selected = true;
            s.flash = None;
        }
    }

    fn swapped(&mut self, first: usize, second: usize, arrangement: &[u32]) {
        self.sprites.swap(first, second);
        let start = self.now;
        for (slot, from) in [(first, second), (second, first)] {
            if let Some(s) = self.sprites.get_mut(slot) {
                s.selected = false;
                s.slide = Some(Slide { from, start });
            }
        }
        for (sprite, &value) in self.sprites.iter_mut().zip(arrangement) {
            sprite.value = value;
        }
    }

    fn mismatched(&mut self, first: usize, second: usize) {
        let start = self.now;
        for slot in [first, second] {
            if let Some(s) = self.sprites.get_mut(slot) {
                s.selected = false;
                s.flash = Some(start);
            }
        }
    }

    fn solved(&mut self) {
        self.solved_at = Some(self.now);
        for s in &mut self.sprites {
            s.selected = false;
        }
    }
}
