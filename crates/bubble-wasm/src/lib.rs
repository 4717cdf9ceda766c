//! WebAssembly bubble sort swap puzzle
//!
//! A canvas front end for `bubble-core`: the page forwards clicks and key
//! presses, and calls `tick` from `requestAnimationFrame`.

use bubble_core::{PuzzleConfig, PuzzleError, RandomShuffler};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};

mod animations;
mod game;
mod render;
mod theme;

#[cfg(test)]
mod tests;

pub use game::{GameState, PerformanceClock, StatusSnapshot};
pub use render::CanvasLayout;
pub use theme::Theme;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(e: PuzzleError) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    JsValue::from_str(&e.to_string())
}

fn new_state(size: i32) -> Result<GameState, JsValue> {
    let config = PuzzleConfig::from_raw_size(size as i64).map_err(js_error)?;
    GameState::new(config, &mut RandomShuffler::new(), PerformanceClock).map_err(js_error)
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct BubbleSortGame {
    state: GameState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl BubbleSortGame {
    /// Create a new game with `size` boxes attached to a canvas element
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, size: i32) -> Result<BubbleSortGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut game = BubbleSortGame {
            state: new_state(size)?,
            canvas,
            ctx,
            theme: Theme::light(),
            width: 0,
            height: 0,
            dpr: 1.0,
        };

        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w as u32)
            .unwrap_or(800);
        game.resize(width, 240);
        Ok(game)
    }

    /// Handle a click at canvas coordinates (CSS pixels); returns whether a box was hit
    #[wasm_bindgen]
    pub fn handle_click(&mut self, x: f64, y: f64) -> bool {
        let layout = CanvasLayout::compute(self.width as f64, self.height as f64, self.state.len());
        let hit = layout.hit_test(x, y);
        if let Some(position) = hit {
            self.state.select_box(position);
            self.render();
        }
        hit.is_some()
    }

    /// Handle keyboard input; returns whether the key was used
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        let handled = self.state.handle_key(&event.key());
        self.render();
        handled
    }

    /// Select a box by position
    #[wasm_bindgen]
    pub fn select_box(&mut self, position: usize) {
        self.state.select_box(position);
        self.render();
    }

    /// Update game state (call from requestAnimationFrame)
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.state.tick();
        self.render();
    }

    /// Whether the page should keep requesting frames
    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Start a new game with `size` boxes
    #[wasm_bindgen]
    pub fn new_game(&mut self, size: i32) -> Result<(), JsValue> {
        self.state = new_state(size)?;
        self.render();
        Ok(())
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = Theme::by_name(theme_name);
        self.render();
    }

    #[wasm_bindgen]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    #[wasm_bindgen]
    pub fn remaining_swaps(&self) -> usize {
        self.state.remaining_swaps()
    }

    #[wasm_bindgen]
    pub fn swaps_made(&self) -> usize {
        self.state.swaps_made()
    }

    #[wasm_bindgen]
    pub fn mistakes(&self) -> usize {
        self.state.mistakes()
    }

    /// Current row, left to right
    #[wasm_bindgen]
    pub fn arrangement(&self) -> Vec<u32> {
        self.state.arrangement().to_vec()
    }

    /// Current status as a plain JS object
    #[wasm_bindgen]
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.status()).map_err(JsValue::from)
    }

    /// Notifications since the last call, as a JSON array. Only the newest
    /// `MAX_PENDING_EVENTS` are kept between calls.
    #[wasm_bindgen]
    pub fn take_events_json(&mut self) -> String {
        serde_json::to_string(&self.state.take_events()).unwrap_or_default()
    }

    /// Resize the game canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(320);
        let height = height.max(200);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr for crisp rendering)
        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        self.render();
    }

    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    fn render(&self) {
        render::render_game(
            &self.ctx,
            &self.state,
            &self.theme,
            self.width as f64,
            self.height as f64,
        );
    }
}
