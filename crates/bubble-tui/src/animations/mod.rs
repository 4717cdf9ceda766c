pub mod confetti;

pub use confetti::Confetti;

use crossterm::style::Color;

/// Frames per second the animations are tuned for
pub const FPS: u32 = 30;

/// Mix `from` towards `to`; `t` runs from 0.0 (all `from`) to 1.0 (all `to`).
///
/// Named colors have no channels to mix, so they switch over halfway.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb { r: r1, g: g1, b: b1 }, Color::Rgb { r: r2, g: g2, b: b2 }) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb {
                r: mix(r1, r2),
                g: mix(g1, g2),
                b: mix(b1, b2),
            }
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Smooth 0..1 easing for slides
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
