use crossterm::style::Color;
use rand::prelude::SliceRandom;
use rand::Rng;

/// Confetti characters
pub const CONFETTI_CHARS: &[char] = &['*', '✦', '✧', '◆', '◇', '○', '●', '■', '□', '▲', '▽'];

/// How long the celebration lasts (~4 seconds at 30 FPS)
const DURATION_FRAMES: u32 = 120;

/// A single piece of confetti
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }
}

/// Generate a random bright color
fn random_bright_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..7) {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        5 => Color::Cyan,
        _ => Color::White,
    }
}

/// Falling confetti shown once the row is sorted
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    frame: u32,
    active: bool,
    width: u16,
    height: u16,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a celebration over a `width` x `height` screen
    pub fn start(&mut self, width: u16, height: u16) {
        self.particles.clear();
        self.frame = 0;
        self.active = true;
        self.width = width;
        self.height = height;
        self.burst(width as usize * 2);
    }

    pub fn stop(&mut self) {
        self.particles.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn burst(&mut self, count: usize) {
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.width.max(1) as f32),
                y: rng.gen_range(-(self.height.max(1) as f32)..0.0),
                vx: rng.gen_range(-0.3..0.3),
                vy: rng.gen_range(0.2..0.6),
                char: *CONFETTI_CHARS.choose(&mut rng).unwrap_or(&'*'),
                color: random_bright_color(),
                lifetime: rng.gen_range(60.0..DURATION_FRAMES as f32),
            });
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.frame += 1;

        let mut rng = rand::thread_rng();
        for p in &mut self.particles {
            p.x += p.vx + rng.gen_range(-0.1..0.1);
            p.y += p.vy;
            p.vy = (p.vy + 0.01).min(1.0);
            p.lifetime -= 1.0;
        }

        let (width, height) = (self.width, self.height);
        self.particles
            .retain(|p| p.lifetime > 0.0 && p.y < height as f32 && p.x > -1.0 && p.x < width as f32 + 1.0);

        if self.frame >= DURATION_FRAMES && self.particles.is_empty() {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_runs_out() {
        let mut confetti = Confetti::new();
        assert!(!confetti.is_active());

        confetti.start(40, 20);
        assert!(confetti.is_active());
        assert_eq!(confetti.particles().len(), 80);

        for _ in 0..DURATION_FRAMES * 2 {
            confetti.update();
        }
        assert!(!confetti.is_active());
        assert!(confetti.particles().is_empty());
    }

    #[test]
    fn test_stop_clears() {
        let mut confetti = Confetti::new();
        confetti.start(10, 10);
        confetti.stop();
        assert!(!confetti.is_active());
        assert!(confetti.particles().is_empty());
    }

    #[test]
    fn test_particle_visibility() {
        let p = Particle {
            x: 3.0,
            y: 2.0,
            vx: 0.0,
            vy: 0.0,
            char: '*',
            color: Color::Red,
            lifetime: 1.0,
        };
        assert!(p.is_visible(10, 10));
        assert!(!p.is_visible(3, 10));
    }
}
