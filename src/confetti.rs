//! Confetti particle field for the win celebration.
//!
//! Pure simulation in pixels and seconds; the overlay component owns the
//! canvas and the animation frames.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const COLORS: [&str; 8] = [
    "#f44336", "#e91e63", "#9c27b0", "#3f51b5", "#03a9f4", "#4caf50", "#ffeb3b", "#ff9800",
];
/// Downward acceleration, px/s².
const GRAVITY: f64 = 240.0;
const TERMINAL_VY: f64 = 320.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub angle: f64,
    pub spin: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

pub struct ConfettiField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ConfettiField {
    pub fn new(width: f64, height: f64, count: usize, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::with_capacity(count),
            rng: SmallRng::seed_from_u64(seed),
        };
        for _ in 0..count {
            // start spread over a band above the top edge so they rain in
            let y = field.rng.gen_range(-height.max(1.0)..0.0);
            let p = field.spawn(y);
            field.particles.push(p);
        }
        field
    }

    fn spawn(&mut self, y: f64) -> Particle {
        let rng = &mut self.rng;
        Particle {
            x: rng.gen_range(0.0..self.width.max(1.0)),
            y,
            vx: rng.gen_range(-60.0..60.0),
            vy: rng.gen_range(40.0..160.0),
            angle: rng.gen_range(0.0..std::f64::consts::TAU),
            spin: rng.gen_range(-6.0..6.0),
            width: rng.gen_range(6.0..12.0),
            height: rng.gen_range(4.0..8.0),
            color: COLORS[rng.gen_range(0..COLORS.len())],
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advances by `dt` seconds. Pieces that leave the bottom (or drift off
    /// the sides) are recycled at the top.
    pub fn step(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, 0.1);
        for i in 0..self.particles.len() {
            let out = {
                let p = &mut self.particles[i];
                p.vy = (p.vy + GRAVITY * dt).min(TERMINAL_VY);
                p.x += p.vx * dt;
                p.y += p.vy * dt;
                p.angle += p.spin * dt;
                p.y - p.height > self.height || p.x < -p.width || p.x > self.width + p.width
            };
            if out {
                let fresh = self.spawn(-12.0);
                self.particles[i] = fresh;
            }
        }
    }
}
