//! Particle module - firework bursts spawned when the snake eats
//!
//! A [`Burst`] owns two fixed-capacity particle pools: bright sparks that fall
//! and fade quickly, and gray smoke that rises, grows and fades slowly. Bursts
//! are advanced once per render frame, so their real-time lifetime does not
//! depend on the gameplay tick rate.
//!
//! Pools are `ArrayVec`s sized to the spawn counts; advancing and pruning never
//! allocate.

use std::f32::consts::TAU;

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::*;

/// A single decorative particle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    /// Pixels, never negative.
    pub size: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Added to `vy` every frame (positive pulls down).
    pub gravity: f32,
}

impl Particle {
    fn launch<R: RandomSource + ?Sized>(
        rng: &mut R,
        origin: (f32, f32),
        speed: (f32, f32),
        size: (f32, f32),
        color: Rgb,
        alpha: f32,
        gravity: f32,
    ) -> Self {
        let angle = rng.next_f32() * TAU;
        let speed = rng.range_f32(speed.0, speed.1);
        Self {
            x: origin.0,
            y: origin.1,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            color,
            size: rng.range_f32(size.0, size.1),
            alpha,
            gravity,
        }
    }

    #[inline]
    fn integrate(&mut self) {
        self.vy += self.gravity;
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0 && self.size > 0.0
    }
}

/// One firework: sparks plus smoke trails.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    origin: (f32, f32),
    sparks: ArrayVec<Particle, SPARK_COUNT>,
    smoke: ArrayVec<Particle, SMOKE_COUNT>,
}

impl Burst {
    /// Spawn a full burst at a pixel-space origin.
    pub fn spawn<R: RandomSource + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let origin = (x, y);
        let mut sparks = ArrayVec::new();
        for _ in 0..SPARK_COUNT {
            let color = PALETTE[rng.next_below(PALETTE.len() as u32) as usize];
            sparks.push(Particle::launch(
                rng,
                origin,
                SPARK_SPEED,
                SPARK_SIZE,
                color,
                1.0,
                SPARK_GRAVITY,
            ));
        }

        let mut smoke = ArrayVec::new();
        for _ in 0..SMOKE_COUNT {
            smoke.push(Particle::launch(
                rng,
                origin,
                SMOKE_SPEED,
                SMOKE_SIZE,
                SMOKE_COLOR,
                SMOKE_ALPHA,
                SMOKE_GRAVITY,
            ));
        }

        Self {
            origin,
            sparks,
            smoke,
        }
    }

    /// Advance every particle by one frame and drop the dead ones.
    pub fn advance(&mut self) {
        for p in self.sparks.iter_mut() {
            p.integrate();
            p.alpha = (p.alpha - SPARK_ALPHA_STEP).max(0.0);
            p.size = (p.size - SPARK_SIZE_STEP).max(0.0);
        }
        for p in self.smoke.iter_mut() {
            p.integrate();
            p.alpha = (p.alpha - SMOKE_ALPHA_STEP).max(0.0);
            p.size = (p.size + SMOKE_SIZE_STEP).min(SMOKE_SIZE_MAX);
        }

        self.sparks.retain(|p| p.is_alive());
        self.smoke.retain(|p| p.is_alive());
    }

    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    pub fn sparks(&self) -> &[Particle] {
        &self.sparks
    }

    pub fn smoke(&self) -> &[Particle] {
        &self.smoke
    }

    pub fn particle_count(&self) -> usize {
        self.sparks.len() + self.smoke.len()
    }

    /// Both pools are empty.
    pub fn is_finished(&self) -> bool {
        self.sparks.is_empty() && self.smoke.is_empty()
    }
}

/// Owner of all active bursts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleEngine {
    bursts: Vec<Burst>,
}

impl ParticleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_burst<R: RandomSource + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) {
        self.bursts.push(Burst::spawn(x, y, rng));
    }

    /// Advance all bursts by one frame and prune finished ones.
    pub fn advance_frame(&mut self) {
        for burst in self.bursts.iter_mut() {
            burst.advance();
        }
        self.bursts.retain(|b| !b.is_finished());
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(Burst::particle_count).sum()
    }

    pub fn is_idle(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_spawn_counts_and_initial_values() {
        let mut rng = SimpleRng::new(1);
        let burst = Burst::spawn(100.0, 50.0, &mut rng);

        assert_eq!(burst.sparks().len(), SPARK_COUNT);
        assert_eq!(burst.smoke().len(), SMOKE_COUNT);
        assert_eq!(burst.origin(), (100.0, 50.0));

        for p in burst.sparks() {
            assert_eq!((p.x, p.y), (100.0, 50.0));
            assert_eq!(p.alpha, 1.0);
            assert_eq!(p.gravity, SPARK_GRAVITY);
            assert!(p.size >= SPARK_SIZE.0 && p.size <= SPARK_SIZE.1);
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!(speed >= SPARK_SPEED.0 - 1e-3 && speed <= SPARK_SPEED.1 + 1e-3);
            assert!(PALETTE.contains(&p.color));
        }
        for p in burst.smoke() {
            assert_eq!(p.color, SMOKE_COLOR);
            assert_eq!(p.alpha, SMOKE_ALPHA);
            assert!(p.gravity < 0.0);
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!(speed <= SMOKE_SPEED.1 + 1e-3);
        }
    }

    #[test]
    fn test_advance_applies_gravity_then_velocity() {
        let mut rng = SimpleRng::new(5);
        let mut burst = Burst::spawn(0.0, 0.0, &mut rng);
        let before = burst.sparks()[0];
        burst.advance();
        let after = burst.sparks()[0];

        let vy = before.vy + SPARK_GRAVITY;
        assert!((after.vy - vy).abs() < 1e-6);
        assert!((after.x - (before.x + before.vx)).abs() < 1e-6);
        assert!((after.y - (before.y + vy)).abs() < 1e-6);
        assert!((after.alpha - (1.0 - SPARK_ALPHA_STEP)).abs() < 1e-6);
        assert!((after.size - (before.size - SPARK_SIZE_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_smoke_grows_and_rises() {
        let mut rng = SimpleRng::new(9);
        let mut burst = Burst::spawn(0.0, 0.0, &mut rng);
        let before = burst.smoke()[0];
        burst.advance();
        let after = burst.smoke()[0];

        assert!(after.size > before.size);
        assert!(after.vy < before.vy);
        assert!(after.alpha < before.alpha);
    }

    #[test]
    fn test_smoke_size_is_capped() {
        let mut rng = SimpleRng::new(11);
        let mut burst = Burst::spawn(0.0, 0.0, &mut rng);
        for _ in 0..70 {
            burst.advance();
        }
        assert!(!burst.smoke().is_empty());
        for p in burst.smoke() {
            assert!(p.size <= SMOKE_SIZE_MAX);
        }
    }

    #[test]
    fn test_burst_finishes_in_bounded_frames() {
        let mut rng = SimpleRng::new(42);
        let mut engine = ParticleEngine::new();
        engine.spawn_burst(200.0, 200.0, &mut rng);
        assert_eq!(engine.particle_count(), SPARK_COUNT + SMOKE_COUNT);

        let mut frames = 0;
        while !engine.is_idle() {
            engine.advance_frame();
            frames += 1;
            assert!(frames <= 120, "burst still alive after {frames} frames");
        }
        assert_eq!(engine.particle_count(), 0);
    }

    #[test]
    fn test_sparks_die_before_smoke() {
        let mut rng = SimpleRng::new(8);
        let mut burst = Burst::spawn(0.0, 0.0, &mut rng);
        for _ in 0..60 {
            burst.advance();
        }
        assert!(burst.sparks().is_empty());
        assert!(!burst.smoke().is_empty());
        assert!(!burst.is_finished());
    }

    #[test]
    fn test_alpha_and_size_never_negative() {
        let mut rng = SimpleRng::new(77);
        let mut burst = Burst::spawn(0.0, 0.0, &mut rng);
        while !burst.is_finished() {
            burst.advance();
            for p in burst.sparks().iter().chain(burst.smoke()) {
                assert!(p.alpha >= 0.0 && p.alpha <= 1.0);
                assert!(p.size >= 0.0);
            }
        }
    }

    #[test]
    fn test_engine_prunes_only_finished_bursts() {
        let mut rng = SimpleRng::new(3);
        let mut engine = ParticleEngine::new();
        engine.spawn_burst(0.0, 0.0, &mut rng);
        for _ in 0..60 {
            engine.advance_frame();
        }
        engine.spawn_burst(10.0, 10.0, &mut rng);
        assert_eq!(engine.bursts().len(), 2);

        for _ in 0..40 {
            engine.advance_frame();
        }
        // First burst is gone, the second still has smoke.
        assert_eq!(engine.bursts().len(), 1);
        assert_eq!(engine.bursts()[0].origin(), (10.0, 10.0));

        engine.clear();
        assert!(engine.is_idle());
    }
}
