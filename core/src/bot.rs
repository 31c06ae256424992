//! Scripted players that stand in for a human behind the XR controller.
//!
//! A bot produces the raw input samples the core expects (thumbstick aim
//! axis values in [-1, 1], trigger pulls in [0, 1]) from a seeded RNG so
//! demo runs and tests are reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Bot personality affects aim spread and trigger strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotPersonality {
    /// Aims near the center and pulls hard (axis within ±0.15, trigger 0.7-1.0)
    Accurate,
    /// Anywhere on the stick, any strength
    Wild,
    /// Careful aim, gentle pulls (trigger 0.2-0.5)
    Gentle,
}

impl BotPersonality {
    /// Aim axis range for this personality (min, max)
    fn aim_range(&self) -> (f64, f64) {
        match self {
            BotPersonality::Accurate => (-0.15, 0.15),
            BotPersonality::Wild => (-1.0, 1.0),
            BotPersonality::Gentle => (-0.3, 0.3),
        }
    }

    /// Trigger pull range for this personality (min, max)
    fn trigger_range(&self) -> (f64, f64) {
        match self {
            BotPersonality::Accurate => (0.7, 1.0),
            BotPersonality::Wild => (0.0, 1.0),
            BotPersonality::Gentle => (0.2, 0.5),
        }
    }

    /// Select a random personality
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => BotPersonality::Accurate,
            1 => BotPersonality::Wild,
            _ => BotPersonality::Gentle,
        }
    }
}

/// A scripted player feeding the command channel
#[derive(Debug)]
pub struct BotPlayer {
    pub personality: BotPersonality,
    rng: ChaCha8Rng,
}

impl BotPlayer {
    pub fn new(personality: BotPersonality, seed: u64) -> Self {
        Self {
            personality,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next thumbstick aim sample, x in [-1, 1]
    pub fn next_aim(&mut self) -> f64 {
        let (min, max) = self.personality.aim_range();
        self.rng.gen_range(min..=max)
    }

    /// Next trigger pull in [0, 1]
    pub fn next_trigger(&mut self) -> f64 {
        let (min, max) = self.personality.trigger_range();
        self.rng.gen_range(min..=max)
    }
}
