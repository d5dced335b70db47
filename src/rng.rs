//! Seedable xorshift128 generator.
//!
//! Seeding follows the game-engine convention: the seed becomes the first
//! state word and each following word is derived with the Mersenne Twister
//! initialisation multiplier. The same seed always yields the same sequence,
//! on every platform.

const INIT_MULTIPLIER: u32 = 1_812_433_253;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    pub fn init_state(seed: i32) -> Self {
        let x = seed as u32;
        let y = x.wrapping_mul(INIT_MULTIPLIER).wrapping_add(1);
        let z = y.wrapping_mul(INIT_MULTIPLIER).wrapping_add(1);
        let w = z.wrapping_mul(INIT_MULTIPLIER).wrapping_add(1);
        Xorshift128 { x, y, z, w }
    }

    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    /// Uniform float in `[0, 1)` built from the top 24 bits
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let drawn = min + (max - min) * self.next_f32();
        // float rounding can land exactly on max for wide ranges
        if drawn >= max && max > min {
            max - (max - min) * f32::EPSILON
        } else {
            drawn
        }
    }
}
