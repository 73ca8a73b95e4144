//! Seedable xorshift64 generator. The browser seeds it from `Math.random`,
//! tests seed it with a constant.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Seed from the JS global RNG. Only callable inside a browser.
    pub fn from_entropy() -> Self {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::new((hi << 32) | lo)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform integer in `[0, upper)`. `upper` of 0 yields 0.
    pub fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() % upper as u64) as usize
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn letter(&mut self) -> char {
        (b'A' + self.below(26) as u8) as char
    }

    /// Fisher-Yates.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}
