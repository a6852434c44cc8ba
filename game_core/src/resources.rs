use std::collections::VecDeque;

/// Source of the coin flips used when the ball is (re)launched
pub trait RandomSource {
    /// Fair coin flip
    fn coin_flip(&mut self) -> bool;

    /// `1.0` or `-1.0` with equal probability
    fn sign(&mut self) -> f32 {
        if self.coin_flip() {
            1.0
        } else {
            -1.0
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, then keeps answering `true`
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    flips: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(true)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_left_paddle: bool,
    pub ball_hit_right_paddle: bool,
    pub ball_relaunched: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_left_paddle = false;
        self.ball_hit_right_paddle = false;
        self.ball_relaunched = false;
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.ball_hit_left_paddle || self.ball_hit_right_paddle
    }
}

/// Latest pointer position over the field, surface-relative.
///
/// Single slot: every write replaces the previous one and the step that
/// applies it empties the slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTarget {
    y: Option<f32>,
}

impl PointerTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, y: f32) {
        self.y = Some(y);
    }

    pub fn peek(&self) -> Option<f32> {
        self.y
    }

    pub fn take(&mut self) -> Option<f32> {
        self.y.take()
    }
}
