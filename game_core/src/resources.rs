/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt_ms: f32, // Elapsed time for this step, in milliseconds
}

impl Time {
    pub fn new(dt_ms: f32) -> Self {
        Self { dt_ms }
    }

    pub fn dt_secs(&self) -> f32 {
        self.dt_ms / 1000.0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt_ms: 16.0 }
    }
}

/// Running count of paddle hits; never decreases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceCounter(u32);

impl BounceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Whether the ball is still in play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Running,
    Ended,
}

impl Status {
    pub fn is_running(&self) -> bool {
        *self == Status::Running
    }
}

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn unit(&mut self) -> f32;
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
    fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub wall_bounce: bool,
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub ball_lost: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.left_paddle_hit = false;
        self.right_paddle_hit = false;
        self.ball_lost = false;
    }

    pub fn paddle_hit(&self) -> bool {
        self.left_paddle_hit || self.right_paddle_hit
    }
}
