/// Ticks completed so far
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Agent 1
    pub right: u32, // Agent 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator shared by the learner and the physics draws
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Rolling score sums, flushed into an average every `window` ticks
#[derive(Debug, Clone)]
pub struct WindowStats {
    window: u32,
    ticks: u32,
    sum_left: u64,
    sum_right: u64,
    averages: Vec<f64>,
}

impl WindowStats {
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            ticks: 0,
            sum_left: 0,
            sum_right: 0,
            averages: Vec::new(),
        }
    }

    /// Add this tick's scores. Returns the new average when a window closes.
    pub fn record(&mut self, score: &Score) -> Option<f64> {
        self.sum_left += u64::from(score.left);
        self.sum_right += u64::from(score.right);
        self.ticks += 1;

        if self.ticks < self.window {
            return None;
        }

        let average = (self.sum_left + self.sum_right) as f64 / (2.0 * f64::from(self.window));
        self.averages.push(average);
        self.ticks = 0;
        self.sum_left = 0;
        self.sum_right = 0;
        Some(average)
    }

    pub fn averages(&self) -> &[f64] {
        &self.averages
    }
}
