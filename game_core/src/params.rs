/// Default tuning for the learning Pong environment.
///
/// Distances are pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_INSET: f32 = 50.0; // Gap between side wall and paddle
    pub const PADDLE_SPEED: f32 = 5.0; // Magnitude of each random draw
    pub const PADDLE_SPEED_INITIAL: f32 = 3.0; // Speed assumed before the first draw

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 3.0; // Per axis

    // Learning
    pub const BUCKET_SIZE: f32 = 10.0;
    pub const REWARD: f64 = 0.0;

    // Run
    pub const TICK_RATE: u32 = 60;
    pub const TICK_BUDGET: u64 = 20_000;
    pub const STATS_WINDOW: u32 = 10;
    pub const SEED: u64 = 12345;
}
