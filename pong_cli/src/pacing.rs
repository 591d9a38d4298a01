use std::time::{Duration, Instant};

use game_core::Pacer;

/// Sleeps away whatever is left of each frame interval
pub struct FixedRate {
    interval: Duration,
    last: Instant,
}

impl FixedRate {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            last: Instant::now(),
        }
    }
}

impl Pacer for FixedRate {
    fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.interval {
            std::thread::sleep(self.interval - elapsed);
        }
        self.last = Instant::now();
    }
}
