use hecs::World;
use learner::QLearner;
use proto::{Frame, QTableSnapshot, RunReport};

use crate::{
    create_ball, create_paddle, Ball, Config, Decision, GameRng, Paddle, Score, SimError,
    Time, WindowStats,
};

/// Receives a frame after every tick and may ask the run to stop
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> Result<(), SimError>;

    /// Polled between ticks; the current tick always completes first
    fn stop_requested(&self) -> bool {
        false
    }
}

/// Presenter that draws nothing and never stops the run
#[derive(Debug, Default)]
pub struct Headless;

impl Presenter for Headless {
    fn present(&mut self, _frame: &Frame) -> Result<(), SimError> {
        Ok(())
    }
}

/// Holds the loop to a target tick rate
pub trait Pacer {
    fn wait(&mut self);
}

/// Runs ticks back to back
#[derive(Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn wait(&mut self) {}
}

/// A complete learning Pong run: world, learner, scores and statistics
pub struct Simulation {
    world: World,
    time: Time,
    config: Config,
    learner: QLearner,
    score: Score,
    rng: GameRng,
    stats: WindowStats,
    last_decisions: Vec<Decision>,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;

        let learner = QLearner::new(config.num_buckets(), config.learner)?;
        let mut rng = GameRng::new(config.seed);
        let mut world = World::new();

        // Paddles
        let paddle_y = config.paddle_spawn_y();
        create_paddle(&mut world, &config, 0, paddle_y, config.paddle_speed_initial);
        create_paddle(&mut world, &config, 1, paddle_y, config.paddle_speed_initial);

        // Ball
        let ball = Ball::serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        tracing::info!(
            seed = config.seed,
            buckets = config.num_buckets(),
            control = ?config.paddle_control,
            "simulation ready"
        );

        Ok(Self {
            world,
            time: Time::new(),
            stats: WindowStats::new(config.stats_window),
            learner,
            score: Score::new(),
            rng,
            last_decisions: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn learner(&self) -> &QLearner {
        &self.learner
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Transitions fed to the learner on the last tick
    pub fn last_decisions(&self) -> &[Decision] {
        &self.last_decisions
    }

    pub fn window_averages(&self) -> &[f64] {
        self.stats.averages()
    }

    /// Q-table row for a paddle position
    pub fn discretize(&self, paddle_y: f32) -> usize {
        crate::discretize(paddle_y, &self.config)
    }

    pub fn paddle(&self, agent: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.agent == agent)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    /// One full tick: learning, physics, then statistics
    pub fn step(&mut self) -> Result<(), SimError> {
        self.last_decisions = crate::step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.learner,
            &mut self.score,
            &mut self.rng,
        )?;

        if let Some(average) = self.stats.record(&self.score) {
            tracing::debug!(tick = self.time.tick, average, "window average");
        }
        Ok(())
    }

    /// Current positions and scores for a presenter
    pub fn frame(&self) -> Frame {
        let spawn = self.config.paddle_spawn_y();
        let ball = self.ball().map(|b| b.pos).unwrap_or(self.config.ball_spawn());

        Frame {
            tick: self.time.tick,
            paddle_left_y: self.paddle(0).map_or(spawn, |p| p.y),
            paddle_right_y: self.paddle(1).map_or(spawn, |p| p.y),
            ball_x: ball.x,
            ball_y: ball.y,
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }

    /// Run until the tick budget is spent or the presenter asks to stop
    pub fn run(
        &mut self,
        presenter: &mut dyn Presenter,
        pacer: &mut dyn Pacer,
    ) -> Result<RunReport, SimError> {
        let budget = self.config.tick_budget;
        let mut stopped_early = false;

        tracing::info!(budget, "run started");

        while self.time.tick < budget {
            self.step()?;
            presenter.present(&self.frame())?;

            if presenter.stop_requested() {
                stopped_early = self.time.tick < budget;
                break;
            }
            pacer.wait();
        }

        let report = self.report(stopped_early);
        tracing::info!(
            ticks = report.ticks,
            left = report.score_left,
            right = report.score_right,
            windows = report.window_averages.len(),
            stopped_early,
            "run finished"
        );
        Ok(report)
    }

    pub fn report(&self, stopped_early: bool) -> RunReport {
        RunReport {
            ticks: self.time.tick,
            score_left: self.score.left,
            score_right: self.score.right,
            window_averages: self.stats.averages().to_vec(),
            stopped_early,
        }
    }

    pub fn q_table_snapshot(&self) -> QTableSnapshot {
        QTableSnapshot {
            bucket_size: self.config.bucket_size,
            rows: self.learner.table().to_vec(),
        }
    }
}
