#![forbid(unsafe_code)]

mod pacing;
mod terminal;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{
    Config, Headless, LearnerConfig, NoPacing, Pacer, PaddleControl, Params, Presenter,
    RunReport, Simulation,
};

use crate::pacing::FixedRate;
use crate::terminal::TerminalPresenter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Control {
    /// Paddles move by a random draw; actions are only learned from
    Random,
    /// The learner's action moves the paddle
    Policy,
}

#[derive(Parser, Debug)]
#[command(name = "pong_cli", about = "Two Q-learning agents playing Pong")]
struct Args {
    // ---------------- run ----------------
    /// Ticks to simulate
    #[arg(long, default_value_t = Params::TICK_BUDGET)]
    ticks: u64,

    /// RNG seed for serve direction, exploration and paddle draws
    #[arg(long, default_value_t = Params::SEED)]
    seed: u64,

    /// Ticks per statistics window
    #[arg(long, default_value_t = Params::STATS_WINDOW)]
    window: u32,

    // ---------------- learning ----------------
    /// Learning rate
    #[arg(long, default_value_t = LearnerConfig::ALPHA)]
    alpha: f64,

    /// Discount factor
    #[arg(long, default_value_t = LearnerConfig::GAMMA)]
    gamma: f64,

    /// Exploration probability
    #[arg(long, default_value_t = LearnerConfig::EPSILON)]
    epsilon: f64,

    /// Constant reward fed to every update
    #[arg(long, default_value_t = Params::REWARD)]
    reward: f64,

    /// What drives paddle motion
    #[arg(long, value_enum, default_value_t = Control::Random)]
    control: Control,

    // ---------------- presentation ----------------
    /// Draw the arena in the terminal (press Enter to stop)
    #[arg(long)]
    render: bool,

    /// Target ticks per second; 0 runs unpaced. Defaults to the tick rate when rendering.
    #[arg(long)]
    fps: Option<u32>,

    // ---------------- output ----------------
    /// Print every window average, one per line
    #[arg(long)]
    print_windows: bool,

    /// Write the run report as postcard bytes
    #[arg(long, value_name = "PATH")]
    report_out: Option<PathBuf>,

    /// Write the final Q-table as postcard bytes
    #[arg(long, value_name = "PATH")]
    q_table_out: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            tick_budget: self.ticks,
            seed: self.seed,
            stats_window: self.window,
            reward: self.reward,
            paddle_control: match self.control {
                Control::Random => PaddleControl::RandomDraw,
                Control::Policy => PaddleControl::Policy,
            },
            learner: LearnerConfig::new(self.alpha, self.gamma, self.epsilon),
            ..Config::new()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();
    let tick_rate = config.tick_rate;

    let mut sim = Simulation::new(config).context("failed to set up simulation")?;

    let mut presenter: Box<dyn Presenter> = if args.render {
        Box::new(TerminalPresenter::new(sim.config()).context("failed to open terminal")?)
    } else {
        Box::new(Headless)
    };

    let fps = args.fps.unwrap_or(if args.render { tick_rate } else { 0 });
    let mut pacer: Box<dyn Pacer> = if fps > 0 {
        Box::new(FixedRate::new(fps))
    } else {
        Box::new(NoPacing)
    };

    let report = sim.run(&mut *presenter, &mut *pacer);
    // Restore the terminal before printing anything
    drop(presenter);
    let report = report.context("simulation aborted")?;

    print_report(&report, args.print_windows);

    if let Some(path) = &args.report_out {
        let bytes = report.to_bytes().context("failed to encode run report")?;
        fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote run report");
    }

    if let Some(path) = &args.q_table_out {
        let bytes = sim
            .q_table_snapshot()
            .to_bytes()
            .context("failed to encode Q-table")?;
        fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote Q-table");
    }

    Ok(())
}

fn print_report(report: &RunReport, print_windows: bool) {
    if print_windows {
        for (i, average) in report.window_averages.iter().enumerate() {
            println!("{i}\t{average:.3}");
        }
    }

    let last = report.window_averages.last().copied().unwrap_or(0.0);
    println!(
        "DONE: ticks={} windows={} overall_avg={:.3} last_window_avg={:.3} stopped_early={}",
        report.ticks,
        report.window_averages.len(),
        report.overall_average().unwrap_or(0.0),
        last,
        report.stopped_early,
    );
    println!(
        "Final Scores - Agent 1: {}, Agent 2: {}",
        report.score_left, report.score_right
    );
}
