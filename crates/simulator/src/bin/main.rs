//! Travel-problem simulator CLI
//!
//! Runs the meeting, chase, round-trip and circular scenarios headlessly and
//! asks the math tutor about them.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use travelsim_simulator::{FrameConfig, Simulator, SimulatorConfig};
use travelsim_tutor::{GeminiBackend, Tutor, TutorContext};
use travelsim_types::{ControlRanges, ScenarioPolicy};

#[derive(Parser)]
#[command(name = "travelsim")]
#[command(about = "Meeting and chase problem simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario against a synthetic frame timeline
    Run {
        #[command(flatten)]
        simulation: SimulationArgs,

        /// Simulated time to run (e.g., "30s", "2m")
        #[arg(short, long)]
        duration: Option<humantime::Duration>,

        /// Frames per second
        #[arg(long)]
        fps: Option<f64>,

        /// Seed for frame-interval jitter (enables jitter)
        #[arg(long)]
        jitter_seed: Option<u64>,

        /// Jitter as a fraction of the frame interval
        #[arg(long, default_value = "0.5")]
        jitter: f64,

        /// Stall before every n-th frame
        #[arg(long)]
        stall_every: Option<u64>,

        /// Length of each stall (e.g., "3s")
        #[arg(long, default_value = "3s")]
        stall: humantime::Duration,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the math tutor a question about a scenario
    Ask {
        /// The question
        question: String,

        #[command(flatten)]
        simulation: SimulationArgs,

        /// Simulated seconds elapsed when asking
        #[arg(long, default_value = "0")]
        at: f64,
    },
}

/// Scenario and slider values shared by every command.
#[derive(Args)]
struct SimulationArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scenario (meet, chase, round-trip, circular)
    #[arg(short, long)]
    scenario: Option<ScenarioPolicy>,

    /// Track length in meters
    #[arg(long)]
    track_length: Option<f64>,

    /// Red runner speed in m/s
    #[arg(long)]
    red_speed: Option<f64>,

    /// Blue runner speed in m/s
    #[arg(long)]
    blue_speed: Option<f64>,

    /// Chase head start in meters
    #[arg(long)]
    gap: Option<f64>,

    /// Snap values into the interactive slider ranges
    #[arg(long)]
    snap: bool,
}

impl SimulationArgs {
    /// Load the config file, if any, and apply the flags on top.
    fn load(&self) -> Result<SimulatorConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::load(path)?,
            None => SimulatorConfig::default(),
        };

        if let Some(scenario) = self.scenario {
            config.scenario = scenario;
        }
        let simulation = &mut config.simulation;
        if let Some(track_length) = self.track_length {
            simulation.track_length = track_length;
        }
        if let Some(speed) = self.red_speed {
            simulation.red_speed = speed;
        }
        if let Some(speed) = self.blue_speed {
            simulation.blue_speed = speed;
        }
        if let Some(gap) = self.gap {
            simulation.initial_gap = gap;
        }
        if self.snap {
            config.simulation = ControlRanges::default().clamp(config.simulation);
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            simulation,
            duration,
            fps,
            jitter_seed,
            jitter,
            stall_every,
            stall,
            json,
        } => {
            let mut config = simulation.load()?;
            if let Some(duration) = duration {
                config = config.with_duration(*duration);
            }
            let mut frames: FrameConfig = config.frames;
            if let Some(fps) = fps {
                frames = frames.with_fps(fps);
            }
            if let Some(seed) = jitter_seed {
                frames = frames.with_jitter(seed, jitter);
            }
            if let Some(every) = stall_every {
                frames = frames.with_stalls(every, *stall);
            }
            config = config.with_frames(frames);

            let mut simulator = Simulator::new(config)?;
            let report = simulator.run();
            if json {
                println!("{}", report.to_json()?);
            } else {
                report.print();
            }
        }

        Commands::Ask {
            question,
            simulation,
            at,
        } => {
            let config = simulation.load()?;
            let context = TutorContext::new(config.scenario, config.simulation, at.max(0.0));
            let backend = GeminiBackend::from_env(&config.tutor)?;
            let mut tutor = Tutor::new(backend, config.tutor.clone());

            match tutor.ask(&question, &context).await {
                Some(reply) => println!("{}", reply),
                None => return Err("question is empty".into()),
            }
        }
    }

    Ok(())
}
