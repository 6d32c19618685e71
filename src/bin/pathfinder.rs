use clap::Parser;
use pathfinder_agents::{
    environments::{Connectivity, GridRoom},
    search::{AgentConfig, AgentName, HeuristicName, SearchResult},
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Search a grid room for a path from its start to its target.
struct Cli {
    #[arg(help = "The grid file, one row per line using S, T, '.', '#' and '*'")]
    grid: PathBuf,
    #[arg(
        help = "TOML file with the agent configuration, takes precedence over \
        the agent flags below",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The agent to use",
        short = 'a',
        long = "agent",
        id = "AGENT",
        default_value_t = AgentName::AStar
    )]
    agent: AgentName,
    #[arg(
        value_enum,
        help = "The heuristic for greedy, A* and branch and bound",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::StraightLine
    )]
    heuristic: HeuristicName,
    #[arg(help = "Seed for the random walk", long = "seed", default_value_t = 0)]
    seed: u64,
    #[arg(
        help = "Initial cost bound for branch and bound",
        long = "bound",
        id = "BOUND",
        default_value_t = 100.
    )]
    initial_bound: f64,
    #[arg(help = "Stop after this many agent steps", long = "step-limit")]
    step_limit: Option<u64>,
    #[arg(
        help = "Stop after this much time, e.g. 30s or 2min",
        long = "time-limit",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(help = "Allow diagonal moves", short = 'd', long = "diagonal")]
    diagonal: bool,
    #[arg(help = "Write the path found to this file", short = 'o', long = "output")]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level, RUST_LOG overrides it",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            agent: self.agent,
            heuristic: self.heuristic,
            seed: self.seed,
            initial_bound: self.initial_bound,
            step_limit: self.step_limit,
            time_limit_secs: self.time_limit.map(|limit| limit.as_secs_f64()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &cli.config {
        Some(path) => AgentConfig::from_path(path),
        None => {
            let config = cli.agent_config();
            config.validate().map(|()| config)
        }
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let connectivity = if cli.diagonal {
        Connectivity::Eight
    } else {
        Connectivity::Four
    };
    let mut room = match GridRoom::from_path(&cli.grid) {
        Ok(room) => room.with_connectivity(connectivity),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(agent = ?config.agent, heuristic = ?config.heuristic, connectivity = ?connectivity);

    let result = config.agent.run(&mut room, &config);
    match result {
        SearchResult::Success(path) => {
            info!("path found");
            info!(path_length = path.num_edges(), path_cost = path.cost());

            println!("Path found:");
            println!("{}", path);
            println!("Path length: {}", path.num_edges());
            println!("Path cost: {:.3}", path.cost());

            if let Some(output) = &cli.output {
                let text = path
                    .iter()
                    .map(|position| format!("{}\n", position))
                    .collect::<String>();
                if let Err(e) = std::fs::write(output, text) {
                    error!("Failed to write path to {}: {}", output.display(), e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        _ => {
            info!("no path found");
            println!("No path found: {:?}", result);
            ExitCode::FAILURE
        }
    }
}
