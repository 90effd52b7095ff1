use route_planner::network::RoadNetwork;
use route_planner::planner::{plan_routes, PlannerConfig};
use route_planner::traffic::DEFAULT_VARIATION;

use std::path::PathBuf;
use clap::Parser;
use flexi_logger::Logger;
use rand::{SeedableRng, rngs::StdRng};


/// Smart Route Planner: Dijkstra vs A*
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// Road network document (cities and roads)
    #[clap(short, long, default_value = "data/graph_data.json")]
    data: PathBuf,

    /// Start city
    #[clap(short, long, default_value = "Delhi")]
    start: String,

    /// Destination city
    #[clap(short, long, default_value = "Varanasi")]
    goal: String,

    /// Randomly update traffic delays before route calculation
    #[clap(long)]
    simulate_traffic: bool,

    /// Spread of the traffic factor around 1.0
    #[clap(long, default_value_t = DEFAULT_VARIATION)]
    variation: f64,

    /// Seed for reproducible traffic simulation
    #[clap(long)]
    seed: Option<u64>,

    /// Print the comparison as JSON
    #[clap(long)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[clap(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let mut network = RoadNetwork::load(&cli.data)?;
    let config = PlannerConfig {
        start: cli.start,
        goal: cli.goal,
        simulate_traffic: cli.simulate_traffic,
        variation: cli.variation,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let comparison = plan_routes(&mut network, &config, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{comparison}");
    }

    Ok(())
}
