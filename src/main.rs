use anyhow::Result;
use clap::Parser;
use ecosim_core::engine::SimStatus;
use ecosim_core::metrics::init_logging;
use ecosim_lib::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the initial population
    #[arg(short, long)]
    population: Option<usize>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the tick limit (0 runs until extinction)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Directory for statistics reports
    #[arg(long)]
    stats_dir: Option<String>,

    /// Skip the automatic statistics flush when the tick limit is reached
    #[arg(long)]
    no_flush: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config);
    if let Some(population) = args.population {
        config.world.initial_population = population;
    }
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.world.tick_limit = (ticks > 0).then_some(ticks);
    }
    if let Some(dir) = args.stats_dir {
        config.stats.output_dir = dir;
    }
    if args.no_flush {
        config.stats.flush_on_limit = false;
    }

    let mut app = App::new(config)?;
    app.play();
    tracing::info!(
        population = app.config.world.initial_population,
        seed = ?app.config.world.seed,
        tick_limit = ?app.config.world.tick_limit,
        "Running headless simulation"
    );

    let status = app.run_headless(None)?;
    if status == SimStatus::Extinct {
        app.save_statistics()?;
    }

    let metrics = app.engine.metrics();
    tracing::info!(
        status = ?status,
        ticks = app.engine.frame_count(),
        births = metrics.births,
        deaths = metrics.natural_deaths,
        predations = metrics.predations,
        "Simulation finished"
    );
    Ok(())
}
