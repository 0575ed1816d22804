use std::path::PathBuf;

use clap::Parser;
use indicatif::ProgressBar;
use terrain::{Terrain, TerrainConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "terrain")]
#[command(about = "Generate a fault-plane terrain and export it as OBJ", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells along each axis
    #[arg(short, long)]
    div: Option<u32>,

    /// Number of fault passes
    #[arg(short = 'n', long)]
    iterations: Option<u32>,

    /// Height change per fault pass
    #[arg(long)]
    delta: Option<f64>,

    /// Seed for reproducible terrain
    #[arg(short, long)]
    seed: Option<u64>,

    /// Terrain rectangle in world units
    #[arg(long, num_args = 4, value_names = ["MIN_X", "MAX_X", "MIN_Y", "MAX_Y"], allow_negative_numbers = true)]
    bounds: Option<Vec<f64>>,

    /// Where to write the OBJ file
    #[arg(short, long, default_value = "terrain.obj")]
    output: PathBuf,
}

impl Cli {
    fn terrain_config(&self) -> terrain::Result<TerrainConfig> {
        let config = match &self.config {
            Some(path) => TerrainConfig::from_json_file(path)?,
            None => TerrainConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    /// Replace the fields of `config` that were given on the command line
    fn apply_overrides(&self, mut config: TerrainConfig) -> TerrainConfig {
        if let Some(div) = self.div {
            config.div = div;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(delta) = self.delta {
            config.delta = delta;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some([min_x, max_x, min_y, max_y]) = self.bounds.as_deref() {
            config.min_x = *min_x;
            config.max_x = *max_x;
            config.min_y = *min_y;
            config.max_y = *max_y;
        }
        config
    }
}

fn main() -> terrain::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.terrain_config()?;

    if config.delta * config.iterations as f64 == 0. {
        warn!("no height displacement configured, terrain will be flat");
    }

    // fault passes, with a progress bar
    let progress = ProgressBar::new(config.iterations as u64);
    let terrain =
        Terrain::generate_with_progress(&config, &mut config.fault_rng(), |_| progress.inc(1))?;
    progress.finish_and_clear();
    info!(edges = terrain.edges().len(), "built wireframe");

    // write the mesh to disk
    terrain.save_obj(&cli.output)?;
    info!("wrote {}", cli.output.display());

    Ok(())
}
