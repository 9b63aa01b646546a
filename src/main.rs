use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uisim::pipeline::{self, PipelineConfig, PipelineReport};

/// Find similar UI components across repositories
#[derive(Parser, Debug)]
#[command(name = "uisim")]
#[command(about = "Approximate nearest neighbour search over UI components", long_about = None)]
struct Args {
    /// JSON file with the component records
    #[arg(short, long)]
    corpus: PathBuf,

    /// JSON pipeline config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Share of the corpus used for indexing
    #[arg(long)]
    train_ratio: Option<f64>,

    /// Seed for the split and pivot selection
    #[arg(long)]
    seed: Option<u64>,

    /// Number of pivots
    #[arg(long)]
    pivots: Option<usize>,

    /// Permutation prefix length compared at query time
    #[arg(short, long)]
    k: Option<usize>,

    /// Neighbours returned per query
    #[arg(long)]
    top_n: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(train_ratio) = self.train_ratio {
            config.train_ratio = train_ratio;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(pivots) = self.pivots {
            config.pivot_count = pivots;
        }
        if let Some(k) = self.k {
            config.k = k;
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        config.validate()?;
        Ok(config)
    }
}

fn print_report(report: &PipelineReport) {
    println!(
        "train={} query={} pivots={}",
        report.train_size,
        report.query_size,
        report.pivot_ids.len()
    );
    for result in &report.results {
        println!("{}", result.query_id);
        for neighbor in &result.neighbors {
            println!("  {:.3}  {}", neighbor.score, neighbor.id);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting uisim v{}", env!("CARGO_PKG_VERSION"));

    let config = args.pipeline_config()?;
    info!(
        train_ratio = config.train_ratio,
        seed = config.seed,
        pivots = config.pivot_count,
        k = config.k,
        top_n = config.top_n,
        "Pipeline config"
    );

    let corpus = pipeline::load_records(&args.corpus)?;
    let report = pipeline::run(&corpus, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    info!("Done");
    Ok(())
}
