use babyname_engine::{Metric, NameEngine, OutputFormat, RankMode, RankingOptions, Sex};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "babyname-engine")]
#[command(about = "Find baby names similar to the ones you like", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Birth year of the name dataset
    #[arg(short, long, default_value = "2020", global = true)]
    year: u32,

    /// Number of similar names to keep
    #[arg(short, long, default_value = "30", global = true)]
    top: usize,

    /// Directory holding yob<YEAR>.txt files
    #[arg(long, default_value = "Names", global = true)]
    data_dir: PathBuf,

    /// Directory the result file is written to
    #[arg(short, long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Result file format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank names against one name, with any metric
    Single {
        /// Name to find matches for
        query: String,

        /// F or M
        sex: Sex,

        /// Hamming, Levenshtein, Damerau-Levenshtein, Jaro or Jaro-Winkler
        #[arg(short, long, default_value = "Jaro-Winkler")]
        metric: Metric,
    },

    /// Rank names against several names by mean Jaro-Winkler
    Multi {
        /// F or M
        sex: Sex,

        /// Names to find matches for
        #[arg(required = true)]
        queries: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = RankingOptions {
        birth_year: cli.year,
        top_n: cli.top,
    };
    let engine = NameEngine::with_data_dir(cli.data_dir, options);

    let (sex, mode) = match cli.command {
        Commands::Single { query, sex, metric } => {
            println!("🔍 Ranking {} names from {} against: {}", sex, cli.year, query);
            (sex, RankMode::Single { query, metric })
        }
        Commands::Multi { sex, queries } => {
            println!("🔍 Ranking {} names from {} against: {}", sex, cli.year, queries.join(", "));
            (sex, RankMode::aggregate(queries))
        }
    };

    let report = engine.rank(sex, mode)?;
    let path = babyname_engine::report::write_report(&report, &cli.output_dir, cli.format)?;

    println!("\n✅ Top {} by {}:", report.result.len(), report.metric());
    for (i, scored) in report.result.records.iter().take(5).enumerate() {
        let score = scored
            .score(report.metric())
            .map(|s| s.to_string())
            .unwrap_or_default();
        println!("   {}. {} ({})", i + 1, scored.record.name, score);
    }
    println!("\n📄 Written to {}", path.display());

    Ok(())
}
