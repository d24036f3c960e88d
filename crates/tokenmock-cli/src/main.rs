//! Tokenmock CLI
//!
//! Prints synthetic token market data as JSON, framed by banner lines.
//! Run without arguments for five tokens with six chart points each.

use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tokenmock_core::config::defaults::{DEFAULT_CHART_POINTS, DEFAULT_TOKEN_COUNT};
use tokenmock_core::{generate_tokens, report, GeneratorConfig};
use tracing_subscriber::EnvFilter;

/// Tokenmock - synthetic token market metrics for dashboards
#[derive(Parser, Debug)]
#[command(name = "tokenmock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of tokens to generate
    #[arg(short, long, default_value_t = DEFAULT_TOKEN_COUNT)]
    count: usize,

    /// Points in each token's chart history
    #[arg(short = 'p', long, default_value_t = DEFAULT_CHART_POINTS)]
    chart_points: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print only the JSON array, without banners
    #[arg(long)]
    raw: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_token_count(self.count)
            .with_chart_points(self.chart_points)
            .with_seed(self.seed)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> tokenmock_core::Result<()> {
    let started_at = Local::now();
    let config = args.config();

    tracing::info!(
        "Generating {} tokens with {} chart points (seed: {:?})",
        config.token_count,
        config.chart_points,
        config.seed
    );

    let tokens = generate_tokens(&config)?;

    let output = if args.raw {
        format!("{}\n", report::render(&tokens)?)
    } else {
        report::render_report(&tokens, &started_at)?
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    tracing::info!("Wrote {} tokens", tokens.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_args_defaults() {
        let args = Args::try_parse_from(["tokenmock"]).unwrap();
        assert_eq!(args.config(), GeneratorConfig::default());
        assert!(!args.raw);
    }

    #[test]
    fn test_flags_map_to_config() {
        let args =
            Args::try_parse_from(["tokenmock", "-c", "2", "--chart-points", "4", "--seed", "9"])
                .unwrap();
        let config = args.config();
        assert_eq!(config.token_count, 2);
        assert_eq!(config.chart_points, 4);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(Args::try_parse_from(["tokenmock", "--count", "-3"]).is_err());
    }

    #[test]
    fn test_zero_chart_points_fails_run() {
        let args = Args::try_parse_from(["tokenmock", "--chart-points", "0"]).unwrap();
        assert!(run(&args).is_err());
    }
}
