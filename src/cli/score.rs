//! Score command - compare two phrases directly with a ratio function.
//!
//! This command scores a pair of strings without registering any
//! patterns. Useful for picking a ratio function and threshold before
//! building a pattern file.

use clap::Args;

use crate::cli::OutputFormat;
use crate::similarity::{FuzzyFunc, ScorerRegistry};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// First phrase
    #[arg(required = true)]
    pub query: String,

    /// Second phrase
    #[arg(required = true)]
    pub other: String,

    /// Ratio function to use
    #[arg(long, default_value = "simple")]
    pub func: FuzzyFunc,

    /// Compare case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error for an unknown ratio function name.
pub fn run(args: ScoreArgs, format: OutputFormat) -> anyhow::Result<()> {
    let scorer = ScorerRegistry::new().resolve(&args.func)?;

    let ratio = if args.case_sensitive {
        scorer(&args.query, &args.other)
    } else {
        scorer(&args.query.to_lowercase(), &args.other.to_lowercase())
    };

    match format {
        OutputFormat::Text => {
            println!("{} ~ {} = {ratio}", args.query, args.other);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": args.query,
                "other": args.other,
                "func": args.func.name(),
                "ratio": ratio,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("query\tother\tfunc\tratio");
            println!("{}\t{}\t{}\t{ratio}", args.query, args.other, args.func.name());
        }
    }

    Ok(())
}
