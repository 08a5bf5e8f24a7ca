//! Patterns command - list the predefined regex pattern keys.

use crate::cli::OutputFormat;
use crate::regexmatch::predef_keys;

/// Execute the patterns command
///
/// # Errors
///
/// Fails only on JSON serialization, which does not happen for a key
/// list.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let keys = predef_keys();

    match format {
        OutputFormat::Text => {
            println!("Predefined regex patterns ({}):", keys.len());
            for key in keys {
                println!("  {key}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        OutputFormat::Tsv => {
            println!("key");
            for key in keys {
                println!("{key}");
            }
        }
    }

    Ok(())
}
