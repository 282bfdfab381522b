//! Score command - evaluate one test case given on the command line.
//!
//! Useful for inspecting how a single answer is reached: the free blocks, the
//! base agreement and the best candidate from each scenario are all reported.

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::case::{Override, TestCase};
use crate::core::sequence::Alignment;
use crate::scoring::{Evaluation, ScoringConfig, ShiftScorer};
use crate::utils::validation::{check_sequence_length, is_valid_symbol, parse_symbol};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Reference sequence, one character per position
    #[arg(short, long, required = true)]
    pub reference: String,

    /// Known target position as POSITION:SYMBOL (1-based), may be repeated
    #[arg(short = 's', long = "set", value_parser = parse_override_arg)]
    pub overrides: Vec<Override>,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the reference is invalid or an override position is out
/// of range.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: ScoreArgs,
    format: OutputFormat,
    config: ScoringConfig,
    verbose: bool,
) -> anyhow::Result<()> {
    let reference = args.reference.as_bytes();
    if let Some(msg) = check_sequence_length(reference.len()) {
        anyhow::bail!(msg);
    }
    if let Some(bad) = reference.iter().find(|&&b| !is_valid_symbol(b)) {
        anyhow::bail!("Invalid reference symbol byte 0x{bad:02x}");
    }

    let case = TestCase::new(reference.to_vec(), args.overrides);
    let alignment = Alignment::from_case(&case)?;

    if verbose {
        eprintln!(
            "Target: {} of {} positions known",
            alignment.target().known_count(),
            alignment.len(),
        );
    }

    let evaluation = ShiftScorer::new(config).evaluate(&alignment);

    match format {
        OutputFormat::Text => print_text_result(&alignment, &evaluation),
        OutputFormat::Json => print_json_result(&alignment, &evaluation)?,
        OutputFormat::Tsv => print_tsv_result(&evaluation),
    }

    Ok(())
}

/// Parse a `POSITION:SYMBOL` override argument
fn parse_override_arg(s: &str) -> Result<Override, String> {
    let (position, symbol) = s
        .split_once(':')
        .ok_or_else(|| format!("expected POSITION:SYMBOL, got '{s}'"))?;

    let position: usize = position
        .trim()
        .parse()
        .map_err(|_| format!("invalid position '{position}'"))?;
    let symbol = parse_symbol(symbol)
        .ok_or_else(|| format!("symbol must be one character, got '{symbol}'"))?;

    Ok(Override::new(position, symbol))
}

fn print_text_result(alignment: &Alignment, evaluation: &Evaluation) {
    println!("Shift Score");
    println!("{}", "=".repeat(60));

    println!(
        "\nReference: {}",
        String::from_utf8_lossy(alignment.reference())
    );
    println!("Target:    {}", alignment.target());

    println!("\nFree blocks: {}", evaluation.blocks.len());
    for block in &evaluation.blocks {
        println!(
            "  [{}, {}) length {}",
            block.start,
            block.end(),
            block.length
        );
    }

    println!("\nBase agreement: {}", evaluation.base);
    match evaluation.trailing {
        Some(v) => println!("Trailing run:   {v}"),
        None => println!("Trailing run:   n/a"),
    }
    match evaluation.extension {
        Some(v) => println!("Extension:      {v}"),
        None => println!("Extension:      n/a"),
    }
    println!(
        "\nBest: {} of {} ({:?})",
        evaluation.best, evaluation.length, evaluation.scenario
    );
}

fn print_json_result(alignment: &Alignment, evaluation: &Evaluation) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "reference": String::from_utf8_lossy(alignment.reference()),
        "target": alignment.target().to_string(),
        "evaluation": evaluation,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(evaluation: &Evaluation) {
    println!("length\tbase\ttrailing\textension\tblocks\tbest\tscenario");

    let optional =
        |value: Option<usize>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{:?}",
        evaluation.length,
        evaluation.base,
        optional(evaluation.trailing),
        optional(evaluation.extension),
        evaluation.blocks.len(),
        evaluation.best,
        evaluation.scenario,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override_arg() {
        assert_eq!(parse_override_arg("3:c").unwrap(), Override::new(3, b'c'));
        assert_eq!(parse_override_arg("10::").unwrap(), Override::new(10, b':'));
        assert!(parse_override_arg("3c").is_err());
        assert!(parse_override_arg("x:c").is_err());
        assert!(parse_override_arg("3:cd").is_err());
    }
}
