use crate::cli::{OutputFormat, SolveArgs};
use crate::harness::{failure_count, run_cases, CaseOutcome, NoopHooks, TracingHooks};
use crate::parsing::cases::parse_cases_file;
use crate::scoring::ScoringConfig;

/// Text output line for a test case that could not be scored
pub const FAILED_CASE_MARKER: &str = "-";

/// Execute the solve command
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or if any test case
/// failed. Results for the remaining cases are printed first.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: SolveArgs,
    format: OutputFormat,
    config: ScoringConfig,
    verbose: bool,
) -> anyhow::Result<()> {
    let cases = parse_cases_file(&args.input)?;

    if verbose {
        eprintln!(
            "Read {} test cases from {} ({:?} segmentation)",
            cases.len(),
            args.input.display(),
            config.segmentation,
        );
    }

    let outcomes = if verbose {
        run_cases(&cases, config, &mut TracingHooks)
    } else {
        run_cases(&cases, config, &mut NoopHooks)
    };

    match format {
        OutputFormat::Text => print_text_results(&outcomes),
        OutputFormat::Json => print_json_results(&outcomes)?,
        OutputFormat::Tsv => print_tsv_results(&outcomes),
    }

    let failed = failure_count(&outcomes);
    if failed > 0 {
        anyhow::bail!("{failed} of {} test cases failed", outcomes.len());
    }

    Ok(())
}

/// One line per case; a failed case prints `-` so line N stays case N
fn print_text_results(outcomes: &[CaseOutcome]) {
    for outcome in outcomes {
        match outcome.best() {
            Some(best) => println!("{best}"),
            None => println!("{FAILED_CASE_MARKER}"),
        }
    }
}

fn print_json_results(outcomes: &[CaseOutcome]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(evaluation) => serde_json::json!({
                "case": outcome.case_num,
                "best": evaluation.best,
                "evaluation": evaluation,
            }),
            Err(e) => serde_json::json!({
                "case": outcome.case_num,
                "error": e.to_string(),
            }),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(outcomes: &[CaseOutcome]) {
    println!("case\tlength\tbase\ttrailing\textension\tblocks\tbest\tscenario\terror");

    let optional =
        |value: Option<usize>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    for outcome in outcomes {
        match &outcome.result {
            Ok(e) => println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:?}\t-",
                outcome.case_num,
                e.length,
                e.base,
                optional(e.trailing),
                optional(e.extension),
                e.blocks.len(),
                e.best,
                e.scenario,
            ),
            Err(err) => println!("{}\t-\t-\t-\t-\t-\t-\t-\t{err}", outcome.case_num),
        }
    }
}
