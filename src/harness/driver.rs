use tracing::warn;

use crate::core::case::TestCase;
use crate::core::sequence::BuildError;
use crate::harness::hooks::CaseHooks;
use crate::scoring::{Evaluation, ScoringConfig, ShiftScorer};

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// 1-based position of the case in the input
    pub case_num: usize,

    pub result: Result<Evaluation, BuildError>,
}

impl CaseOutcome {
    /// Final score, if the case could be scored
    #[must_use]
    pub fn best(&self) -> Option<usize> {
        self.result.as_ref().ok().map(|e| e.best)
    }
}

/// Run every case through `hooks` and a shared scorer.
///
/// A case that fails to build is recorded as a failed outcome; later cases
/// are scored as usual.
pub fn run_cases<H: CaseHooks>(
    cases: &[TestCase],
    config: ScoringConfig,
    hooks: &mut H,
) -> Vec<CaseOutcome> {
    let mut scorer = ShiftScorer::new(config);
    let mut outcomes = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        let case_num = i + 1;

        hooks.ready(case_num, case);
        hooks.preprocess(case_num, case);

        let result = scorer.evaluate_case(case);
        match &result {
            Ok(evaluation) => hooks.process(case_num, evaluation),
            Err(e) => warn!(case = case_num, error = %e, "Skipping test case"),
        }

        let outcome = CaseOutcome { case_num, result };
        hooks.get_output(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

/// Number of outcomes that failed
#[must_use]
pub fn failure_count(outcomes: &[CaseOutcome]) -> usize {
    outcomes.iter().filter(|o| o.result.is_err()).count()
}
