use tracing::debug;

use crate::core::case::TestCase;
use crate::harness::driver::CaseOutcome;
use crate::scoring::Evaluation;

/// Per-case lifecycle stages, called in order for every test case:
/// `ready`, `preprocess`, `process`, `get_output`.
///
/// All stages default to no-ops. `process` is only called when the case
/// could be scored.
pub trait CaseHooks {
    /// Before anything is done with the case
    fn ready(&mut self, _case_num: usize, _case: &TestCase) {}

    /// After the case is read, before the target is built
    fn preprocess(&mut self, _case_num: usize, _case: &TestCase) {}

    /// After the case has been scored
    fn process(&mut self, _case_num: usize, _evaluation: &Evaluation) {}

    /// Once the case's outcome is final
    fn get_output(&mut self, _outcome: &CaseOutcome) {}
}

/// Hooks that do nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl CaseHooks for NoopHooks {}

/// Hooks that log each stage at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHooks;

impl CaseHooks for TracingHooks {
    fn ready(&mut self, case_num: usize, case: &TestCase) {
        debug!(case = case_num, length = case.len(), "ready");
    }

    fn preprocess(&mut self, case_num: usize, case: &TestCase) {
        debug!(case = case_num, overrides = case.overrides.len(), "preprocess");
    }

    fn process(&mut self, case_num: usize, evaluation: &Evaluation) {
        debug!(
            case = case_num,
            blocks = evaluation.blocks.len(),
            best = evaluation.best,
            "process"
        );
    }

    fn get_output(&mut self, outcome: &CaseOutcome) {
        debug!(case = outcome.case_num, ok = outcome.result.is_ok(), "get_output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::case::Override;
    use crate::harness::driver::run_cases;
    use crate::scoring::ScoringConfig;

    #[derive(Default)]
    struct Recorder {
        stages: Vec<String>,
    }

    impl CaseHooks for Recorder {
        fn ready(&mut self, case_num: usize, _case: &TestCase) {
            self.stages.push(format!("ready:{case_num}"));
        }

        fn preprocess(&mut self, case_num: usize, _case: &TestCase) {
            self.stages.push(format!("preprocess:{case_num}"));
        }

        fn process(&mut self, case_num: usize, _evaluation: &Evaluation) {
            self.stages.push(format!("process:{case_num}"));
        }

        fn get_output(&mut self, outcome: &CaseOutcome) {
            self.stages.push(format!("get_output:{}", outcome.case_num));
        }
    }

    #[test]
    fn test_stage_order() {
        let cases = vec![
            TestCase::new(b"ab".to_vec(), vec![Override::new(1, b'a')]),
            TestCase::new(b"ab".to_vec(), vec![Override::new(5, b'a')]),
        ];
        let mut hooks = Recorder::default();
        run_cases(&cases, ScoringConfig::default(), &mut hooks);

        assert_eq!(
            hooks.stages,
            vec![
                "ready:1",
                "preprocess:1",
                "process:1",
                "get_output:1",
                "ready:2",
                "preprocess:2",
                "get_output:2",
            ]
        );
    }

    #[test]
    fn test_default_hooks_are_inert() {
        let cases = vec![TestCase::new(b"a".to_vec(), vec![])];
        let with_noop = run_cases(&cases, ScoringConfig::default(), &mut NoopHooks);
        let with_tracing = run_cases(&cases, ScoringConfig::default(), &mut TracingHooks);
        assert_eq!(with_noop, with_tracing);
    }
}
