//! Validate a game document's cross-references.

use monmaker_domain::{validate_with, GameData, ValidationReport, ValidationRules};

/// Runs the reference validator. Findings are data, never an error.
pub struct ValidateGame;

impl ValidateGame {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, data: &GameData, rules: ValidationRules) -> ValidationReport {
        let report = validate_with(data, rules);
        tracing::debug!(
            valid = report.valid,
            warnings = report.warnings.len(),
            errors = report.errors.len(),
            strict = rules.duplicate_ids || rules.quest_cycles,
            "Validated game document"
        );
        report
    }
}

impl Default for ValidateGame {
    fn default() -> Self {
        Self::new()
    }
}
