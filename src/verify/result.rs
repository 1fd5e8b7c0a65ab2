//! Result types for the verification pipeline.

/// Pipeline stages, in execution order. Each stage runs only if every
/// earlier stage passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FileExists,
    Structure,
    Content,
    CommitRecord,
}

impl Stage {
    /// Human-readable stage label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::FileExists => "file existence",
            Stage::Structure => "file structure",
            Stage::Content => "content accuracy",
            Stage::CommitRecord => "commit record",
        }
    }

    /// Position in the `[n/4]` progress display.
    pub fn ordinal(&self) -> usize {
        match self {
            Stage::FileExists => 1,
            Stage::Structure => 2,
            Stage::Content => 3,
            Stage::CommitRecord => 4,
        }
    }
}

/// Result of executing a single pipeline stage.
#[derive(Debug, Clone)]
pub struct StageResult {
    pub stage: Stage,
    pub passed: bool,
    pub detail: String,
}

impl StageResult {
    /// Record a passing stage.
    pub fn pass(stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            passed: true,
            detail: detail.into(),
        }
    }

    /// Record a failing stage.
    pub fn fail(stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            passed: false,
            detail: detail.into(),
        }
    }

    /// One-line summary of the stage result.
    pub fn summary(&self) -> String {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        format!("{} - {}: {}", status, self.stage.label(), self.detail)
    }
}

/// Outcome of the full pipeline run.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// Every configured stage passed.
    AllPassed { stages: Vec<StageResult> },

    /// A stage failed and the pipeline stopped there.
    Failed {
        stages: Vec<StageResult>,
        failures: Vec<String>,
    },
}

impl VerifyOutcome {
    /// Check if every stage passed.
    pub fn all_passed(&self) -> bool {
        matches!(self, VerifyOutcome::AllPassed { .. })
    }

    /// All stage results recorded before the pipeline stopped.
    pub fn stages(&self) -> &[StageResult] {
        match self {
            VerifyOutcome::AllPassed { stages } => stages,
            VerifyOutcome::Failed { stages, .. } => stages,
        }
    }

    /// Failure messages, if any.
    pub fn failures(&self) -> Vec<String> {
        match self {
            VerifyOutcome::AllPassed { .. } => Vec::new(),
            VerifyOutcome::Failed { failures, .. } => failures.clone(),
        }
    }

    /// Count of stages that passed.
    pub fn passed_count(&self) -> usize {
        self.stages().iter().filter(|s| s.passed).count()
    }
}
