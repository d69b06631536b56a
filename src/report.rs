//! Validation findings and the per-run report

/// Severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Pass,
    Warning,
    Error,
}

/// One reported outcome of a check
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    /// Index of the originating dataset element, for entry-level findings
    pub index: Option<usize>,
}

/// Ordered accumulation of findings for one validation run
#[derive(Debug, Default)]
pub struct Report {
    findings: Vec<Finding>,
    entry_count: Option<usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Pass,
            message: message.into(),
            index: None,
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            message: message.into(),
            index: None,
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message: message.into(),
            index: None,
        });
    }

    pub fn error_at(&mut self, index: usize, message: impl Into<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message: message.into(),
            index: Some(index),
        });
    }

    /// All findings, in the order the checks produced them
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Number of elements in the top-level array, once known
    pub fn entry_count(&self) -> Option<usize> {
        self.entry_count
    }

    pub(crate) fn set_entry_count(&mut self, count: usize) {
        self.entry_count = Some(count);
    }

    /// Verdict: success iff the run produced no errors and no warnings
    pub fn is_success(&self) -> bool {
        self.error_count() == 0 && self.warning_count() == 0
    }
}
