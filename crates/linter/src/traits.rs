use crate::config::RuleInstanceConfig;
use crate::diagnostics::LintDiagnostic;
use sqlint_syntax::FileMap;
use sqlint_types::{DiagnosticSeverity, Range};

/// Static description of a rule, shared by every instance of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMetadata {
    /// Unique identifier (e.g., `"trailing-whitespace"`); the settings key
    /// and the `source` of every diagnostic the rule reports
    pub name: &'static str,
    /// Short code (e.g., `"LT01"`)
    pub code: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Severity used when the configuration only says "on"
    pub default_severity: DiagnosticSeverity,
    /// Default diagnostic message
    pub message: &'static str,
}

/// Settings-derived state of one rule instance.
///
/// Fixed at construction. Changing settings afterwards means building a new
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleState {
    enabled: bool,
    severity: DiagnosticSeverity,
    message: String,
    index: usize,
}

impl RuleState {
    /// Resolve the configured severity against the rule's default.
    #[must_use]
    pub fn new(metadata: &RuleMetadata, config: &RuleInstanceConfig<'_>, index: usize) -> Self {
        let severity = config.severity.resolve(metadata.default_severity);
        Self {
            enabled: severity.is_some(),
            severity: severity.unwrap_or(metadata.default_severity),
            message: metadata.message.to_string(),
            index,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// The evaluation contract every rule implements.
///
/// Implementors provide their metadata, their settings-derived state and a
/// `check` over a non-empty [`FileMap`]. The provided [`LintRule::evaluate`]
/// handles the disabled and empty-document short circuits, so `check` is
/// never called for either.
pub trait LintRule: Send + Sync {
    fn metadata(&self) -> &'static RuleMetadata;

    fn state(&self) -> &RuleState;

    /// Inspect a parsed document. Only called for enabled rules and
    /// documents with at least one statement.
    fn check(&self, map: &FileMap) -> Vec<LintDiagnostic>;

    /// Unique identifier for this rule (e.g., `"leading-comma"`)
    fn name(&self) -> &'static str {
        self.metadata().name
    }

    fn code(&self) -> &'static str {
        self.metadata().code
    }

    fn description(&self) -> &'static str {
        self.metadata().description
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        self.metadata().default_severity
    }

    fn enabled(&self) -> bool {
        self.state().enabled()
    }

    fn severity(&self) -> DiagnosticSeverity {
        self.state().severity()
    }

    fn message(&self) -> &str {
        self.state().message()
    }

    /// Position of this instance within its rule family.
    fn index(&self) -> usize {
        self.state().index()
    }

    /// A diagnostic for `range` carrying this instance's severity and message.
    fn diagnostic(&self, range: Range) -> LintDiagnostic {
        LintDiagnostic::new(range, self.severity(), self.message(), self.name())
            .with_code(self.code())
    }

    /// Run the rule. `None` means no findings.
    fn evaluate(&self, map: &FileMap) -> Option<Vec<LintDiagnostic>> {
        if !self.enabled() || map.is_empty() {
            return None;
        }
        let diagnostics = self.check(map);
        (!diagnostics.is_empty()).then_some(diagnostics)
    }
}
