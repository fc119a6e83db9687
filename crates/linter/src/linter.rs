use crate::diagnostics::LintDiagnostic;
use crate::registry::{self, RuleKind};
use crate::rules::Rule;
use crate::settings::Settings;
use crate::traits::LintRule;
use sqlint_syntax::{parse, FileMap};
use std::panic::{self, AssertUnwindSafe};

/// Linter that runs configured lint rules
///
/// Holds one instance per configured rule, disabled ones included. A `Linter`
/// has no mutable state; lint as many documents as needed, from as many
/// threads as needed.
#[derive(Debug, Clone)]
pub struct Linter {
    settings: Settings,
    rules: Vec<Rule>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Linter {
    /// Create a new linter with the given settings
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        for name in settings.lint.configured_rule_names() {
            if RuleKind::from_name(name).is_none() {
                tracing::warn!(rule = name, "Unknown lint rule in settings, ignoring");
            }
        }

        let rules = registry::build_rules(&settings.lint);
        tracing::debug!(
            rules = rules.len(),
            enabled = rules.iter().filter(|rule| rule.enabled()).count(),
            "Linter configured"
        );

        Self { settings, rules }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The rule instances, in registration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Lint a document
    #[must_use]
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn lint(&self, text: &str) -> Vec<LintDiagnostic> {
        let map = parse(text);
        self.lint_file_map(&map)
    }

    /// Run every rule against an already parsed document.
    ///
    /// Results are sorted by start position, then rule id, and capped at
    /// `max_number_of_problems`.
    #[must_use]
    pub fn lint_file_map(&self, map: &FileMap) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            let rule_name = rule.name();

            if !rule.enabled() {
                tracing::trace!(rule = rule_name, "Rule not enabled, skipping");
                continue;
            }

            tracing::trace!(rule = rule_name, index = rule.index(), "Running rule");
            let Some(rule_diagnostics) = evaluate_isolated(rule_name, || rule.evaluate(map))
            else {
                continue;
            };

            tracing::debug!(
                rule = rule_name,
                diagnostics = rule_diagnostics.len(),
                "Rule found issues"
            );
            diagnostics.extend(rule_diagnostics);
        }

        // Stable: equal keys keep instance order
        diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let max = self.settings.max_number_of_problems;
        if diagnostics.len() > max {
            tracing::warn!(
                found = diagnostics.len(),
                max,
                "Too many problems, truncating"
            );
            diagnostics.truncate(max);
        }

        tracing::debug!(total_diagnostics = diagnostics.len(), "Linting complete");
        diagnostics
    }

    /// [`Linter::lint`] on the blocking thread pool.
    #[cfg(feature = "async")]
    pub async fn lint_async(&self, text: impl Into<String>) -> crate::Result<Vec<LintDiagnostic>> {
        let linter = self.clone();
        let text = text.into();
        let diagnostics = tokio::task::spawn_blocking(move || linter.lint(&text)).await?;
        Ok(diagnostics)
    }
}

/// Run one rule, turning a panic into "no findings".
fn evaluate_isolated(
    rule_name: &str,
    evaluate: impl FnOnce() -> Option<Vec<LintDiagnostic>>,
) -> Option<Vec<LintDiagnostic>> {
    match panic::catch_unwind(AssertUnwindSafe(evaluate)) {
        Ok(result) => result,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(rule = rule_name, reason = %reason, "Rule evaluation panicked, skipping");
            None
        }
    }
}

/// Lint `text` with a linter built from `settings`.
#[must_use]
pub fn lint(text: &str, settings: &Settings) -> Vec<LintDiagnostic> {
    Linter::new(settings.clone()).lint(text)
}

/// [`parse`] on the blocking thread pool.
#[cfg(feature = "async")]
pub async fn parse_async(text: impl Into<String>) -> crate::Result<FileMap> {
    let text = text.into();
    let map = tokio::task::spawn_blocking(move || parse(&text)).await?;
    Ok(map)
}
