/// Registry of all available lint rules
use crate::config::{LintConfig, RuleInstanceConfig};
use crate::rules::{self, Rule};
use crate::traits::RuleMetadata;
use std::sync::LazyLock;

/// Identifies one rule family. The set is closed: adding a rule means adding
/// a variant here, a [`Rule`] variant and its file under `rules/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    LeadingWhitespace,
    TrailingWhitespace,
    FinalNewline,
    LeadingComma,
    SelectTrailingComma,
    IsNull,
    SelectModifiers,
    DistinctParentheses,
}

impl RuleKind {
    /// Every registered rule, in registration order.
    pub const ALL: &'static [Self] = &[
        Self::LeadingWhitespace,
        Self::TrailingWhitespace,
        Self::FinalNewline,
        Self::LeadingComma,
        Self::SelectTrailingComma,
        Self::IsNull,
        Self::SelectModifiers,
        Self::DistinctParentheses,
    ];

    #[must_use]
    pub fn metadata(self) -> &'static RuleMetadata {
        match self {
            Self::LeadingWhitespace => &rules::LEADING_WHITESPACE,
            Self::TrailingWhitespace => &rules::TRAILING_WHITESPACE,
            Self::FinalNewline => &rules::FINAL_NEWLINE,
            Self::LeadingComma => &rules::LEADING_COMMA,
            Self::SelectTrailingComma => &rules::SELECT_TRAILING_COMMA,
            Self::IsNull => &rules::IS_NULL,
            Self::SelectModifiers => &rules::SELECT_MODIFIERS,
            Self::DistinctParentheses => &rules::DISTINCT_PARENTHESES,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.metadata().name
    }

    /// Look a rule up by its settings key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// Rule names, sorted. Built once.
static RULE_NAMES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names: Vec<&'static str> = RuleKind::ALL.iter().map(|kind| kind.name()).collect();
    names.sort_unstable();
    names
});

#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    RULE_NAMES.clone()
}

/// Metadata of every registered rule, in registration order.
pub fn all_rules() -> impl Iterator<Item = &'static RuleMetadata> {
    RuleKind::ALL.iter().map(|kind| kind.metadata())
}

/// Instantiate the rule set described by `config`.
///
/// Every registered rule gets at least one instance; rules the configuration
/// does not enable are built disabled so toggling them needs no re-parse.
#[must_use]
pub fn build_rules(config: &LintConfig) -> Vec<Rule> {
    let mut built = Vec::with_capacity(RuleKind::ALL.len());

    for &kind in RuleKind::ALL {
        let instances = config.rule_instances(kind.name());
        if instances.is_empty() {
            built.push(Rule::new(kind, &RuleInstanceConfig::off(), 0));
            continue;
        }
        built.extend(
            instances
                .iter()
                .enumerate()
                .map(|(index, instance)| Rule::new(kind, instance, index)),
        );
    }

    built
}
