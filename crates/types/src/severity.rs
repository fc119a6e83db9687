//! Severity types for diagnostics and lint rules.

use serde::{Deserialize, Serialize};

/// Diagnostic severity level for display.
///
/// This represents the severity of a diagnostic as shown to users.
/// Maps directly to the editor protocol's `DiagnosticSeverity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Error - indicates a problem that must be fixed
    Error,
    /// Warning - indicates a potential problem
    Warning,
    /// Information - informational message
    Information,
    /// Hint - a suggestion or style recommendation
    Hint,
}

impl DiagnosticSeverity {
    /// Returns true if this severity indicates an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns true if this severity is at least a warning (warning or error).
    #[must_use]
    pub const fn is_warning_or_higher(self) -> bool {
        matches!(self, Self::Error | Self::Warning)
    }

    /// Numeric code used by editor protocols (1 = error .. 4 = hint).
    #[must_use]
    pub const fn protocol_code(self) -> u8 {
        match self {
            Self::Error => 1,
            Self::Warning => 2,
            Self::Information => 3,
            Self::Hint => 4,
        }
    }
}

impl std::fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Information => write!(f, "info"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// Rule severity for lint configuration.
///
/// This represents how a lint rule should be reported, as configured
/// by the user. `On` enables the rule at its own default severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Rule is disabled
    Off,
    /// Rule is enabled at its default severity
    #[default]
    On,
    /// Rule violations are reported as hints
    Hint,
    /// Rule violations are reported as information
    #[serde(alias = "information")]
    Info,
    /// Rule violations are reported as warnings
    #[serde(alias = "warning")]
    Warn,
    /// Rule violations are reported as errors
    Error,
}

impl RuleSeverity {
    /// Parse a severity keyword as written in settings files.
    #[must_use]
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "on" => Some(Self::On),
            "hint" => Some(Self::Hint),
            "info" | "information" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns true if the rule is enabled (anything but `Off`).
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Resolve to a diagnostic severity, using `default` for `On`.
    ///
    /// Returns `None` if the rule is off.
    #[must_use]
    pub const fn resolve(self, default: DiagnosticSeverity) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::On => Some(default),
            Self::Hint => Some(DiagnosticSeverity::Hint),
            Self::Info => Some(DiagnosticSeverity::Information),
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
            Self::Hint => write!(f, "hint"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}
