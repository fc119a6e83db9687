use serde::{Deserialize, Serialize};
use sqlint_types::RuleSeverity;
use std::collections::HashMap;

/// Name of the only built-in preset.
pub const RECOMMENDED_PRESET: &str = "recommended";

/// Configuration for a single lint rule
///
/// Supports multiple formats:
/// ```yaml
/// # Simple severity (or `true` / `false`)
/// rule-id: warn
///
/// # Object style with options
/// rule-id:
///   severity: warn
///   options:
///     position: leading
///
/// # Object style toggling the rule at its default severity
/// rule-id:
///   enabled: true
///
/// # ESLint-style array: [severity, options]
/// rule-id: [warn, { position: leading }]
///
/// # Several instances of one rule family, one per list entry
/// rule-id:
///   - { severity: warn }
///   - { severity: error, options: { position: leading } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LintRuleConfig {
    /// Just a severity level (simple case)
    Severity(RuleSeverity),

    /// Detailed config with options
    Detailed {
        #[serde(skip_serializing_if = "Option::is_none")]
        severity: Option<RuleSeverity>,
        #[serde(skip_serializing_if = "Option::is_none")]
        enabled: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },

    /// One entry per rule instance; the list position is the instance index
    Instances(Vec<LintRuleConfig>),
}

impl LintRuleConfig {
    /// Effective severity of this configuration.
    ///
    /// `enabled: false` always wins; an object without a severity enables the
    /// rule at its default. For instance lists this is the first instance.
    #[must_use]
    pub fn severity(&self) -> RuleSeverity {
        match self {
            Self::Severity(s) => *s,
            Self::Detailed {
                enabled: Some(false),
                ..
            } => RuleSeverity::Off,
            Self::Detailed { severity, .. } => severity.unwrap_or(RuleSeverity::On),
            Self::Instances(instances) => instances
                .first()
                .map_or(RuleSeverity::Off, Self::severity),
        }
    }

    /// Get the options for this rule configuration (if any)
    #[must_use]
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Severity(_) => None,
            Self::Detailed { options, .. } => options.as_ref(),
            Self::Instances(instances) => instances.first().and_then(Self::options),
        }
    }

    /// The per-instance configurations, in index order.
    #[must_use]
    pub fn instances(&self) -> Vec<&Self> {
        match self {
            Self::Instances(instances) => instances.iter().collect(),
            single => vec![single],
        }
    }

    fn from_detailed<E: serde::de::Error>(
        severity: Option<&str>,
        enabled: Option<bool>,
        options: Option<serde_json::Value>,
    ) -> Result<Self, E> {
        let severity = severity.map(parse_severity::<E>).transpose()?;
        Ok(Self::Detailed {
            severity,
            enabled,
            options: options.filter(|value| !value.is_null()),
        })
    }
}

/// Fold keys written next to `severity` into the options object. Keys under
/// an explicit `options` object win.
fn merge_inline_options(
    options: Option<serde_json::Value>,
    inline: serde_json::Map<String, serde_json::Value>,
) -> Option<serde_json::Value> {
    if inline.is_empty() {
        return options;
    }
    match options {
        Some(serde_json::Value::Object(explicit)) => {
            let mut merged = inline;
            merged.extend(explicit);
            Some(serde_json::Value::Object(merged))
        }
        None | Some(serde_json::Value::Null) => Some(serde_json::Value::Object(inline)),
        Some(other) => Some(other),
    }
}

fn parse_severity<E: serde::de::Error>(value: &str) -> Result<RuleSeverity, E> {
    RuleSeverity::from_keyword(value).ok_or_else(|| {
        E::custom(format!(
            "unknown severity: {value} (expected off, on, hint, info, warn or error)"
        ))
    })
}

/// Custom deserializer for `LintRuleConfig` to handle the string, boolean,
/// array and object forms
impl<'de> Deserialize<'de> for LintRuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        struct LintRuleConfigVisitor;

        impl<'de> Visitor<'de> for LintRuleConfigVisitor {
            type Value = LintRuleConfig;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "a severity string ('off', 'on', 'hint', 'info', 'warn', 'error'), \
                     a boolean, \
                     an array [severity, options], \
                     an object { severity, enabled, options }, \
                     or a list of such objects",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_severity(value).map(LintRuleConfig::Severity)
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LintRuleConfig::Severity(if value {
                    RuleSeverity::On
                } else {
                    RuleSeverity::Off
                }))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items: Vec<serde_json::Value> = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }

                let Some(first) = items.first() else {
                    return Err(de::Error::invalid_length(0, &"a non-empty array"));
                };

                // ESLint-style: [severity, options]
                if let Some(severity) = first.as_str() {
                    if items.len() > 2 {
                        return Err(de::Error::invalid_length(
                            items.len(),
                            &"an array [severity, options]",
                        ));
                    }
                    let severity = parse_severity::<A::Error>(severity)?;
                    let options = items.into_iter().nth(1).filter(|value| !value.is_null());
                    return Ok(match options {
                        Some(options) => LintRuleConfig::Detailed {
                            severity: Some(severity),
                            enabled: None,
                            options: Some(options),
                        },
                        None => LintRuleConfig::Severity(severity),
                    });
                }

                // Instance list: [{...}, {...}]
                let mut instances = Vec::with_capacity(items.len());
                for item in items {
                    let instance: LintRuleConfig =
                        serde_json::from_value(item).map_err(de::Error::custom)?;
                    if matches!(instance, LintRuleConfig::Instances(_)) {
                        return Err(de::Error::custom(
                            "rule instance lists cannot be nested",
                        ));
                    }
                    instances.push(instance);
                }
                Ok(LintRuleConfig::Instances(instances))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Object style: { severity, enabled, options, ...inline options }
                #[derive(Deserialize)]
                struct DetailedConfig {
                    #[serde(default)]
                    severity: Option<String>,
                    #[serde(default)]
                    enabled: Option<bool>,
                    #[serde(default)]
                    options: Option<serde_json::Value>,
                    #[serde(flatten)]
                    inline: serde_json::Map<String, serde_json::Value>,
                }

                let config =
                    DetailedConfig::deserialize(de::value::MapAccessDeserializer::new(map))?;
                let options = merge_inline_options(config.options, config.inline);
                LintRuleConfig::from_detailed(config.severity.as_deref(), config.enabled, options)
            }
        }

        deserializer.deserialize_any(LintRuleConfigVisitor)
    }
}

/// Extends configuration - can be a single preset or multiple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtendsConfig {
    /// Single preset: `extends: recommended` or `lint: recommended`
    Single(String),
    /// Multiple presets: `extends: [recommended]` or `lint: [recommended]`
    Multiple(Vec<String>),
}

impl ExtendsConfig {
    /// Get all presets as a vector (normalizes single to vec)
    #[must_use]
    pub fn presets(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// Full lint configuration struct with extends and rules
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullLintConfig {
    /// Presets to extend (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<ExtendsConfig>,

    /// Rule configurations (optional)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, LintRuleConfig>,
}

/// One resolved rule instance: what a rule constructor receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInstanceConfig<'a> {
    pub severity: RuleSeverity,
    pub options: Option<&'a serde_json::Value>,
}

impl RuleInstanceConfig<'_> {
    /// The configuration of a rule nobody asked for.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            severity: RuleSeverity::Off,
            options: None,
        }
    }
}

/// Overall lint configuration
///
/// Supports multiple formats:
///
/// ```yaml
/// # Happy path - just use recommended preset
/// lint: recommended
///
/// # Fine-grained rules only (no presets)
/// lint:
///   rules:
///     leading-comma: error
///     trailing-whitespace: warn
///
/// # Preset with overrides
/// lint:
///   extends: recommended
///   rules:
///     final-newline: off
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LintConfig {
    /// Preset(s): `lint: recommended` or `lint: [recommended]`
    Preset(ExtendsConfig),

    /// Full configuration with optional extends and rules
    Full(FullLintConfig),
}

impl Default for LintConfig {
    fn default() -> Self {
        Self::Full(FullLintConfig::default())
    }
}

impl LintConfig {
    /// Get recommended configuration
    #[must_use]
    pub fn recommended() -> Self {
        Self::Preset(ExtendsConfig::Single(RECOMMENDED_PRESET.to_string()))
    }

    /// A configuration with explicit rule entries and no preset.
    #[must_use]
    pub fn from_rules<I, K>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, LintRuleConfig)>,
        K: Into<String>,
    {
        Self::Full(FullLintConfig {
            extends: None,
            rules: rules
                .into_iter()
                .map(|(name, config)| (name.into(), config))
                .collect(),
        })
    }

    /// Add or replace one rule entry.
    #[must_use]
    pub fn with_rule(self, rule_name: impl Into<String>, config: LintRuleConfig) -> Self {
        let mut full = match self {
            Self::Preset(presets) => FullLintConfig {
                extends: Some(presets),
                rules: HashMap::new(),
            },
            Self::Full(full) => full,
        };
        full.rules.insert(rule_name.into(), config);
        Self::Full(full)
    }

    /// Validate the lint configuration against available rules
    ///
    /// Returns an error if any configured rule names are invalid.
    /// The error message includes a list of valid rule names.
    pub fn validate(&self) -> Result<(), String> {
        let valid_rules = crate::registry::all_rule_names();

        let (extends, rules) = match self {
            Self::Preset(presets) => (Some(presets), None),
            Self::Full(FullLintConfig { extends, rules }) => (extends.as_ref(), Some(rules)),
        };

        if let Some(presets) = extends {
            for preset in presets.presets() {
                if preset != RECOMMENDED_PRESET {
                    return Err(format!(
                        "Invalid preset name: '{preset}'\n\nValid presets are:\n  - {RECOMMENDED_PRESET}"
                    ));
                }
            }
        }

        let mut invalid_rules: Vec<&str> = rules
            .into_iter()
            .flat_map(HashMap::keys)
            .map(String::as_str)
            .filter(|rule| !valid_rules.iter().any(|valid| valid == rule))
            .collect();
        invalid_rules.sort_unstable();

        if invalid_rules.is_empty() {
            Ok(())
        } else {
            use std::fmt::Write;
            let mut error = format!(
                "Invalid lint rule name(s): {}\n\nValid rule names are:\n",
                invalid_rules.join(", ")
            );
            for rule in &valid_rules {
                let _ = writeln!(error, "  - {rule}");
            }
            Err(error)
        }
    }

    /// Get the severity for a rule, considering presets and overrides
    #[must_use]
    pub fn get_severity(&self, rule_name: &str) -> Option<RuleSeverity> {
        match self {
            Self::Preset(presets) => Self::severity_from_presets(presets, rule_name),
            Self::Full(FullLintConfig { extends, rules }) => {
                let preset_severity = extends
                    .as_ref()
                    .and_then(|ext| Self::severity_from_presets(ext, rule_name));

                rules
                    .get(rule_name)
                    .map(LintRuleConfig::severity)
                    .or(preset_severity)
            }
        }
    }

    /// Get the options for a rule (if configured)
    ///
    /// Returns `None` if the rule is not configured or has no options.
    #[must_use]
    pub fn get_options(&self, rule_name: &str) -> Option<&serde_json::Value> {
        match self {
            Self::Preset(_) => None,
            Self::Full(FullLintConfig { rules, .. }) => {
                rules.get(rule_name).and_then(LintRuleConfig::options)
            }
        }
    }

    /// Check if a rule is enabled (not Off and not None)
    #[must_use]
    pub fn is_enabled(&self, rule_name: &str) -> bool {
        self.get_severity(rule_name)
            .is_some_and(RuleSeverity::is_enabled)
    }

    /// Resolve every configured instance of a rule, in index order.
    ///
    /// Empty when neither a rule entry nor a preset mentions the rule.
    #[must_use]
    pub fn rule_instances(&self, rule_name: &str) -> Vec<RuleInstanceConfig<'_>> {
        let entry = match self {
            Self::Preset(_) => None,
            Self::Full(FullLintConfig { rules, .. }) => rules.get(rule_name),
        };

        match entry {
            Some(config) => config
                .instances()
                .into_iter()
                .map(|instance| RuleInstanceConfig {
                    severity: instance.severity(),
                    options: instance.options(),
                })
                .collect(),
            None => self
                .get_severity(rule_name)
                .map(|severity| RuleInstanceConfig {
                    severity,
                    options: None,
                })
                .into_iter()
                .collect(),
        }
    }

    /// Rule ids named in the `rules` table, sorted.
    #[must_use]
    pub fn configured_rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = match self {
            Self::Preset(_) => Vec::new(),
            Self::Full(FullLintConfig { rules, .. }) => rules.keys().map(String::as_str).collect(),
        };
        names.sort_unstable();
        names
    }

    /// Get severity from a list of presets (later presets override earlier)
    fn severity_from_presets(presets: &ExtendsConfig, rule_name: &str) -> Option<RuleSeverity> {
        let mut severity = None;
        for preset in presets.presets() {
            if preset == RECOMMENDED_PRESET {
                if let Some(s) = Self::recommended_severity(rule_name) {
                    severity = Some(s);
                }
            }
        }
        severity
    }

    /// Every registered rule is part of `recommended`, at its own default severity.
    fn recommended_severity(rule_name: &str) -> Option<RuleSeverity> {
        crate::registry::RuleKind::from_name(rule_name).map(|_| RuleSeverity::On)
    }

    /// Merge another config into this one (tool-specific overrides)
    #[must_use]
    pub fn merge(&self, override_config: &Self) -> Self {
        match (self, override_config) {
            // If override is a preset, use it directly
            (_, Self::Preset(name)) => Self::Preset(name.clone()),

            // If override is empty Full config, keep base
            (
                base,
                Self::Full(FullLintConfig {
                    extends: None,
                    rules,
                }),
            ) if rules.is_empty() => base.clone(),

            // Merge Full configs
            (
                Self::Full(FullLintConfig {
                    extends: base_ext,
                    rules: base_rules,
                }),
                Self::Full(FullLintConfig {
                    extends: override_ext,
                    rules: override_rules,
                }),
            ) => {
                let mut merged_rules = base_rules.clone();
                merged_rules.extend(override_rules.clone());
                Self::Full(FullLintConfig {
                    extends: override_ext.clone().or_else(|| base_ext.clone()),
                    rules: merged_rules,
                })
            }

            // Preset + Full override: convert preset to extends and merge
            (
                Self::Preset(presets),
                Self::Full(FullLintConfig {
                    extends: override_ext,
                    rules: override_rules,
                }),
            ) => Self::Full(FullLintConfig {
                extends: override_ext.clone().or_else(|| Some(presets.clone())),
                rules: override_rules.clone(),
            }),
        }
    }
}
