//! Layered gate configuration.
//!
//! Resolution order, lowest priority first:
//! 1. compiled defaults (the canonical catalog)
//! 2. `prgate.toml` in the working directory, or an explicit config path
//! 3. CLI overrides applied with [`GateConfig::apply_cli_overrides`]
//!
//! ```toml
//! [rules.header-max-length]
//! level = "warning"
//! max_length = 72
//!
//! [rules.type-enum]
//! allowed = ["feat", "fix"]
//! ```

use std::collections::BTreeMap;
use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};

use super::{
    domain::{Rule, RuleDefinition, RuleLevel, RuleName, RuleSet, TextCase},
    error::{ConfigError, ParseRuleLevelError, RuleSetError},
};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "prgate.toml";

/// Rule level as written in TOML: a name or a commitlint number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelValue {
    /// `"off"`, `"warning"` or `"error"`.
    Name(String),
    /// `0`, `1` or `2`.
    Number(i64),
}

impl LevelValue {
    /// Resolves the written value to a [`RuleLevel`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseRuleLevelError`] for unrecognised levels.
    pub fn resolve(&self) -> Result<RuleLevel, ParseRuleLevelError> {
        match self {
            Self::Name(name) => RuleLevel::try_from(name.as_str()),
            Self::Number(number) => RuleLevel::try_from(*number),
        }
    }
}

/// Overrides for one `[rules.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverride {
    /// Level replacing the rule's default severity.
    pub level: Option<LevelValue>,
    /// `header-max-length` limit.
    pub max_length: Option<usize>,
    /// `type-case` required case.
    pub case: Option<String>,
    /// `type-enum` accepted types.
    pub allowed: Option<Vec<String>>,
    /// `subject-case` forbidden cases.
    pub forbidden: Option<Vec<String>>,
}

impl RuleOverride {
    fn present_parameters(&self) -> Vec<&'static str> {
        [
            ("max_length", self.max_length.is_some()),
            ("case", self.case.is_some()),
            ("allowed", self.allowed.is_some()),
            ("forbidden", self.forbidden.is_some()),
        ]
        .into_iter()
        .filter_map(|(parameter, present)| present.then_some(parameter))
        .collect()
    }
}

/// CLI flags that override file configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--max-header-length`.
    pub max_header_length: Option<usize>,
}

/// Gate configuration keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Per-rule overrides.
    pub rules: BTreeMap<String, RuleOverride>,
}

impl GateConfig {
    /// Loads configuration from `explicit`, or from `prgate.toml` in `dir`
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when an explicit file is missing or any
    /// file cannot be read, and [`ConfigError::Parse`] for invalid TOML.
    pub fn load(dir: &Utf8Path, explicit: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let contents = read_file(path).map_err(|source| ConfigError::Read {
                path: path.to_string(),
                source,
            })?;
            tracing::debug!(%path, "loaded explicit configuration");
            return Self::parse(path.as_str(), &contents);
        }

        let path = dir.join(CONFIG_FILE_NAME);
        match read_file(&path) {
            Ok(contents) => {
                tracing::debug!(%path, "loaded project configuration");
                Self::parse(path.as_str(), &contents)
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(%dir, "no project configuration, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_string(),
                source,
            }),
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML or unknown keys.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse("<string>", toml_str)
    }

    fn parse(path: &str, toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|error| ConfigError::Parse {
            path: path.to_owned(),
            message: error.to_string(),
        })
    }

    /// Applies CLI flags on top of the loaded file.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(max_length) = overrides.max_header_length {
            self.rules
                .entry(RuleName::HeaderMaxLength.as_str().to_owned())
                .or_default()
                .max_length = Some(max_length);
        }
    }

    /// Builds the rule set: canonical order, defaults overlaid with the
    /// configured levels and parameters, `off` rules removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown rule, case or level names,
    /// parameters given to the wrong rule, or an invalid resulting rule set.
    pub fn into_rule_set(&self) -> Result<RuleSet, ConfigError> {
        let mut overrides = BTreeMap::new();
        for (key, value) in &self.rules {
            let name = RuleName::try_from(key.as_str())?;
            if overrides.insert(name, value).is_some() {
                return Err(RuleSetError::DuplicateRule(name).into());
            }
        }

        let mut definitions = Vec::with_capacity(RuleName::ALL.len());
        for name in RuleName::ALL {
            let Some(entry) = overrides.get(&name) else {
                definitions.push(RuleDefinition::canonical(name));
                continue;
            };
            let severity = match entry.level.as_ref().map(LevelValue::resolve).transpose()? {
                Some(RuleLevel::Off) => continue,
                Some(RuleLevel::Active(severity)) => severity,
                None => name.default_severity(),
            };
            definitions.push(RuleDefinition::new(configure_rule(name, entry)?, severity));
        }
        Ok(RuleSet::new(definitions)?)
    }
}

fn configure_rule(name: RuleName, entry: &RuleOverride) -> Result<Rule, ConfigError> {
    let applicable: &[&str] = match name {
        RuleName::HeaderMaxLength => &["max_length"],
        RuleName::TypeCase => &["case"],
        RuleName::SubjectCase => &["forbidden"],
        RuleName::TypeEnum => &["allowed"],
        RuleName::BodyLeadingBlank | RuleName::FooterLeadingBlank | RuleName::SubjectEmpty => &[],
    };
    if let Some(parameter) = entry
        .present_parameters()
        .into_iter()
        .find(|parameter| !applicable.contains(parameter))
    {
        return Err(ConfigError::UnexpectedParameter {
            rule: name,
            parameter,
        });
    }

    let mut rule = Rule::canonical(name);
    match &mut rule {
        Rule::HeaderMaxLength { max_length } => {
            if let Some(value) = entry.max_length {
                *max_length = value;
            }
        }
        Rule::TypeCase { case } => {
            if let Some(value) = &entry.case {
                *case = TextCase::try_from(value.as_str())?;
            }
        }
        Rule::SubjectCase { forbidden } => {
            if let Some(values) = &entry.forbidden {
                *forbidden = values
                    .iter()
                    .map(|value| TextCase::try_from(value.as_str()))
                    .collect::<Result<_, _>>()?;
            }
        }
        Rule::TypeEnum { allowed } => {
            if let Some(values) = &entry.allowed {
                allowed.clone_from(values);
            }
        }
        Rule::BodyLeadingBlank | Rule::FooterLeadingBlank | Rule::SubjectEmpty => {}
    }
    Ok(rule)
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "config path has no file name"))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())?.read_to_string(file_name)
}
