#![forbid(unsafe_code)]

//! Paginator defaults and environment overrides.
//!
//! Environment variables:
//! - `PAGEFRAME_ITEMS_ON_PAGE` (integer)
//! - `PAGEFRAME_FRAME_LENGTH` (integer)
//! - `PAGEFRAME_POLICY` = clamp|strict

use std::env;
use std::fmt;

use crate::error::Result;
use crate::paginator::{MIN_FRAME_LENGTH, Paginator};

pub const ENV_ITEMS_ON_PAGE: &str = "PAGEFRAME_ITEMS_ON_PAGE";
pub const ENV_FRAME_LENGTH: &str = "PAGEFRAME_FRAME_LENGTH";
pub const ENV_POLICY: &str = "PAGEFRAME_POLICY";

/// How out-of-range input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Silently normalize input ([`Paginator::new`]).
    #[default]
    Clamp,
    /// Reject input ([`Paginator::try_new`]).
    Strict,
}

impl ClampPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clamp" | "lenient" => Some(Self::Clamp),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

impl fmt::Display for ClampPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clamp => "clamp",
            Self::Strict => "strict",
        })
    }
}

/// Page size, frame length, and policy shared by every paginator a caller builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatorConfig {
    pub items_on_page: i64,
    pub frame_length: i64,
    pub policy: ClampPolicy,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            items_on_page: 10,
            frame_length: 10,
            policy: ClampPolicy::Clamp,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct PaginatorConfigParse {
    pub config: PaginatorConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl PaginatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_on_page(mut self, items_on_page: i64) -> Self {
        self.items_on_page = items_on_page;
        self
    }

    pub fn frame_length(mut self, frame_length: i64) -> Self {
        self.frame_length = frame_length;
        self
    }

    pub fn policy(mut self, policy: ClampPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> PaginatorConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> std::result::Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.items_on_page < 1 {
            errors.push(ConfigError::new(
                "items_on_page",
                self.items_on_page.to_string(),
                "must be at least 1",
            ));
        }
        if self.frame_length < MIN_FRAME_LENGTH as i64 {
            errors.push(ConfigError::new(
                "frame_length",
                self.frame_length.to_string(),
                "must be at least 2",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build a paginator for `active_page` of `items_count` items.
    ///
    /// Never fails under [`ClampPolicy::Clamp`].
    pub fn paginate(&self, active_page: i64, items_count: i64) -> Result<Paginator> {
        match self.policy {
            ClampPolicy::Clamp => Ok(Paginator::new(
                active_page,
                items_count,
                self.items_on_page,
                self.frame_length,
            )),
            ClampPolicy::Strict => Paginator::try_new(
                active_page,
                items_count,
                self.items_on_page,
                self.frame_length,
            ),
        }
    }
}

fn from_env_with<F>(mut get: F) -> PaginatorConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = PaginatorConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_ITEMS_ON_PAGE) {
        match parse_i64(&value) {
            Some(parsed) => config.items_on_page = parsed,
            None => errors.push(ConfigError::new(
                "items_on_page",
                value,
                "expected integer",
            )),
        }
    }

    if let Some(value) = get(ENV_FRAME_LENGTH) {
        match parse_i64(&value) {
            Some(parsed) => config.frame_length = parsed,
            None => errors.push(ConfigError::new(
                "frame_length",
                value,
                "expected integer",
            )),
        }
    }

    if let Some(value) = get(ENV_POLICY) {
        match ClampPolicy::parse(&value) {
            Some(parsed) => config.policy = parsed,
            None => errors.push(ConfigError::new("policy", value, "expected clamp|strict")),
        }
    }

    if let Err(mut violations) = config.validate() {
        errors.append(&mut violations);
    }

    #[cfg(feature = "tracing")]
    for error in &errors {
        crate::warn!(
            field = error.field,
            value = %error.value,
            message = %error.message,
            "invalid paginator config"
        );
    }

    PaginatorConfigParse { config, errors }
}

fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
