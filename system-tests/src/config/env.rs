// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed overrides for the live suites.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: sensor-monitoring-client, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, unparseable base URLs, and
//! non-positive timeouts fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use sensor_monitoring_client::ClientConfig;
use url::Url;

use super::environment::ENVIRONMENT;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional backend base URL override.
    BaseUrl,
    /// Optional run root override.
    RunRoot,
    /// Optional request timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Company used by the project suites.
    CompanyId,
    /// Node used by the sensor suite.
    NodeId,
    /// Sensor used by the sensor suite.
    SensorId,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "SENSOR_MONITORING_SYSTEM_TEST_BASE_URL",
            Self::RunRoot => "SENSOR_MONITORING_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "SENSOR_MONITORING_SYSTEM_TEST_TIMEOUT_SEC",
            Self::CompanyId => "SENSOR_MONITORING_SYSTEM_TEST_COMPANY_ID",
            Self::NodeId => "SENSOR_MONITORING_SYSTEM_TEST_NODE_ID",
            Self::SensorId => "SENSOR_MONITORING_SYSTEM_TEST_SENSOR_ID",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTestConfig {
    /// Backend base URL; the environment default unless overridden.
    pub base_url: String,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Optional request timeout override.
    pub timeout: Option<Duration>,
    /// Company for project suites; those suites skip when unset.
    pub company_id: Option<String>,
    /// Node for the sensor suite; it skips when unset.
    pub node_id: Option<String>,
    /// Sensor for the sensor suite; it skips when unset.
    pub sensor_id: Option<String>,
}

impl Default for SystemTestConfig {
    fn default() -> Self {
        Self {
            base_url: ENVIRONMENT.base_url.to_string(),
            run_root: None,
            timeout: None,
            company_id: None,
            node_id: None,
            sensor_id: None,
        }
    }
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid URL or timeout).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?
            .map(|value| parse_base_url(SystemTestEnv::BaseUrl.as_str(), &value))
            .transpose()?
            .unwrap_or_else(|| ENVIRONMENT.base_url.to_string());
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let company_id = read_env_nonempty(SystemTestEnv::CompanyId.as_str())?;
        let node_id = read_env_nonempty(SystemTestEnv::NodeId.as_str())?;
        let sensor_id = read_env_nonempty(SystemTestEnv::SensorId.as_str())?;
        Ok(Self {
            base_url,
            run_root,
            timeout,
            company_id,
            node_id,
            sensor_id,
        })
    }

    /// Returns the client settings for this configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone());
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }

    /// Returns the node and sensor pair when both are configured.
    #[must_use]
    pub fn sensor_target(&self) -> Option<(&str, &str)> {
        Some((self.node_id.as_deref()?, self.sensor_id.as_deref()?))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

/// Validates an http(s) base URL.
///
/// # Errors
///
/// Returns an error when the value does not parse or uses another scheme.
fn parse_base_url(name: &str, raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|err| format!("{name} must be a valid url: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{name} must use http or https"));
    }
    Ok(raw.to_string())
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
