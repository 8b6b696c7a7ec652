//! Device connection configuration.
//!
//! Device settings arrive as loosely typed JSON (boolean options may be native
//! booleans or `"true"`/`"false"` text). [`DeviceSettings`] mirrors that
//! document; [`Device`] is the validated, immutable form handed to the session
//! collaborator and to the parsers.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Default NETCONF-over-SSH port.
pub const DEFAULT_PORT: u16 = 830;

/// Default session timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Boolean option as written in a device settings document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoolOption {
    Bool(bool),
    Text(String),
}

impl BoolOption {
    /// Resolve to a boolean, accepting only `true`/`false` in any letter case.
    pub fn parse(&self, option: &'static str) -> Result<bool, ConfigError> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
            Self::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
            Self::Text(text) => Err(ConfigError::InvalidBoolean {
                option,
                value: text.clone(),
            }),
        }
    }
}

impl From<bool> for BoolOption {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for BoolOption {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One entry of a device settings document, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSettings {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    /// Session timeout in seconds.
    pub timeout: Option<u64>,
    pub hostkey_verify: Option<BoolOption>,
    pub allow_agent: Option<BoolOption>,
    pub look_for_keys: Option<BoolOption>,
    /// Vendor-specific connection parameters, passed through untouched.
    #[serde(default)]
    pub device_params: Map<String, Value>,
}

impl DeviceSettings {
    /// Create settings with the three required fields.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Interpret one JSON object of a device list.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Self::deserialize(value).map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
        })
    }
}

/// Validated device identity and connection options.
///
/// Construction fails fast on missing credentials or malformed boolean
/// options; once built, a device cannot be modified.
#[derive(Debug)]
pub struct Device {
    host: String,
    hostname: String,
    username: String,
    password: SecretString,
    port: u16,
    timeout: Duration,
    hostkey_verify: bool,
    allow_agent: bool,
    look_for_keys: bool,
    device_params: Map<String, Value>,
}

impl Device {
    /// Validate settings and build a device.
    pub fn new(settings: DeviceSettings) -> Result<Self, ConfigError> {
        let (host, password, username) = match (
            non_empty(settings.host),
            non_empty(settings.password),
            non_empty(settings.username),
        ) {
            (Some(host), Some(password), Some(username)) => (host, password, username),
            (host, password, username) => {
                let mut missing = Vec::new();
                if host.is_none() {
                    missing.push("'Host'");
                }
                if password.is_none() {
                    missing.push("'Password'");
                }
                if username.is_none() {
                    missing.push("'Username'");
                }
                return Err(ConfigError::MissingFields {
                    host,
                    fields: missing.join(", "),
                });
            }
        };

        let hostkey_verify = resolve_bool(settings.hostkey_verify, "hostkey_verify", false)?;
        let allow_agent = resolve_bool(settings.allow_agent, "allow_agent", true)?;
        let look_for_keys = resolve_bool(settings.look_for_keys, "look_for_keys", true)?;

        Ok(Self {
            hostname: non_empty(settings.hostname).unwrap_or_else(|| host.clone()),
            host,
            username,
            password: SecretString::from(password),
            port: settings.port.unwrap_or(DEFAULT_PORT),
            timeout: settings
                .timeout
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            hostkey_verify,
            allow_agent,
            look_for_keys,
            device_params: settings.device_params,
        })
    }

    /// Build a device straight from one JSON object of a device list.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        Self::new(DeviceSettings::from_value(value)?)
    }

    /// Address used to reach the device; reported as `ip` in records.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Display name; reported as `device` in records. Defaults to the host.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn hostkey_verify(&self) -> bool {
        self.hostkey_verify
    }

    pub fn allow_agent(&self) -> bool {
        self.allow_agent
    }

    pub fn look_for_keys(&self) -> bool {
        self.look_for_keys
    }

    pub fn device_params(&self) -> &Map<String, Value> {
        &self.device_params
    }

    /// Get the socket address for connection.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn resolve_bool(
    value: Option<BoolOption>,
    option: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    value.map_or(Ok(default), |v| v.parse(option))
}
