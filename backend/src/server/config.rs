//! Service settings and the HTTP server configuration object.
//!
//! [`AddressServiceSettings`] is loaded through OrthoConfig from CLI flags,
//! `ADDRESS_SERVICE_*` environment variables and an optional config file.
//! Accessors apply defaults and validate values so `main` can fail fast.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Problems with configured values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A required setting has no value.
    #[error("missing required setting {key}")]
    Missing { key: &'static str },
    /// A setting has a value that cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl SettingsError {
    fn invalid(key: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Runtime settings for the address service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADDRESS_SERVICE")]
pub struct AddressServiceSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Required to serve.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Nominatim-compatible search endpoint.
    pub geocoder_endpoint: Option<String>,
    /// User agent sent to the geocoder.
    pub geocoder_user_agent: Option<String>,
    /// Geocoder request timeout in seconds.
    pub geocoder_timeout_secs: Option<u64>,
}

impl AddressServiceSettings {
    /// Bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err| SettingsError::invalid("bind_addr", raw, err))
    }

    /// Database URL. The service refuses to start without one.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::Missing {
                key: "database_url",
            })
    }

    /// Pool size, defaulting to 10. Zero is rejected.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections {
            None => Ok(DEFAULT_DB_MAX_CONNECTIONS),
            Some(0) => Err(SettingsError::invalid(
                "db_max_connections",
                "0",
                "must be at least 1",
            )),
            Some(size) => Ok(size),
        }
    }

    /// Geocoder endpoint, defaulting to the public Nominatim search API.
    pub fn geocoder_endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self
            .geocoder_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GEOCODER_ENDPOINT);
        Url::parse(raw).map_err(|err| SettingsError::invalid("geocoder_endpoint", raw, err))
    }

    /// User agent for geocoder requests.
    pub fn geocoder_user_agent(&self) -> &str {
        self.geocoder_user_agent
            .as_deref()
            .unwrap_or(address_service::outbound::geocoding::DEFAULT_USER_AGENT)
    }

    /// Geocoder request timeout, defaulting to 10 seconds. Zero is rejected.
    pub fn geocoder_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .geocoder_timeout_secs
            .unwrap_or(DEFAULT_GEOCODER_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::invalid(
                "geocoder_timeout_secs",
                "0",
                "must be at least 1",
            )),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration for the bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

#[cfg(test)]
mod tests {
    //! Settings loading and defaulting.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 6] = [
        "ADDRESS_SERVICE_BIND_ADDR",
        "ADDRESS_SERVICE_DATABASE_URL",
        "ADDRESS_SERVICE_DB_MAX_CONNECTIONS",
        "ADDRESS_SERVICE_GEOCODER_ENDPOINT",
        "ADDRESS_SERVICE_GEOCODER_USER_AGENT",
        "ADDRESS_SERVICE_GEOCODER_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> AddressServiceSettings {
        AddressServiceSettings::load_from_iter([OsString::from("address-service")])
            .expect("config should load")
    }

    fn empty() -> AddressServiceSettings {
        AddressServiceSettings {
            bind_addr: None,
            database_url: None,
            db_max_connections: None,
            geocoder_endpoint: None,
            geocoder_user_agent: None,
            geocoder_timeout_secs: None,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(settings.db_max_connections(), Ok(10));
        assert_eq!(
            settings.geocoder_endpoint().expect("default endpoint").as_str(),
            DEFAULT_GEOCODER_ENDPOINT
        );
        assert_eq!(settings.geocoder_user_agent(), "address-service/0.1");
        assert_eq!(settings.geocoder_timeout(), Ok(Duration::from_secs(10)));
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::Missing {
                key: "database_url"
            })
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ADDRESS_SERVICE_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ADDRESS_SERVICE_DATABASE_URL",
                Some("postgres://localhost/addresses".to_owned()),
            ),
            ("ADDRESS_SERVICE_DB_MAX_CONNECTIONS", Some("3".to_owned())),
            (
                "ADDRESS_SERVICE_GEOCODER_ENDPOINT",
                Some("http://localhost:7070/search".to_owned()),
            ),
            (
                "ADDRESS_SERVICE_GEOCODER_USER_AGENT",
                Some("address-tests/1.0".to_owned()),
            ),
            ("ADDRESS_SERVICE_GEOCODER_TIMEOUT_SECS", Some("2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.database_url(),
            Ok("postgres://localhost/addresses")
        );
        assert_eq!(settings.db_max_connections(), Ok(3));
        assert_eq!(
            settings.geocoder_endpoint().expect("endpoint").as_str(),
            "http://localhost:7070/search"
        );
        assert_eq!(settings.geocoder_user_agent(), "address-tests/1.0");
        assert_eq!(settings.geocoder_timeout(), Ok(Duration::from_secs(2)));
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(None)]
    fn blank_database_url_is_missing(#[case] url: Option<&str>) {
        let settings = AddressServiceSettings {
            database_url: url.map(str::to_owned),
            ..empty()
        };
        assert!(matches!(
            settings.database_url(),
            Err(SettingsError::Missing { .. })
        ));
    }

    #[rstest]
    fn malformed_values_are_rejected() {
        let settings = AddressServiceSettings {
            bind_addr: Some("localhost".to_owned()),
            db_max_connections: Some(0),
            geocoder_endpoint: Some("not a url".to_owned()),
            geocoder_timeout_secs: Some(0),
            ..empty()
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::Invalid { key: "bind_addr", .. })
        ));
        assert!(settings.db_max_connections().is_err());
        assert!(settings.geocoder_endpoint().is_err());
        assert!(settings.geocoder_timeout().is_err());
    }
}
