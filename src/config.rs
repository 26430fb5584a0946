use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required listen port argument")]
    MissingPort,

    #[error("Invalid listen port: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Port to listen on, bound on all interfaces.
    pub port: u16,
    /// Whether to enrich reviews with ratings from the ratings service.
    pub ratings_enabled: bool,
    /// Display color for the stars attached to each review.
    pub star_color: String,
    /// Endpoint of the ratings service.
    pub ratings_service: String,
}

const DEFAULT_STAR_COLOR: &str = "black";
const DEFAULT_RATINGS_SERVICE: &str = "http://ratings:9080";

impl AppConfig {
    /// Load configuration from the command line and environment.
    ///
    /// The listen port is a required positional argument; everything else
    /// comes from environment variables with defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let port = env::args().nth(1).ok_or(ConfigError::MissingPort)?;

        Self::from_parts(
            &port,
            env::var("ENABLE_RATINGS").ok(),
            env::var("STAR_COLOR").ok(),
            env::var("RATINGS_SERVICE").ok(),
        )
    }

    fn from_parts(
        port: &str,
        ratings_enabled: Option<String>,
        star_color: Option<String>,
        ratings_service: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        if port == 0 {
            return Err(ConfigError::InvalidPort("0".to_string()));
        }

        Ok(Self {
            port,
            ratings_enabled: ratings_enabled.as_deref().is_some_and(parse_flag),
            star_color: star_color.unwrap_or_else(|| DEFAULT_STAR_COLOR.to_string()),
            ratings_service: ratings_service
                .as_deref()
                .map(normalize_endpoint)
                .unwrap_or_else(|| DEFAULT_RATINGS_SERVICE.to_string()),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// The ratings endpoint is usually given as a bare `host:port`; the gRPC
/// transport needs a full URI.
fn normalize_endpoint(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let config = AppConfig::from_parts("9080", None, None, None).unwrap();
        assert_eq!(config.port, 9080);
        assert!(!config.ratings_enabled);
        assert_eq!(config.star_color, "black");
        assert_eq!(config.ratings_service, "http://ratings:9080");
    }

    #[test]
    fn truthy_flag_values_enable_ratings() {
        for value in ["1", "true", "TRUE", "yes", "on", " On "] {
            let config =
                AppConfig::from_parts("9080", Some(value.to_string()), None, None).unwrap();
            assert!(config.ratings_enabled, "{value:?} should enable ratings");
        }
    }

    #[test]
    fn other_flag_values_disable_ratings() {
        for value in ["0", "false", "off", "", "enabled"] {
            let config =
                AppConfig::from_parts("9080", Some(value.to_string()), None, None).unwrap();
            assert!(!config.ratings_enabled, "{value:?} should disable ratings");
        }
    }

    #[test]
    fn star_color_is_taken_from_env() {
        let config =
            AppConfig::from_parts("9080", None, Some("red".to_string()), None).unwrap();
        assert_eq!(config.star_color, "red");
    }

    #[test]
    fn bare_ratings_address_gets_a_scheme() {
        let config =
            AppConfig::from_parts("9080", None, None, Some("ratings:9080".to_string())).unwrap();
        assert_eq!(config.ratings_service, "http://ratings:9080");
    }

    #[test]
    fn ratings_address_with_scheme_is_kept() {
        let config = AppConfig::from_parts(
            "9080",
            None,
            None,
            Some("http://localhost:19080".to_string()),
        )
        .unwrap();
        assert_eq!(config.ratings_service, "http://localhost:19080");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(matches!(
            AppConfig::from_parts("abc", None, None, None),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn port_zero_is_rejected() {
        assert!(matches!(
            AppConfig::from_parts("0", None, None, None),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
