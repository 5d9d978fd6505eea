// ============================================================================
// CONFIG - Compile-time configuration (see build.rs and .env.example)
// ============================================================================

const DEFAULT_AUTH_BASE_URL: &str = "http://127.0.0.1:8050";
const DEFAULT_AUTH_TOKEN_PATH: &str = "/api/token/";
const DEFAULT_CREDENTIAL_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub auth_base_url: String,
    pub auth_token_path: String,
    pub credential_storage_key: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            auth_token_path: DEFAULT_AUTH_TOKEN_PATH.to_string(),
            credential_storage_key: DEFAULT_CREDENTIAL_STORAGE_KEY.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from variables captured at compile time.
    pub fn from_env() -> Self {
        Self {
            auth_base_url: option_env!("AUTH_BASE_URL")
                .unwrap_or(DEFAULT_AUTH_BASE_URL)
                .to_string(),
            auth_token_path: option_env!("AUTH_TOKEN_PATH")
                .unwrap_or(DEFAULT_AUTH_TOKEN_PATH)
                .to_string(),
            credential_storage_key: option_env!("CREDENTIAL_STORAGE_KEY")
                .unwrap_or(DEFAULT_CREDENTIAL_STORAGE_KEY)
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
        }
    }

    /// Full URL of the token endpoint, joining base and path with one slash.
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}",
            self.auth_base_url.trim_end_matches('/'),
            self.auth_token_path.trim_start_matches('/')
        )
    }

    /// Level handed to `wasm_logger`. Unknown names fall back to `Info`,
    /// and a disabled logger only lets errors through.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://127.0.0.1:8050", "/api/token/", "http://127.0.0.1:8050/api/token/")]
    #[case("http://127.0.0.1:8050/", "/api/token/", "http://127.0.0.1:8050/api/token/")]
    #[case("https://auth.example.org", "api/token/", "https://auth.example.org/api/token/")]
    fn token_url_joins_with_single_slash(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        let config = AppConfig {
            auth_base_url: base.to_string(),
            auth_token_path: path.to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.token_url(), expected);
    }

    #[test]
    fn default_points_at_local_token_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.token_url(), "http://127.0.0.1:8050/api/token/");
        assert_eq!(config.credential_storage_key, "user");
    }

    #[rstest]
    #[case(true, "debug", log::Level::Debug)]
    #[case(true, "WARN", log::Level::Warn)]
    #[case(true, "bogus", log::Level::Info)]
    #[case(false, "trace", log::Level::Error)]
    fn log_level_parsing(#[case] enabled: bool, #[case] level: &str, #[case] expected: log::Level) {
        let config = AppConfig {
            enable_logging: enabled,
            log_level: level.to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), expected);
    }
}
