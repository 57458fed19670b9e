use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Where the static host listens, read from `ECC_HOST`, `ECC_PORT` and
/// `ECC_OPEN_BROWSER`. `main` loads a `.env` file first, so these may also be
/// set there.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values fall back to the default and are logged.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("ECC_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("ECC_PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("ignoring invalid ECC_PORT {port:?}"),
            }
        }
        if let Some(open) = lookup("ECC_OPEN_BROWSER") {
            match open.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = true,
                "0" | "false" | "no" => config.open_browser = false,
                _ => log::warn!("ignoring invalid ECC_OPEN_BROWSER {open:?}"),
            }
        }
        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ECC_HOST", "0.0.0.0"),
            ("ECC_PORT", "9000"),
            ("ECC_OPEN_BROWSER", "false"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ECC_HOST", "  "),
            ("ECC_PORT", "eighty"),
            ("ECC_OPEN_BROWSER", "maybe"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
