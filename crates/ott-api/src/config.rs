use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "Ott";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            mongo_uri: DEFAULT_MONGO_URI.into(),
            database: DEFAULT_DATABASE.into(),
        }
    }
}

impl ApiConfig {
    /// Reads `PORT`, `OTT_BIND_HOST`, `OTT_MONGO_URI` and `OTT_DATABASE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(port = %raw, default = DEFAULT_PORT, "ignoring unparseable PORT");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("OTT_BIND_HOST").unwrap_or(defaults.host),
            port,
            mongo_uri: lookup("OTT_MONGO_URI").unwrap_or(defaults.mongo_uri),
            database: lookup("OTT_DATABASE").unwrap_or(defaults.database),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
