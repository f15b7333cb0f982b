use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Deployments of the admin API the CLI can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development server.
    Local,
    /// Staging deployment for pre-production testing.
    Staging,
    /// Production back office.
    #[default]
    Production,
    /// Any other server, given by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the admin API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Staging => "https://staging.admin.courier.gr".to_string(),
            Environment::Production => "https://admin.courier.gr".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the environment in priority order: explicit URL, configured URL,
    /// then the named environment (falling back to production).
    pub fn resolve(
        url_override: Option<&str>,
        configured_url: Option<&str>,
        named: Option<&str>,
    ) -> Self {
        let custom = url_override
            .into_iter()
            .chain(configured_url)
            .map(str::trim)
            .find(|url| !url.is_empty());
        if let Some(api_url) = custom {
            return Environment::Custom {
                api_url: api_url.to_string(),
            };
        }
        named
            .and_then(|name| name.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
