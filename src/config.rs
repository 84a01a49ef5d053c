use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Language used for the fixed texts the portal renders itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Placeholder shown in an activity roster with nobody signed up.
    pub fn no_participants(self) -> &'static str {
        match self {
            Locale::En => "No participants yet.",
            Locale::Fr => "Aucun participant pour l'instant.",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "fr" | "fr-fr" => Ok(Locale::Fr),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PortalConfig {
    pub bind: String,
    pub api_base_url: String,
    pub connect_timeout: Duration,
    pub locale: Locale,
}

impl PortalConfig {
    /// Read settings from the environment (after `.env` has been loaded).
    pub fn from_env() -> Self {
        let bind = env::var("PORTAL_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let api_base_url = env::var("ACTIVITIES_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        let connect_timeout = match env::var("ACTIVITIES_API_CONNECT_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    log::warn!("Ignoring invalid ACTIVITIES_API_CONNECT_TIMEOUT_SECS '{raw}'");
                    Duration::from_secs(10)
                }
            },
            Err(_) => Duration::from_secs(10),
        };

        let locale = match env::var("PORTAL_LOCALE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: UnknownLocale| {
                log::warn!("{e}, falling back to 'en'");
                Locale::En
            }),
            Err(_) => Locale::En,
        };

        Self {
            bind,
            api_base_url,
            connect_timeout,
            locale,
        }
    }
}
