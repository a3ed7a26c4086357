use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment selecting the Firebase project and credential file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "invalid environment '{other}' (expected 'staging' or 'production')"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Push delivery configuration, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct PushConfig {
    pub environment: Environment,
    pub project_id: String,
    pub credentials_path: PathBuf,
}

impl PushConfig {
    /// Create the configuration for an environment.
    pub fn for_environment(environment: Environment) -> Self {
        let (project_id, credentials_path) = match environment {
            Environment::Staging => (
                "miso-mobile-staging",
                "./miso-mobile-firebase-adminsdk-staging.json",
            ),
            Environment::Production => ("miso-mobile", "./miso-mobile-firebase-adminsdk.json"),
        };

        Self {
            environment,
            project_id: project_id.to_string(),
            credentials_path: PathBuf::from(credentials_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(
            "production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("bogus".parse::<Environment>().is_err());
        assert!("Production".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn test_staging_config() {
        let config = PushConfig::for_environment(Environment::Staging);
        assert_eq!(config.project_id, "miso-mobile-staging");
        assert!(config
            .credentials_path
            .to_string_lossy()
            .contains("miso-mobile-firebase-adminsdk-staging"));
    }

    #[test]
    fn test_production_config() {
        let config = PushConfig::for_environment(Environment::Production);
        assert_eq!(config.project_id, "miso-mobile");
        let path = config.credentials_path.to_string_lossy().into_owned();
        assert!(path.ends_with("miso-mobile-firebase-adminsdk.json"));
        assert!(!path.contains("staging"));
    }
}
