use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use common::crypto::{random_server_secret, EngineSecret};
use common::tree::Server;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "rumpel";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SERVER_SECRET_FILE_NAME: &str = "server.secret";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Secret shared with trusted clients, used to compute storage locations
    #[serde(default)]
    pub cloud_secret: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the state directory (~/.rumpel)
    pub rumpel_dir: PathBuf,
    /// Path to the server secret
    pub server_secret_path: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the state directory path (custom or default ~/.rumpel)
    pub fn rumpel_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new state directory with a fresh server secret
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let rumpel_dir = Self::rumpel_dir(custom_path)?;

        if rumpel_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&rumpel_dir)?;

        // Generate and save the server secret
        let secret = random_server_secret().map_err(|e| StateError::Secret(e.to_string()))?;
        let server_secret_path = rumpel_dir.join(SERVER_SECRET_FILE_NAME);
        write_private(&server_secret_path, secret.bytes())?;

        let config = config.unwrap_or_default();
        let config_path = rumpel_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        write_private(&config_path, config_toml.as_bytes())?;

        tracing::info!(path = %rumpel_dir.display(), "initialized state directory");

        Ok(Self {
            rumpel_dir,
            server_secret_path,
            config_path,
            config,
        })
    }

    /// Load existing state from the state directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let rumpel_dir = Self::rumpel_dir(custom_path)?;

        if !rumpel_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let server_secret_path = rumpel_dir.join(SERVER_SECRET_FILE_NAME);
        let config_path = rumpel_dir.join(CONFIG_FILE_NAME);

        if !server_secret_path.exists() {
            return Err(StateError::MissingFile(SERVER_SECRET_FILE_NAME.to_string()));
        }
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            rumpel_dir,
            server_secret_path,
            config_path,
            config,
        })
    }

    /// Load only the configuration, for client side use
    ///
    /// Unlike [`AppState::load`] this does not require a server secret, so it
    /// works on machines that were handed a config file and nothing else.
    pub fn load_config(custom_path: Option<PathBuf>) -> Result<AppConfig, StateError> {
        let rumpel_dir = Self::rumpel_dir(custom_path)?;

        if !rumpel_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = rumpel_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&config_toml)?)
    }

    /// Load the server secret from its file
    pub fn load_server_secret(&self) -> Result<EngineSecret, StateError> {
        let mut bytes = fs::read(&self.server_secret_path)?;
        // tolerate a trailing newline left by an editor
        while bytes.last().is_some_and(|b| b.is_ascii_whitespace()) {
            bytes.pop();
        }
        if bytes.is_empty() {
            return Err(StateError::Secret("server secret is empty".to_string()));
        }
        Ok(EngineSecret::from(bytes))
    }

    /// Build a server over the stored secrets
    ///
    /// `cloud_secret` replaces the configured cloud secret when given.
    pub fn server(&self, cloud_secret: Option<&str>) -> Result<Server, StateError> {
        let cloud_secret = cloud_secret.unwrap_or(&self.config.cloud_secret);
        Ok(Server::new(self.load_server_secret()?, cloud_secret))
    }
}

/// Create a new file readable by the owner only and write `contents` to it
fn write_private(path: &Path, contents: &[u8]) -> Result<(), StateError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("rumpel directory not initialized. Run 'rumpel init' first")]
    NotInitialized,

    #[error("rumpel directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("invalid server secret: {0}")]
    Secret(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::testkit;
    use common::tree::Client;
    use tempfile::TempDir;

    fn state_dir(temp: &TempDir) -> PathBuf {
        temp.path().join("rumpel")
    }

    #[test]
    fn test_init_then_load() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            cloud_secret: "shared".to_string(),
        };

        let state = AppState::init(Some(state_dir(&temp)), Some(config.clone())).unwrap();
        assert!(state.server_secret_path.exists());
        assert!(state.config_path.exists());

        let loaded = AppState::load(Some(state_dir(&temp))).unwrap();
        assert_eq!(loaded.config, config);
        assert_eq!(
            loaded.load_server_secret().unwrap().len(),
            common::crypto::SERVER_SECRET_BLOCKS * 52
        );
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        AppState::init(Some(state_dir(&temp)), None).unwrap();
        assert!(matches!(
            AppState::init(Some(state_dir(&temp)), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_load_uninitialized() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            AppState::load(Some(state_dir(&temp))),
            Err(StateError::NotInitialized)
        ));
    }

    #[test]
    fn test_load_missing_secret() {
        let temp = TempDir::new().unwrap();
        let state = AppState::init(Some(state_dir(&temp)), None).unwrap();
        fs::remove_file(&state.server_secret_path).unwrap();

        assert!(matches!(
            AppState::load(Some(state_dir(&temp))),
            Err(StateError::MissingFile(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_init_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let state = AppState::init(Some(state_dir(&temp)), None).unwrap();

        for path in [&state.server_secret_path, &state.config_path] {
            let mode = fs::metadata(path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600, "{}", path.display());
        }
    }

    #[test]
    fn test_load_config_without_server_secret() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            cloud_secret: "shared".to_string(),
        };
        let state = AppState::init(Some(state_dir(&temp)), Some(config.clone())).unwrap();
        fs::remove_file(&state.server_secret_path).unwrap();

        assert_eq!(AppState::load_config(Some(state_dir(&temp))).unwrap(), config);
    }

    #[test]
    fn test_load_config_errors() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            AppState::load_config(Some(state_dir(&temp))),
            Err(StateError::NotInitialized)
        ));

        let state = AppState::init(Some(state_dir(&temp)), None).unwrap();
        fs::write(&state.config_path, "cloud_secret = [").unwrap();
        assert!(matches!(
            AppState::load_config(Some(state_dir(&temp))),
            Err(StateError::TomlDe(_))
        ));

        fs::remove_file(&state.config_path).unwrap();
        assert!(matches!(
            AppState::load_config(Some(state_dir(&temp))),
            Err(StateError::MissingFile(_))
        ));
    }

    #[test]
    fn test_config_defaults_cloud_secret() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.cloud_secret, "");
    }

    #[test]
    fn test_server_and_client_share_locations() {
        let temp = TempDir::new().unwrap();
        let state = AppState::init(Some(state_dir(&temp)), None).unwrap();

        let server = state.server(None).unwrap();
        let client = Client::new(state.config.cloud_secret.as_str());

        let a = server.lookup(testkit::KNOCK_KNOCK_ROOT).unwrap();
        let b = client.lookup(testkit::KNOCK_KNOCK_ROOT).unwrap();
        assert_eq!(a.location(), testkit::KNOCK_KNOCK_LOCATION);
        assert_eq!(a.location(), b.location());

        let shared = Client::new("shared");
        assert_eq!(
            shared.lookup(testkit::KNOCK_KNOCK_ROOT).unwrap().location(),
            testkit::KNOCK_KNOCK_SHARED_LOCATION
        );
    }
}
