//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all Linkflow data files and directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Canonical member roster (`data/members.json`).
    pub roster_file: PathBuf,
    /// Uploaded member photos (`data/uploads/`).
    pub uploads: PathBuf,
    /// Seen social-login identifiers (`data/identities.json`).
    pub identities_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            roster_file: root.join("members.json"),
            uploads: root.join("uploads"),
            identities_file: root.join("identities.json"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(&self.uploads)?;
        Ok(())
    }
}

/// OAuth client credentials for one identity provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderCredentials {
    fn from_env(id_var: &str, secret_var: &str) -> Self {
        Self {
            client_id: std::env::var(id_var).unwrap_or_default(),
            client_secret: std::env::var(secret_var).unwrap_or_default(),
        }
    }
}

/// Top-level Linkflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkflowConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Secret used to mint session credentials.
    pub session_secret: String,
    /// Kakao OAuth credentials.
    pub kakao: ProviderCredentials,
    /// Naver OAuth credentials.
    pub naver: ProviderCredentials,
}

impl LinkflowConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let data_paths = DataPaths::new(data_dir)?;

        let session_secret =
            std::env::var("LINKFLOW_SESSION_SECRET").unwrap_or_else(|_| "linkflow-dev".to_string());

        Ok(Self {
            port,
            data_paths,
            session_secret,
            kakao: ProviderCredentials::from_env("KAKAO_CLIENT_ID", "KAKAO_CLIENT_SECRET"),
            naver: ProviderCredentials::from_env("NAVER_CLIENT_ID", "NAVER_CLIENT_SECRET"),
        })
    }
}
