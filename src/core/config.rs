//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gifport/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Everything collapses into one immutable [`ResolvedConfig`] constructed at
//! startup and passed by reference - the fixed program id, cluster and key
//! paths are never module-level globals.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GifportConfig {
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub program: ProgramConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub authority: AuthorityConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClusterConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProgramConfig {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WalletConfig {
    pub keypair: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthorityConfig {
    pub keypair: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

/// The pre-deployed portal program on devnet.
pub const DEFAULT_PROGRAM_ID: &str = "Ez2j2EGUdws598Swm2Nw6aQdywp7ebBmap57wdkkYVMF";
pub const DEFAULT_CLUSTER_URL: &str = "https://api.devnet.solana.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub cluster_url: String,
    pub program_id: Pubkey,
    pub wallet_keypair: PathBuf,
    pub authority_keypair: PathBuf,
    pub data_dir: PathBuf,
}

impl ResolvedConfig {
    /// Default config pointed at an arbitrary cluster URL. Used by tests that
    /// stand up their own RPC endpoint.
    pub fn for_cluster(cluster_url: String) -> Self {
        let data_dir = data_dir().unwrap_or_else(|| PathBuf::from(".gifport"));
        ResolvedConfig {
            cluster_url,
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).expect("default id is valid base58"),
            wallet_keypair: default_wallet_keypair(),
            authority_keypair: data_dir.join("base-account.json"),
            data_dir,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    ProgramId(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::ProgramId(id) => write!(f, "invalid program id: {id}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gifport`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gifport"))
}

/// Returns the path to `~/.gifport/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

fn default_wallet_keypair() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".config").join("solana").join("id.json"))
        .unwrap_or_else(|| PathBuf::from("id.json"))
}

/// Load config from `~/.gifport/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GifportConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GifportConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GifportConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GifportConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GifportConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Gifport Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [cluster]
# url = "https://api.devnet.solana.com"   # Or set GIFPORT_CLUSTER env var

# [program]
# id = "Ez2j2EGUdws598Swm2Nw6aQdywp7ebBmap57wdkkYVMF"

# [wallet]
# keypair = "/home/you/.config/solana/id.json"   # Or set GIFPORT_KEYPAIR env var

# [authority]
# keypair = "/home/you/.gifport/base-account.json"   # Generated on first run
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_cluster` and `cli_keypair` are from CLI flags (None = not specified).
pub fn resolve(
    config: &GifportConfig,
    cli_cluster: Option<&str>,
    cli_keypair: Option<&PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    let data_dir = data_dir().unwrap_or_else(|| PathBuf::from(".gifport"));

    // Cluster: CLI → env → config → default
    let cluster_url = cli_cluster
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GIFPORT_CLUSTER").ok())
        .or_else(|| config.cluster.url.clone())
        .unwrap_or_else(|| DEFAULT_CLUSTER_URL.to_string());

    // Wallet keypair: CLI → env → config → solana CLI default
    let wallet_keypair = cli_keypair
        .cloned()
        .or_else(|| std::env::var("GIFPORT_KEYPAIR").ok().map(PathBuf::from))
        .or_else(|| config.wallet.keypair.clone())
        .unwrap_or_else(default_wallet_keypair);

    // Program id: config → default
    let program_id_str = config
        .program
        .id
        .clone()
        .unwrap_or_else(|| DEFAULT_PROGRAM_ID.to_string());
    let program_id =
        Pubkey::from_str(&program_id_str).map_err(|_| ConfigError::ProgramId(program_id_str))?;

    // Authority keypair: config → data-dir default
    let authority_keypair = config
        .authority
        .keypair
        .clone()
        .unwrap_or_else(|| data_dir.join("base-account.json"));

    Ok(ResolvedConfig {
        cluster_url,
        program_id,
        wallet_keypair,
        authority_keypair,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GifportConfig::default();
        assert!(config.cluster.url.is_none());
        assert!(config.program.id.is_none());
        assert!(config.wallet.keypair.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = GifportConfig::default();
        let resolved = resolve(&config, None, None).unwrap();
        assert_eq!(resolved.cluster_url, DEFAULT_CLUSTER_URL);
        assert_eq!(
            resolved.program_id,
            Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap()
        );
        assert!(resolved.authority_keypair.ends_with("base-account.json"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GifportConfig {
            cluster: ClusterConfig {
                url: Some("http://localhost:8899".to_string()),
            },
            wallet: WalletConfig {
                keypair: Some(PathBuf::from("/tmp/wallet.json")),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, None).unwrap();
        assert_eq!(resolved.cluster_url, "http://localhost:8899");
        assert_eq!(resolved.wallet_keypair, PathBuf::from("/tmp/wallet.json"));
    }

    #[test]
    fn test_resolve_cli_cluster_wins() {
        let config = GifportConfig {
            cluster: ClusterConfig {
                url: Some("http://localhost:8899".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://localhost:9999"), None).unwrap();
        assert_eq!(resolved.cluster_url, "http://localhost:9999");
    }

    #[test]
    fn test_resolve_rejects_bad_program_id() {
        let config = GifportConfig {
            program: ProgramConfig {
                id: Some("not-base58!!".to_string()),
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve(&config, None, None),
            Err(ConfigError::ProgramId(_))
        ));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[cluster]
url = "http://localhost:8899"
"#;
        let config: GifportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cluster.url.as_deref(), Some("http://localhost:8899"));
        assert!(config.program.id.is_none());
        assert!(config.wallet.keypair.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[cluster]
url = "http://localhost:8899"

[program]
id = "Ez2j2EGUdws598Swm2Nw6aQdywp7ebBmap57wdkkYVMF"

[wallet]
keypair = "/tmp/id.json"

[authority]
keypair = "/tmp/base.json"
"#;
        let config: GifportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.program.id.as_deref(), Some(DEFAULT_PROGRAM_ID));
        assert_eq!(
            config.authority.keypair,
            Some(PathBuf::from("/tmp/base.json"))
        );
        let resolved = resolve(&config, None, None).unwrap();
        assert_eq!(resolved.authority_keypair, PathBuf::from("/tmp/base.json"));
    }
}
