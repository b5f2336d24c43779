//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create the infra implementations (sqlite store, image host, settings file)
//! - Resolve empty configuration values to their defaults
//! - Inject everything into `AppDeps` behind port traits
//!
//! ## Prohibited
//!
//! - No business logic: wiring never decides what a use case does
//! - No direct use of concrete adapters after `AppDeps` is built
//!
//! > **This is the only place allowed to depend on cf-infra and cf-app
//! > simultaneously.** The privilege is for assembly, not for decisions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cf_app::{AppDeps, AppTunables};
use cf_core::ports::*;
use cf_core::request::DEFAULT_CREATION_WINDOW_SECS;
use cf_core::{AdminRegistry, AppConfig, Chain, ReadContextTracker, WalletAddress};
use cf_infra::db::mappers::CampaignRequestRowMapper;
use cf_infra::db::pool::{init_db_pool, DbPool};
use cf_infra::db::repositories::DieselCampaignRequestRepository;
use cf_infra::db::DieselSqliteExecutor;
use cf_infra::{
    ChainScopedLedgers, FileSettingsRepository, HttpImageHost, InMemoryRequestStore, SystemClock,
};
use tracing::{info, warn};

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_REVEAL_STEP: usize = 9;
pub const DEFAULT_PENDING_PAGE_SIZE: usize = 5;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection (infrastructure initialization failed)
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Image host initialization failed: {0}")]
    ImageHostInit(String),

    #[error("Settings repository initialization failed: {0}")]
    SettingsInit(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),
}

/// Create the SQLite pool, creating the parent directory first.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

fn create_request_store(database_path: &Path) -> WiringResult<Arc<dyn RequestStorePort>> {
    if database_path.as_os_str().is_empty() {
        warn!("No database path configured, campaign requests are kept in memory");
        return Ok(Arc::new(InMemoryRequestStore::new()));
    }

    let pool = create_db_pool(database_path)?;
    info!(path = %database_path.display(), "Campaign request store ready");
    Ok(Arc::new(DieselCampaignRequestRepository::new(
        DieselSqliteExecutor::new(pool),
        CampaignRequestRowMapper,
    )))
}

fn resolve_chain(name: &str) -> WiringResult<Chain> {
    if name.trim().is_empty() {
        return Ok(Chain::default());
    }
    name.trim().parse().map_err(WiringError::Config)
}

fn resolve_settings_path(configured: &Path) -> WiringResult<PathBuf> {
    if !configured.as_os_str().is_empty() {
        return Ok(configured.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join("crowdfund").join(SETTINGS_FILE_NAME))
        .ok_or_else(|| WiringError::SettingsInit("No config directory on this platform".into()))
}

fn or_default(value: u64, default: usize) -> usize {
    match usize::try_from(value) {
        Ok(0) | Err(_) => default,
        Ok(v) => v,
    }
}

fn resolve_tunables(config: &AppConfig) -> AppTunables {
    AppTunables {
        page_size: or_default(config.page_size, DEFAULT_PAGE_SIZE),
        reveal_step: or_default(config.reveal_step, DEFAULT_REVEAL_STEP),
        pending_page_size: or_default(config.pending_page_size, DEFAULT_PENDING_PAGE_SIZE),
        creation_window_secs: if config.creation_window_secs == 0 {
            DEFAULT_CREATION_WINDOW_SECS
        } else {
            config.creation_window_secs
        },
    }
}

/// Assemble all dependencies from configuration.
///
/// The contract system is served by one in-process ledger per chain,
/// selected by the shared read context; a JSON-RPC adapter plugs in at the
/// same three ports.
///
/// # Errors
///
/// Returns `WiringError` if the chain name is unknown or an adapter cannot
/// be initialized (database, HTTP client, settings location).
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let chain = resolve_chain(&config.chain)?;
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let read_context = Arc::new(ReadContextTracker::new(chain));
    let ledgers = Arc::new(ChainScopedLedgers::new(clock.clone(), read_context.clone()));
    let request_store = create_request_store(&config.database_path)?;

    let image_host = HttpImageHost::new(&config.image_upload_url, &config.image_upload_preset)
        .map_err(|e| WiringError::ImageHostInit(format!("{:#}", e)))?;
    if config.image_upload_url.is_empty() {
        warn!("No image upload url configured, request submission will fail");
    }

    let settings_path = resolve_settings_path(&config.settings_path)?;

    let admins = AdminRegistry::new(
        config
            .admin_addresses
            .iter()
            .map(|a| WalletAddress::from_string(a.trim().to_string()))
            .filter(|a| !a.is_empty())
            .collect(),
    );
    if admins.addresses().is_empty() {
        warn!("No administrator addresses configured, campaign requests cannot be reviewed");
    }

    let tunables = resolve_tunables(config);
    info!(
        %chain,
        page_size = tunables.page_size,
        pending_page_size = tunables.pending_page_size,
        admins = admins.addresses().len(),
        "Dependencies wired"
    );

    Ok(AppDeps {
        contract: ledgers.clone(),
        factory: ledgers.clone(),
        wallet: ledgers,
        request_store,
        image_host: Arc::new(image_host),
        settings: Arc::new(FileSettingsRepository::new(settings_path)),
        read_context,
        admins: Arc::new(admins),
        clock,
        tunables,
    })
}
