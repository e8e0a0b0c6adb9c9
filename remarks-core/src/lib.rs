//! Remarks Core - the annotated sample operations and the marker scanner
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core entities and checks (User, discount tiers, markers)
//! - **ports**: Trait definitions for external dependencies (Notifier)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (console notifier)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use adapters::ConsoleNotifier;
use config::Config;
use services::{NotificationService, ScanService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Annotation, AnnotationTag, Channel, CustomerTier, Severity, User, UserRole};

/// Main context for remarks operations
///
/// Holds the configuration and the services that depend on it. Services
/// without settings (users, payments, the demo) are built directly.
pub struct RemarksContext {
    pub config: Config,
    pub notification_service: NotificationService,
    pub scan_service: ScanService,
}

impl RemarksContext {
    /// Create a context from the settings in `remarks_dir`
    pub fn new(remarks_dir: &Path) -> Result<Self> {
        let config = Config::load(remarks_dir)?;
        Ok(Self::with_config(config))
    }

    /// Create a context from an already loaded config
    pub fn with_config(config: Config) -> Self {
        let notification_service =
            NotificationService::new(Box::new(ConsoleNotifier::stdout()), config.channel);

        Self {
            notification_service,
            scan_service: ScanService::new(config.clone()),
            config,
        }
    }
}
