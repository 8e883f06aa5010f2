use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::labels::Language;

pub const MIN_CREDIT_SCORE_FLOOR: u16 = 300;
pub const MIN_CREDIT_SCORE_CEILING: u16 = 850;

/// Platform-wide settings edited from the admin settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub platform_name: String,
    pub default_language: Language,
    pub maintenance_mode: bool,
    /// Largest financing request accepted, in whole riyals.
    pub max_bnpl_amount: u64,
    pub min_credit_score: u16,
    pub session_timeout_minutes: u32,
    pub require_two_factor: bool,
    pub support_email: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            platform_name: "Solar Marketplace".to_string(),
            default_language: Language::English,
            maintenance_mode: false,
            max_bnpl_amount: 500_000,
            min_credit_score: 600,
            session_timeout_minutes: 30,
            require_two_factor: true,
            support_email: "support@solar-marketplace.sa".to_string(),
        }
    }
}

impl SystemSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.platform_name.trim().is_empty() {
            return Err(SettingsError::EmptyPlatformName);
        }
        if self.session_timeout_minutes == 0 {
            return Err(SettingsError::ZeroSessionTimeout);
        }
        if self.max_bnpl_amount == 0 {
            return Err(SettingsError::ZeroMaxBnplAmount);
        }
        if !(MIN_CREDIT_SCORE_FLOOR..=MIN_CREDIT_SCORE_CEILING).contains(&self.min_credit_score) {
            return Err(SettingsError::CreditScoreOutOfRange(self.min_credit_score));
        }
        if !self.support_email.contains('@') {
            return Err(SettingsError::InvalidSupportEmail(
                self.support_email.clone(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("platform name must not be empty")]
    EmptyPlatformName,
    #[error("session timeout must be at least one minute")]
    ZeroSessionTimeout,
    #[error("maximum BNPL amount must be greater than zero")]
    ZeroMaxBnplAmount,
    #[error(
        "minimum credit score {0} is outside {}..={}",
        MIN_CREDIT_SCORE_FLOOR,
        MIN_CREDIT_SCORE_CEILING
    )]
    CreditScoreOutOfRange(u16),
    #[error("support email '{0}' is not an address")]
    InvalidSupportEmail(String),
}

/// Storage port for the settings document.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<SystemSettings, SaveError>;
    fn save(&self, settings: &SystemSettings) -> Result<(), SaveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsServiceError {
    #[error(transparent)]
    Invalid(#[from] SettingsError),
    #[error(transparent)]
    Repository(#[from] SaveError),
}

/// Validates edits before handing them to the repository.
pub struct SettingsService<R> {
    repository: Arc<R>,
}

impl<R> SettingsService<R>
where
    R: ConfigRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> Result<SystemSettings, SettingsServiceError> {
        Ok(self.repository.load()?)
    }

    pub fn update(&self, settings: SystemSettings) -> Result<SystemSettings, SettingsServiceError> {
        if let Err(err) = settings.validate() {
            warn!(error = %err, "settings update rejected");
            return Err(err.into());
        }

        self.repository.save(&settings)?;
        info!(
            platform_name = %settings.platform_name,
            maintenance_mode = settings.maintenance_mode,
            default_language = settings.default_language.code(),
            "system settings saved"
        );
        Ok(settings)
    }
}
