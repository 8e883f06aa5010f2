use metrics_exporter_prometheus::PrometheusHandle;
use solar_admin::catalog::{AdminCatalog, DatasetKind};
use solar_admin::error::AppError;
use solar_admin::listing::ListQueryParams;
use solar_admin::settings::{ConfigRepository, SaveError, SystemSettings};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Settings store held for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryConfigRepository {
    settings: Arc<Mutex<SystemSettings>>,
}

impl InMemoryConfigRepository {
    pub(crate) fn with_settings(settings: SystemSettings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load(&self) -> Result<SystemSettings, SaveError> {
        let guard = self
            .settings
            .lock()
            .map_err(|_| SaveError::Unavailable("settings mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, settings: &SystemSettings) -> Result<(), SaveError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|_| SaveError::Unavailable("settings mutex poisoned".to_string()))?;
        *guard = settings.clone();
        Ok(())
    }
}

/// Loads CSV exports from `data_dir` when configured, otherwise the built-in fixtures.
pub(crate) fn load_catalog(data_dir: Option<&Path>) -> Result<AdminCatalog, AppError> {
    match data_dir {
        Some(dir) => Ok(AdminCatalog::from_dir(dir)?),
        None => {
            info!("no data directory configured, serving fixtures");
            Ok(AdminCatalog::fixtures())
        }
    }
}

pub(crate) fn parse_dataset(raw: &str) -> Result<DatasetKind, String> {
    DatasetKind::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = DatasetKind::ALL
            .iter()
            .map(|kind| kind.route_segment())
            .collect();
        format!("unknown dataset '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if ListQueryParams::is_reserved(key.trim()) => Err(format!(
            "'{}' is a listing option, not a filter column",
            key.trim()
        )),
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_split_on_the_first_equals_sign() {
        assert_eq!(
            parse_filter("assigned_to = Field Ops"),
            Ok(("assigned_to".to_string(), "Field Ops".to_string()))
        );
        assert_eq!(
            parse_filter("subject=a=b"),
            Ok(("subject".to_string(), "a=b".to_string()))
        );
        assert!(parse_filter("=pending").is_err());
        assert!(parse_filter("pending").is_err());
    }

    #[test]
    fn filters_reject_listing_option_keys() {
        for raw in ["lang=ar", "page=2", " search = panel", "q=x", "page_size=5"] {
            let err = parse_filter(raw).expect_err("reserved key is refused");
            assert!(err.contains("listing option"), "{raw}: {err}");
        }
        assert!(parse_filter("language=ar").is_ok());
    }

    #[test]
    fn settings_repository_round_trips() {
        let repository = InMemoryConfigRepository::default();
        let mut settings = repository.load().expect("loads defaults");
        settings.platform_name = "Shams".to_string();
        repository.save(&settings).expect("saves");
        assert_eq!(repository.load().expect("loads"), settings);
    }

    #[test]
    fn missing_data_dir_serves_fixtures() {
        let catalog = load_catalog(None).expect("fixtures load");
        assert_eq!(catalog, AdminCatalog::fixtures());
    }
}
