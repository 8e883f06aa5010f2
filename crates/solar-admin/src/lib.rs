pub mod actions;
pub mod admin;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod labels;
pub mod listing;
pub mod router;
pub mod settings;
pub mod telemetry;

pub use actions::{ActionError, ActionLog, ActionReceipt, ActionRequest, ActionTarget, AdminAction};
pub use catalog::{AdminCatalog, DatasetKind, DatasetPage};
pub use config::{AdminConfig, AppConfig, AppEnvironment};
pub use dashboard::DashboardSummary;
pub use error::AppError;
pub use labels::{Language, Tone};
pub use listing::{ListPage, ListQuery, ListQueryError, ListQueryParams, SortDirection};
pub use router::{admin_router, AdminState};
pub use settings::{ConfigRepository, SaveError, SettingsService, SystemSettings};
