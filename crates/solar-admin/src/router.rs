use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::actions::{ActionError, ActionLog, ActionRequest, AdminAction};
use crate::catalog::{AdminCatalog, DatasetKind, DatasetPage};
use crate::dashboard::DashboardSummary;
use crate::error::AppError;
use crate::labels::{Language, TagView};
use crate::listing::{ListQueryError, ListQueryParams};
use crate::settings::{ConfigRepository, SettingsService, SettingsServiceError, SystemSettings};

/// Shared state behind the admin endpoints.
pub struct AdminState<R> {
    pub catalog: Arc<AdminCatalog>,
    pub actions: ActionLog,
    pub settings: SettingsService<R>,
    pub page_size: usize,
    pub language: Language,
}

impl<R> AdminState<R>
where
    R: ConfigRepository + 'static,
{
    pub fn new(
        catalog: Arc<AdminCatalog>,
        repository: Arc<R>,
        page_size: usize,
        language: Language,
    ) -> Self {
        Self {
            actions: ActionLog::new(Arc::clone(&catalog)),
            catalog,
            settings: SettingsService::new(repository),
            page_size,
            language,
        }
    }

    fn language_from(&self, raw: Option<&str>) -> Language {
        raw.map_or(self.language, Language::from_code)
    }
}

/// Router builder exposing the admin listing, dashboard, settings and action endpoints.
pub fn admin_router<R>(state: Arc<AdminState<R>>) -> Router
where
    R: ConfigRepository + 'static,
{
    Router::new()
        .route("/api/v1/admin/dashboard", get(dashboard_handler::<R>))
        .route(
            "/api/v1/admin/settings",
            get(settings_handler::<R>).put(update_settings_handler::<R>),
        )
        .route(
            "/api/v1/admin/actions",
            post(submit_action_handler::<R>).get(list_actions_handler::<R>),
        )
        .route("/api/v1/admin/:dataset", get(list_handler::<R>))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ListingResponse {
    dataset: DatasetKind,
    language: Language,
    available_actions: Vec<TagView>,
    #[serde(flatten)]
    page: DatasetPage,
}

pub(crate) async fn list_handler<R>(
    State(state): State<Arc<AdminState<R>>>,
    Path(dataset): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError>
where
    R: ConfigRepository + 'static,
{
    let kind = DatasetKind::from_name(&dataset)
        .ok_or_else(|| ListQueryError::UnknownDataset(dataset.clone()))?;
    let lang = state.language_from(
        pairs
            .iter()
            .find(|(key, _)| key == "lang")
            .map(|(_, value)| value.as_str()),
    );

    let params = ListQueryParams::from_pairs(pairs);
    let page = state.catalog.query(kind, params, state.page_size, lang)?;

    let body = ListingResponse {
        dataset: kind,
        language: lang,
        available_actions: AdminAction::available_for(kind)
            .into_iter()
            .map(|action| TagView::of(action, lang))
            .collect(),
        page,
    };
    Ok((StatusCode::OK, Json(body)).into_response())
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct LanguageQuery {
    lang: Option<String>,
}

pub(crate) async fn dashboard_handler<R>(
    State(state): State<Arc<AdminState<R>>>,
    Query(query): Query<LanguageQuery>,
) -> Response
where
    R: ConfigRepository + 'static,
{
    let lang = state.language_from(query.lang.as_deref());
    let summary = DashboardSummary::build(&state.catalog, lang);
    (StatusCode::OK, Json(summary)).into_response()
}

pub(crate) async fn settings_handler<R>(State(state): State<Arc<AdminState<R>>>) -> Response
where
    R: ConfigRepository + 'static,
{
    match state.settings.current() {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(err) => settings_error_response(err),
    }
}

pub(crate) async fn update_settings_handler<R>(
    State(state): State<Arc<AdminState<R>>>,
    Json(settings): Json<SystemSettings>,
) -> Response
where
    R: ConfigRepository + 'static,
{
    match state.settings.update(settings) {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(err) => settings_error_response(err),
    }
}

fn settings_error_response(err: SettingsServiceError) -> Response {
    match err {
        SettingsServiceError::Invalid(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        SettingsServiceError::Repository(error) => {
            warn!(error = %error, "settings repository failure");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_action_handler<R>(
    State(state): State<Arc<AdminState<R>>>,
    Json(request): Json<ActionRequest>,
) -> Response
where
    R: ConfigRepository + 'static,
{
    match state.actions.submit(request) {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(receipt)).into_response(),
        Err(error @ ActionError::NotFound { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error @ ActionError::NotApplicable { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_actions_handler<R>(State(state): State<Arc<AdminState<R>>>) -> Response
where
    R: ConfigRepository + 'static,
{
    (StatusCode::OK, Json(state.actions.receipts())).into_response()
}
