use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryConfigRepository};
use crate::routes::with_admin_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use solar_admin::config::AppConfig;
use solar_admin::error::AppError;
use solar_admin::router::AdminState;
use solar_admin::settings::SystemSettings;
use solar_admin::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(config.admin.data_dir.as_deref())?);
    let settings = InMemoryConfigRepository::with_settings(SystemSettings {
        default_language: config.admin.language,
        ..SystemSettings::default()
    });
    let admin_state = Arc::new(AdminState::new(
        catalog,
        Arc::new(settings),
        config.admin.page_size,
        config.admin.language,
    ));

    let app = with_admin_routes(admin_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        page_size = config.admin.page_size,
        language = config.admin.language.code(),
        "solar marketplace admin ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
