use crate::cli::ServeArgs;
use crate::infra::{load_store, AppState};
use crate::routes::with_completion_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use csn_profile::config::AppConfig;
use csn_profile::error::AppError;
use csn_profile::profile::completion::standard_rules;
use csn_profile::profile::{
    CompletionEngine, CompletionRuleSet, ProfileCompletionService, SuggestionGenerator,
};
use csn_profile::telemetry;
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

    // Rules are validated once here; a bad checklist stops startup.
    let rules = CompletionRuleSet::new(standard_rules())?;
    let engine = Arc::new(CompletionEngine::new(rules, SuggestionGenerator::standard()));

    let store = Arc::new(load_store(config.store.seed_path.as_deref())?);
    let users = store.user_ids().map(|ids| ids.len()).unwrap_or_default();
    let completion_service = Arc::new(ProfileCompletionService::new(store, engine));

    let app = with_completion_routes(completion_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, users, "profile completion service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
