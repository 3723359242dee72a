use axum::http::{HeaderValue, Method, header};
use pin_distance_api::{
    application::{
        record_failure::use_case::RecordFailureUseCase,
        resolve_distance::use_case::ResolveDistanceUseCase,
    },
    config::Config,
    domain::pincode::repository::PincodeRepository,
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_failure_log_repository::SqlxFailureLogRepository,
            sqlx_pincode_repository::SqlxPincodeRepository,
        },
        routing::openroute::OpenRouteServiceProvider,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise uses sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(
                "info,pin_distance_api=debug,tower_http=debug",
            )
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    // A database we cannot reach at startup is fatal; no degraded serving.
    let db = create_pool(
        &config.database_url,
        config.database_max_connections,
        config.database_connect_timeout(),
    )
    .await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;
    tracing::info!("Database connected and migrated");

    let routing = Arc::new(OpenRouteServiceProvider::new(
        config.openroute_api_key.clone(),
        &config.openroute_base_url,
        &config.routing_profile,
        config.routing_preference.clone(),
        config.routing_timeout(),
    )?);

    let pincode_repo: Arc<dyn PincodeRepository> =
        Arc::new(SqlxPincodeRepository::new(db.clone()));
    let failure_log = Arc::new(RecordFailureUseCase::new(
        Arc::new(SqlxFailureLogRepository::new(db.clone())),
        pincode_repo.clone(),
    ));
    let resolve_distance = Arc::new(
        ResolveDistanceUseCase::new(
            pincode_repo.clone(),
            routing,
            failure_log,
            config.routing_failure_policy,
        )
        .with_average_speed(config.fallback_average_speed_kmh),
    );
    tracing::info!(
        policy = %config.routing_failure_policy,
        timeout_s = config.routing_timeout_seconds,
        "Routing provider configured"
    );

    let state = AppState {
        db: db.clone(),
        pincode_repo,
        resolve_distance,
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Distance API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Database pool closed");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
