use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use verdis_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::{auth, rate_limit},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/citizenship/sessions",
            post(routes::wizard::create_session),
        )
        .route(
            "/api/citizenship/sessions/:id",
            get(routes::wizard::get_session)
                .patch(routes::wizard::update_session)
                .delete(routes::wizard::close_session),
        )
        .route(
            "/api/citizenship/sessions/:id/next",
            post(routes::wizard::advance_session),
        )
        .route(
            "/api/citizenship/sessions/:id/back",
            post(routes::wizard::back_session),
        )
        .route(
            "/api/citizenship/sessions/:id/reset",
            post(routes::wizard::reset_session),
        )
        .route(
            "/api/citizenship/sessions/:id/summary",
            get(routes::wizard::get_summary),
        )
        .route(
            "/api/citizenship/sessions/:id/document",
            get(routes::wizard::download_document),
        )
        .route(
            "/api/donations",
            post(routes::donation_routes::track_donation),
        )
        .route(
            "/api/government/positions",
            get(routes::government_routes::list_positions),
        )
        .route(
            "/api/government/applications",
            post(routes::government_routes::create_application),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::per_second(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/admin/applications",
            get(routes::admin::list_applications),
        )
        .route(
            "/api/admin/applications/:id/status",
            post(routes::admin::update_application_status),
        )
        .route("/api/admin/donations", get(routes::admin::list_donations))
        .route(
            "/api/admin/government-applications",
            get(routes::admin::list_government_applications),
        )
        .route(
            "/api/admin/government-applications/:id/status",
            post(routes::admin::update_government_application_status),
        )
        .route(
            "/api/admin/dashboard/stats",
            get(routes::admin::dashboard_stats),
        )
        .route(
            "/api/admin/notifications/poll",
            get(routes::admin::poll_notifications),
        )
        .layer(axum::middleware::from_fn(auth::require_admin))
        .route("/api/admin/login", post(routes::admin::login))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::per_second(config.admin_rps),
            rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(admin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
