use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use auth_token::{jwt, JwtAuthMiddleware};
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use jobs_service::handlers;
use jobs_service::metrics;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db_pool).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "jobs-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "jobs-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match jobs_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting jobs-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    match jwt::load_validation_key() {
        Ok(public_key) => {
            if let Err(err) = jwt::initialize_validation_key(&public_key) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to initialize JWT key: {err}"),
                ));
            }
        }
        Err(err) => {
            tracing::warn!(
                "JWT public key not configured ({err}); authentication middleware will fail requests"
            );
        }
    }

    let mut db_cfg = DbPoolConfig::for_service("jobs-service");
    db_cfg.database_url = config.database.url.clone();
    db_cfg.log_config();

    let db_pool = match create_pg_pool(db_cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}")))?;

    tracing::info!("Connected to database via db-pool crate");

    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();
    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    // Public read paths
                    .route("/jobs", web::get().to(handlers::list_jobs))
                    .route("/jobs/{job_id}", web::get().to(handlers::get_job))
                    .route("/companies", web::get().to(handlers::list_companies))
                    .route("/companies/{company_id}", web::get().to(handlers::get_company))
                    .route(
                        "/certificates/verify",
                        web::get().to(handlers::verify_certificate),
                    )
                    // Writes and personal reads require a session user
                    .service(
                        web::scope("")
                            .wrap(JwtAuthMiddleware)
                            .service(
                                web::resource("/jobs/{job_id}/decision")
                                    .route(web::post().to(handlers::create_decision))
                                    .route(web::delete().to(handlers::undo_decision)),
                            )
                            .route("/decisions", web::get().to(handlers::list_decisions))
                            .route(
                                "/jobs/{job_id}/saved",
                                web::put().to(handlers::toggle_saved_job),
                            )
                            .route("/saved-jobs", web::get().to(handlers::list_saved_jobs))
                            .service(
                                web::resource("/certificates")
                                    .route(web::post().to(handlers::register_certificate))
                                    .route(web::get().to(handlers::list_my_certificates)),
                            ),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
