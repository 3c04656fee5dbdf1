use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use auth_token::{jwt, JwtAuthMiddleware};
use chrono::Utc;
use community_service::cache::FeedCache;
use community_service::handlers::{self, FeedState};
use community_service::metrics;
use community_service::services::{TrendingRankingConfig, TrendingService};
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use redis::aio::ConnectionManager;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
    redis_manager: Option<ConnectionManager>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

impl HealthState {
    async fn check_postgres(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.db_pool)
            .await
            .map(|_| ())
    }

    async fn check_redis(&self) -> Result<(), String> {
        let Some(manager) = &self.redis_manager else {
            return Err("Redis not configured".to_string());
        };
        let mut conn = manager.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| e.to_string())?;
        if pong == "PONG" {
            Ok(())
        } else {
            Err("unexpected PING response".to_string())
        }
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.check_postgres().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "community-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "community-service"
        })),
    }
}

async fn readiness_summary(state: web::Data<HealthState>) -> HttpResponse {
    let mut checks = HashMap::new();
    let mut ready = true;

    let start = Instant::now();
    let pg_result = state.check_postgres().await;
    let pg_latency = Some(start.elapsed().as_millis() as u64);
    let postgres_check = match pg_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "PostgreSQL connection successful".to_string(),
            latency_ms: pg_latency,
        },
        Err(e) => {
            ready = false;
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: format!("PostgreSQL connection failed: {}", e),
                latency_ms: pg_latency,
            }
        }
    };
    checks.insert("postgresql".to_string(), postgres_check);

    // Redis only degrades trending; it never blocks readiness
    let start = Instant::now();
    let redis_result = state.check_redis().await;
    let redis_latency = Some(start.elapsed().as_millis() as u64);
    let redis_check = match redis_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "Redis ping successful".to_string(),
            latency_ms: redis_latency,
        },
        Err(e) => ComponentCheck {
            status: ComponentStatus::Degraded,
            message: format!("Redis unavailable: {}", e),
            latency_ms: redis_latency,
        },
    };
    checks.insert("redis".to_string(), redis_check);

    let response = ReadinessResponse {
        ready,
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
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

    let config = match community_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting community-service v{}", env!("CARGO_PKG_VERSION"));
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

    let mut db_cfg = DbPoolConfig::for_service("community-service");
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

    // Redis only backs the trending cache; run degraded without it
    let redis_manager = match redis::Client::open(config.cache.url.as_str()) {
        Ok(client) => match ConnectionManager::new(client).await {
            Ok(manager) => Some(manager),
            Err(e) => {
                tracing::warn!("Redis unavailable, trending cache disabled: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Invalid Redis URL, trending cache disabled: {}", e);
            None
        }
    };

    let feed_cache = redis_manager
        .clone()
        .map(|manager| Arc::new(FeedCache::new(manager, config.trending.cache_ttl_secs)));

    let trending = Arc::new(TrendingService::new(
        db_pool.clone(),
        feed_cache,
        TrendingRankingConfig::from(&config.trending),
    ));

    let feed_state = web::Data::new(FeedState { trending });
    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
        redis_manager,
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
            .app_data(feed_state.clone())
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/ready", web::get().to(readiness_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    // Mixed resources: reads are public, the write
                    // methods authenticate through the UserId extractor
                    .service(
                        web::resource("/posts")
                            .route(web::get().to(handlers::list_posts))
                            .route(web::post().to(handlers::create_post)),
                    )
                    .service(
                        web::resource("/posts/{post_id}/comments")
                            .route(web::get().to(handlers::list_comments))
                            .route(web::post().to(handlers::create_comment)),
                    )
                    .route("/community/stats", web::get().to(handlers::community_stats))
                    // Fully protected paths sit behind the middleware
                    .service(
                        web::scope("")
                            .wrap(JwtAuthMiddleware)
                            .route(
                                "/posts/{post_id}/reactions",
                                web::post().to(handlers::create_reaction),
                            )
                            .service(
                                web::resource("/profiles/me")
                                    .route(web::get().to(handlers::get_my_profile))
                                    .route(web::put().to(handlers::update_my_profile)),
                            )
                            .service(
                                web::resource("/profiles/me/preference")
                                    .route(web::get().to(handlers::get_role_preference))
                                    .route(web::put().to(handlers::set_role_preference)),
                            ),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
