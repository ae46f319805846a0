mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use config::Settings;
use core::{Matcher, DEFAULT_SPONSOR_BUDGET};
use models::{GigScoringWeights, SponsorScoringWeights};
use routes::matches::AppState;
use services::CacheManager;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Hypely matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the response cache
    let cache_capacity = settings.cache.capacity.unwrap_or(1000);
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache = Arc::new(CacheManager::new(cache_capacity, cache_ttl));

    info!(
        "Response cache initialized ({} entries, TTL: {}s)",
        cache_capacity, cache_ttl
    );

    // Initialize matcher with configured weights
    let gig_weights = GigScoringWeights {
        category: settings.scoring.gig_weights.category,
        follower_size: settings.scoring.gig_weights.follower_size,
        budget: settings.scoring.gig_weights.budget,
        location: settings.scoring.gig_weights.location,
        engagement: settings.scoring.gig_weights.engagement,
        price_compat: settings.scoring.gig_weights.price_compat,
    };
    let sponsor_weights = SponsorScoringWeights {
        category: settings.scoring.sponsor_weights.category,
        budget: settings.scoring.sponsor_weights.budget,
        location: settings.scoring.sponsor_weights.location,
        engagement: settings.scoring.sponsor_weights.engagement,
        follower_tier: settings.scoring.sponsor_weights.follower_tier,
    };

    let matcher = Matcher::new(gig_weights, sponsor_weights);

    info!(
        "Matcher initialized with gig weights {:?} and sponsor weights {:?}",
        gig_weights, sponsor_weights
    );

    // Build application state
    let app_state = AppState {
        cache,
        matcher,
        max_limit: settings.matching.max_limit.unwrap_or(100),
        default_sponsor_budget: settings
            .matching
            .default_sponsor_budget
            .unwrap_or(DEFAULT_SPONSOR_BUDGET),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
