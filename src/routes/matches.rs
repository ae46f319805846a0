use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, RankForSponsorRequest, RankGigsRequest, RankGigsResponse,
    RankInfluencersRequest, RankInfluencersResponse, ScorePairRequest, ScoreResponse,
};
use crate::services::{CacheKey, CacheManager};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    /// Server-side ceiling on requested result counts
    pub max_limit: usize,
    /// Budget assumed when a sponsor request omits one
    pub default_sponsor_budget: f64,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/gig-influencers", web::post().to(rank_influencers_for_gig))
        .route("/matches/influencer-gigs", web::post().to(rank_gigs_for_influencer))
        .route(
            "/matches/sponsor-influencers",
            web::post().to(rank_influencers_for_sponsor),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one influencer against one gig
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "influencer": { ... },
///   "gig": { ... }
/// }
/// ```
async fn score_pair(state: web::Data<AppState>, req: web::Json<ScorePairRequest>) -> impl Responder {
    let req = req.into_inner();

    let key = CacheKey::score(&req.influencer.id, &req.gig.id);
    if let Ok(cached) = state.cache.get::<ScoreResponse>(&key).await {
        tracing::debug!("Serving cached score for {}", key);
        return HttpResponse::Ok().json(cached);
    }

    let match_score = state.matcher.score_pair(&req.influencer, &req.gig);
    tracing::info!(
        "Scored influencer {} against gig {}: {} ({:?})",
        req.influencer.id,
        req.gig.id,
        match_score.score,
        match_score.compatibility
    );

    let response = ScoreResponse { match_score };
    if let Err(e) = state.cache.set(&key, &response).await {
        tracing::warn!("Failed to cache score {}: {}", key, e);
    }

    HttpResponse::Ok().json(response)
}

/// Rank an influencer pool for a gig
///
/// POST /api/v1/matches/gig-influencers
///
/// Request body:
/// ```json
/// {
///   "gig": { ... },
///   "influencers": [ ... ],
///   "limit": 10
/// }
/// ```
async fn rank_influencers_for_gig(
    state: web::Data<AppState>,
    req: web::Json<RankInfluencersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for gig-influencers request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.min(state.max_limit);
    let total_candidates = req.influencers.len();

    tracing::info!(
        "Ranking {} influencers for gig {}, limit {}",
        total_candidates,
        req.gig.id,
        limit
    );

    let fingerprint =
        CacheKey::pool_fingerprint(req.influencers.iter().map(|i| i.id.as_str()));
    let key = CacheKey::gig_matches(&req.gig.id, fingerprint, limit);
    if let Ok(cached) = state.cache.get::<RankInfluencersResponse>(&key).await {
        tracing::debug!("Serving cached ranking for {}", key);
        return HttpResponse::Ok().json(cached);
    }

    let matches = state
        .matcher
        .find_best_influencers_for_gig(&req.influencers, &req.gig, limit);

    tracing::debug!(
        "Gig {} ranking kept {} of {} candidates",
        req.gig.id,
        matches.len(),
        total_candidates
    );

    let response = RankInfluencersResponse {
        matches,
        total_candidates,
    };
    if let Err(e) = state.cache.set(&key, &response).await {
        tracing::warn!("Failed to cache ranking {}: {}", key, e);
    }

    HttpResponse::Ok().json(response)
}

/// Rank open gigs for an influencer
///
/// POST /api/v1/matches/influencer-gigs
///
/// Request body:
/// ```json
/// {
///   "influencer": { ... },
///   "gigs": [ ... ],
///   "limit": 10
/// }
/// ```
async fn rank_gigs_for_influencer(
    state: web::Data<AppState>,
    req: web::Json<RankGigsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for influencer-gigs request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.min(state.max_limit);
    let total_candidates = req.gigs.len();

    tracing::info!(
        "Ranking {} gigs for influencer {}, limit {}",
        total_candidates,
        req.influencer.id,
        limit
    );

    let fingerprint = CacheKey::pool_fingerprint(req.gigs.iter().map(|g| g.id.as_str()));
    let key = CacheKey::influencer_gigs(&req.influencer.id, fingerprint, limit);
    if let Ok(cached) = state.cache.get::<RankGigsResponse>(&key).await {
        tracing::debug!("Serving cached ranking for {}", key);
        return HttpResponse::Ok().json(cached);
    }

    let matches = state
        .matcher
        .find_best_gigs_for_influencer(&req.influencer, &req.gigs, limit);

    let response = RankGigsResponse {
        matches,
        total_candidates,
    };
    if let Err(e) = state.cache.set(&key, &response).await {
        tracing::warn!("Failed to cache ranking {}: {}", key, e);
    }

    HttpResponse::Ok().json(response)
}

/// Rank an influencer pool for a sponsor brief
///
/// POST /api/v1/matches/sponsor-influencers
///
/// Request body:
/// ```json
/// {
///   "sponsor": { ... },
///   "influencers": [ ... ],
///   "budget": 10000,
///   "limit": 20
/// }
/// ```
async fn rank_influencers_for_sponsor(
    state: web::Data<AppState>,
    req: web::Json<RankForSponsorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for sponsor-influencers request: {:?}",
            errors
        );
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.min(state.max_limit);
    let budget = req.budget.unwrap_or(state.default_sponsor_budget);
    let total_candidates = req.influencers.len();

    tracing::info!(
        "Ranking {} influencers for sponsor {}, budget {}, limit {}",
        total_candidates,
        req.sponsor.id,
        budget,
        limit
    );

    let fingerprint =
        CacheKey::pool_fingerprint(req.influencers.iter().map(|i| i.id.as_str()));
    let key = CacheKey::sponsor_matches(&req.sponsor.id, fingerprint, budget, limit);
    if let Ok(cached) = state.cache.get::<RankInfluencersResponse>(&key).await {
        tracing::debug!("Serving cached ranking for {}", key);
        return HttpResponse::Ok().json(cached);
    }

    let matches = state.matcher.find_best_influencers_for_sponsor(
        &req.sponsor,
        &req.influencers,
        budget,
        limit,
    );

    let response = RankInfluencersResponse {
        matches,
        total_candidates,
    };
    if let Err(e) = state.cache.set(&key, &response).await {
        tracing::warn!("Failed to cache ranking {}: {}", key, e);
    }

    HttpResponse::Ok().json(response)
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
