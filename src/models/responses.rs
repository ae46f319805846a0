use serde::{Deserialize, Serialize};

use crate::models::domain::{GigMatch, InfluencerMatch, MatchScore};

/// Response for the single-pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
}

/// Response for influencer-ranking endpoints (gig-side and sponsor-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankInfluencersResponse {
    pub matches: Vec<InfluencerMatch>,
    pub total_candidates: usize,
}

/// Response for the gig-ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankGigsResponse {
    pub matches: Vec<GigMatch>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
