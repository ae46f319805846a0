use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Gig, InfluencerProfile, SponsorProfile};

/// Request to score a single influencer against a single gig
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    pub influencer: InfluencerProfile,
    pub gig: Gig,
}

/// Request to rank an influencer pool against one gig
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankInfluencersRequest {
    pub gig: Gig,
    #[validate(length(min = 1))]
    pub influencers: Vec<InfluencerProfile>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Request to rank open gigs for one influencer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankGigsRequest {
    pub influencer: InfluencerProfile,
    #[validate(length(min = 1))]
    pub gigs: Vec<Gig>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Request to rank an influencer pool for a sponsor brief
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankForSponsorRequest {
    pub sponsor: SponsorProfile,
    #[validate(length(min = 1))]
    pub influencers: Vec<InfluencerProfile>,
    /// Campaign budget; falls back to the configured default when omitted
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default = "default_sponsor_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    crate::core::matcher::DEFAULT_LIMIT
}

fn default_sponsor_limit() -> usize {
    crate::core::matcher::DEFAULT_SPONSOR_LIMIT
}
