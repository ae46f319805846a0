//! Hypely Match - High-performance matching service for the Hypely creator marketplace
//!
//! This library provides the scoring engine used by the Hypely mobile app to
//! match influencers with sponsorship gigs and sponsor briefs. It scores one
//! pair at a time through pure factor functions, and ranks candidate pools
//! for the app's discovery surfaces.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    calculate_influencer_gig_match, calculate_sponsor_influencer_match, Matcher,
    DEFAULT_LIMIT, DEFAULT_SPONSOR_BUDGET, DEFAULT_SPONSOR_LIMIT, MIN_MATCH_SCORE,
};
pub use models::{
    Compatibility, Gig, GigMatch, GigScoringWeights, GigStatus, InfluencerMatch,
    InfluencerProfile, MatchScore, ScoreBreakdown, SponsorProfile, SponsorScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::with_default_weights();
        let influencer = InfluencerProfile {
            id: "inf".to_string(),
            name: "Creator".to_string(),
            categories: vec!["Fitness".to_string()],
            followers: 125_000,
            engagement_rate: 4.2,
            rate_per_post: 2500.0,
            location: "Los Angeles, CA".to_string(),
        };
        let gig = Gig {
            id: "gig".to_string(),
            title: "Campaign".to_string(),
            categories: vec!["Fitness".to_string()],
            requirements: vec!["50k+ followers".to_string()],
            price: 3000.0,
            location: Some("Los Angeles, CA".to_string()),
            status: GigStatus::Open,
        };

        let score = matcher.score_pair(&influencer, &gig);
        assert!(score.score >= MIN_MATCH_SCORE);
    }
}
