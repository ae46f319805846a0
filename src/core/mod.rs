// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod requirements;
pub mod scoring;

pub use factors::{
    budget_match, category_match, engagement_score, follower_size_match, follower_tier,
    industry_category_match, location_match, price_compatibility,
};
pub use matcher::{
    Matcher, DEFAULT_LIMIT, DEFAULT_SPONSOR_BUDGET, DEFAULT_SPONSOR_LIMIT, MIN_MATCH_SCORE,
};
pub use requirements::parse_follower_requirement;
pub use scoring::{calculate_influencer_gig_match, calculate_sponsor_influencer_match};
