// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Compatibility, Gig, GigMatch, GigScoringWeights, GigStatus, InfluencerMatch,
    InfluencerProfile, MatchScore, ScoreBreakdown, SponsorProfile, SponsorScoringWeights,
};
pub use requests::{
    RankForSponsorRequest, RankGigsRequest, RankInfluencersRequest, ScorePairRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, RankGigsResponse, RankInfluencersResponse, ScoreResponse,
};
