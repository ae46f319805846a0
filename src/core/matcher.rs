use crate::core::scoring::{calculate_influencer_gig_match, calculate_sponsor_influencer_match};
use crate::models::{
    Gig, GigMatch, GigScoringWeights, InfluencerMatch, InfluencerProfile, MatchScore,
    SponsorProfile, SponsorScoringWeights,
};

/// Matches scoring below this are noise, not weak suggestions
pub const MIN_MATCH_SCORE: u8 = 50;

/// Default result count for gig-side rankings
pub const DEFAULT_LIMIT: usize = 10;

/// Default result count for sponsor discovery
pub const DEFAULT_SPONSOR_LIMIT: usize = 20;

/// Campaign budget assumed when a sponsor brief does not set one
pub const DEFAULT_SPONSOR_BUDGET: f64 = 10_000.0;

/// Ranking orchestrator over the scoring functions
///
/// Every entry point follows the same shape: score each candidate, drop
/// anything under [`MIN_MATCH_SCORE`], sort descending, truncate. Sorting is
/// stable, so candidates with equal scores keep their input order. Inputs are
/// never mutated and no I/O happens here.
#[derive(Debug, Clone)]
pub struct Matcher {
    gig_weights: GigScoringWeights,
    sponsor_weights: SponsorScoringWeights,
}

impl Matcher {
    pub fn new(gig_weights: GigScoringWeights, sponsor_weights: SponsorScoringWeights) -> Self {
        Self {
            gig_weights,
            sponsor_weights,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            gig_weights: GigScoringWeights::default(),
            sponsor_weights: SponsorScoringWeights::default(),
        }
    }

    /// Score a single influencer/gig pair without ranking
    pub fn score_pair(&self, influencer: &InfluencerProfile, gig: &Gig) -> MatchScore {
        calculate_influencer_gig_match(influencer, gig, &self.gig_weights)
    }

    /// Rank an influencer pool for one gig
    pub fn find_best_influencers_for_gig(
        &self,
        influencers: &[InfluencerProfile],
        gig: &Gig,
        limit: usize,
    ) -> Vec<InfluencerMatch> {
        let mut matches: Vec<InfluencerMatch> = influencers
            .iter()
            .map(|influencer| InfluencerMatch {
                influencer: influencer.clone(),
                match_score: calculate_influencer_gig_match(influencer, gig, &self.gig_weights),
                recommended_gigs: Vec::new(),
            })
            .filter(|candidate| candidate.match_score.score >= MIN_MATCH_SCORE)
            .collect();

        matches.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));
        matches.truncate(limit);
        matches
    }

    /// Rank gigs for one influencer; only open gigs are considered
    pub fn find_best_gigs_for_influencer(
        &self,
        influencer: &InfluencerProfile,
        gigs: &[Gig],
        limit: usize,
    ) -> Vec<GigMatch> {
        let mut matches: Vec<GigMatch> = gigs
            .iter()
            .filter(|gig| gig.is_open())
            .map(|gig| GigMatch {
                gig: gig.clone(),
                match_score: calculate_influencer_gig_match(influencer, gig, &self.gig_weights),
            })
            .filter(|candidate| candidate.match_score.score >= MIN_MATCH_SCORE)
            .collect();

        matches.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));
        matches.truncate(limit);
        matches
    }

    /// Rank an influencer pool for a sponsor brief and campaign budget
    pub fn find_best_influencers_for_sponsor(
        &self,
        sponsor: &SponsorProfile,
        influencers: &[InfluencerProfile],
        budget: f64,
        limit: usize,
    ) -> Vec<InfluencerMatch> {
        let mut matches: Vec<InfluencerMatch> = influencers
            .iter()
            .map(|influencer| InfluencerMatch {
                influencer: influencer.clone(),
                match_score: calculate_sponsor_influencer_match(
                    sponsor,
                    influencer,
                    budget,
                    &self.sponsor_weights,
                ),
                recommended_gigs: Vec::new(),
            })
            .filter(|candidate| candidate.match_score.score >= MIN_MATCH_SCORE)
            .collect();

        matches.sort_by(|a, b| b.match_score.score.cmp(&a.match_score.score));
        matches.truncate(limit);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
