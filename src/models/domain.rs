use serde::{Deserialize, Serialize};

/// Influencer profile with the fields used by the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub followers: u64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    #[serde(rename = "ratePerPost")]
    pub rate_per_post: f64,
    /// Formatted as "City, Region"
    pub location: String,
}

/// Sponsor-posted opportunity listing that influencers apply to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-text constraints; may embed a follower threshold like "50k+ followers"
    #[serde(default)]
    pub requirements: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: GigStatus,
}

impl Gig {
    /// Whether the gig is still accepting applications
    pub fn is_open(&self) -> bool {
        self.status == GigStatus::Open
    }
}

/// Gig lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GigStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// Sponsor profile with the fields used by sponsor-side matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorProfile {
    pub id: String,
    pub name: String,
    /// May carry `&`-separated sub-industries, e.g. "Sports & Fitness"
    pub industry: String,
    pub location: String,
}

/// Per-factor sub-scores, each normalized to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "categoryMatch")]
    pub category_match: u8,
    #[serde(rename = "followerSizeMatch")]
    pub follower_size_match: u8,
    #[serde(rename = "budgetMatch")]
    pub budget_match: u8,
    #[serde(rename = "locationMatch")]
    pub location_match: u8,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: u8,
    #[serde(rename = "priceCompatibility")]
    pub price_compatibility: u8,
}

/// Qualitative bucket derived from the numeric match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Compatibility {
    /// Bucket a final score: >=85 excellent, >=70 good, >=55 fair, else poor
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 85 => Compatibility::Excellent,
            s if s >= 70 => Compatibility::Good,
            s if s >= 55 => Compatibility::Fair,
            _ => Compatibility::Poor,
        }
    }
}

/// Full scoring result for one influencer/gig or sponsor/influencer pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Weighted total, rounded to the nearest integer in 0-100
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    /// Human-readable justifications in evaluation order
    pub reasons: Vec<String>,
    pub compatibility: Compatibility,
}

/// Ranked influencer result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerMatch {
    pub influencer: InfluencerProfile,
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
    /// Reserved for gig suggestions alongside the match; currently always empty
    #[serde(rename = "recommendedGigs", default)]
    pub recommended_gigs: Vec<Gig>,
}

/// Ranked gig result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigMatch {
    pub gig: Gig,
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
}

/// Factor weights for influencer/gig scoring
#[derive(Debug, Clone, Copy)]
pub struct GigScoringWeights {
    pub category: f64,
    pub follower_size: f64,
    pub budget: f64,
    pub location: f64,
    pub engagement: f64,
    pub price_compat: f64,
}

impl GigScoringWeights {
    pub fn sum(&self) -> f64 {
        self.category
            + self.follower_size
            + self.budget
            + self.location
            + self.engagement
            + self.price_compat
    }
}

impl Default for GigScoringWeights {
    fn default() -> Self {
        Self {
            category: 0.30,
            follower_size: 0.20,
            budget: 0.20,
            location: 0.10,
            engagement: 0.15,
            price_compat: 0.05,
        }
    }
}

/// Factor weights for sponsor/influencer scoring
///
/// Coarser than the gig weights: sponsor briefs carry less granular data, so
/// industry alignment dominates and there is no textual follower requirement
/// to parse against.
#[derive(Debug, Clone, Copy)]
pub struct SponsorScoringWeights {
    pub category: f64,
    pub budget: f64,
    pub location: f64,
    pub engagement: f64,
    pub follower_tier: f64,
}

impl SponsorScoringWeights {
    pub fn sum(&self) -> f64 {
        self.category + self.budget + self.location + self.engagement + self.follower_tier
    }
}

impl Default for SponsorScoringWeights {
    fn default() -> Self {
        Self {
            category: 0.35,
            budget: 0.25,
            location: 0.15,
            engagement: 0.15,
            follower_tier: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_buckets() {
        assert_eq!(Compatibility::from_score(100), Compatibility::Excellent);
        assert_eq!(Compatibility::from_score(85), Compatibility::Excellent);
        assert_eq!(Compatibility::from_score(84), Compatibility::Good);
        assert_eq!(Compatibility::from_score(70), Compatibility::Good);
        assert_eq!(Compatibility::from_score(69), Compatibility::Fair);
        assert_eq!(Compatibility::from_score(55), Compatibility::Fair);
        assert_eq!(Compatibility::from_score(54), Compatibility::Poor);
        assert_eq!(Compatibility::from_score(0), Compatibility::Poor);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let gig = GigScoringWeights::default();
        let sponsor = SponsorScoringWeights::default();
        assert!((gig.sum() - 1.0).abs() < 1e-9);
        assert!((sponsor.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_gig_status_default_is_open() {
        let gig: Gig = serde_json::from_str(
            r#"{"id":"g1","title":"Spring launch","price":1000.0}"#,
        )
        .unwrap();
        assert!(gig.is_open());
        assert!(gig.categories.is_empty());
        assert!(gig.requirements.is_empty());
        assert!(gig.location.is_none());
    }

    #[test]
    fn test_gig_status_wire_format() {
        let status: GigStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(status, GigStatus::InProgress);
        assert_eq!(serde_json::to_string(&GigStatus::Open).unwrap(), r#""open""#);
    }
}
