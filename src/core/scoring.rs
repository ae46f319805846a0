use crate::core::factors;
use crate::models::{
    Compatibility, Gig, GigScoringWeights, InfluencerProfile, MatchScore, ScoreBreakdown,
    SponsorProfile, SponsorScoringWeights,
};

/// Score one influencer against one gig listing
///
/// Scoring formula:
/// score = (
///     category_match * 0.30 +        # shared content categories
///     follower_size_match * 0.20 +   # audience vs "Nk+" requirement
///     budget_match * 0.20 +          # gig price vs rate per post
///     location_match * 0.10 +        # city/region proximity
///     engagement_score * 0.15 +      # engagement-rate quality
///     price_compatibility * 0.05     # tie-breaker price check
/// )
///
/// Deterministic: identical inputs always produce an identical result,
/// including the order of `reasons`.
pub fn calculate_influencer_gig_match(
    influencer: &InfluencerProfile,
    gig: &Gig,
    weights: &GigScoringWeights,
) -> MatchScore {
    let category = factors::category_match(&influencer.categories, &gig.categories);
    let follower_size = factors::follower_size_match(influencer.followers, &gig.requirements);
    let budget = factors::budget_match(influencer.rate_per_post, gig.price);
    let location = factors::location_match(&influencer.location, gig.location.as_deref());
    let engagement = factors::engagement_score(influencer.engagement_rate);
    let price_compat = factors::price_compatibility(influencer.rate_per_post, gig.price);

    let total = category * weights.category
        + follower_size * weights.follower_size
        + budget * weights.budget
        + location * weights.location
        + engagement * weights.engagement
        + price_compat * weights.price_compat;

    // One reason per factor at most, highest tier wins. The engagement checks
    // read the raw percentage rather than the normalized sub-score, so the
    // displayed copy tracks the number creators actually see on their profile.
    let mut reasons = Vec::new();
    if category >= 80.0 {
        reasons.push("Perfect category match".to_string());
    } else if category >= 60.0 {
        reasons.push("Good category alignment".to_string());
    }
    if follower_size >= 90.0 {
        reasons.push("Audience size is an ideal fit".to_string());
    } else if follower_size >= 70.0 {
        reasons.push("Audience size meets the requirements".to_string());
    }
    if budget >= 85.0 {
        reasons.push("Rate aligns well with the gig budget".to_string());
    } else if budget >= 70.0 {
        reasons.push("Rate is close to the gig budget".to_string());
    }
    if location >= 90.0 {
        reasons.push("Based in the same city".to_string());
    } else if location >= 60.0 {
        reasons.push("Location is compatible".to_string());
    }
    if influencer.engagement_rate >= 7.0 {
        reasons.push("Exceptional engagement rate".to_string());
    } else if influencer.engagement_rate >= 5.0 {
        reasons.push("Strong engagement rate".to_string());
    }

    let score = clamp_round(total);
    MatchScore {
        score,
        breakdown: ScoreBreakdown {
            category_match: clamp_round(category),
            follower_size_match: clamp_round(follower_size),
            budget_match: clamp_round(budget),
            location_match: clamp_round(location),
            engagement_rate: clamp_round(engagement),
            price_compatibility: clamp_round(price_compat),
        },
        reasons,
        compatibility: Compatibility::from_score(score),
    }
}

/// Score one influencer against a sponsor brief and campaign budget
///
/// Sponsor data is coarser than gig data: industry alignment is boolean-ish
/// (85 on a hit, 50 otherwise) and audience size is a flat tier instead of a
/// requirement comparison. Weighted factors: category 0.35, budget 0.25,
/// location 0.15, engagement 0.15, follower tier 0.10. The breakdown's
/// `follower_size_match` slot carries the tier and `price_compatibility` the
/// unweighted tie-breaker, so the client renders the same shape either way.
pub fn calculate_sponsor_influencer_match(
    sponsor: &SponsorProfile,
    influencer: &InfluencerProfile,
    budget: f64,
    weights: &SponsorScoringWeights,
) -> MatchScore {
    let category = factors::industry_category_match(&sponsor.industry, &influencer.categories);
    let budget_fit = factors::budget_match(influencer.rate_per_post, budget);
    let location = factors::location_match(&influencer.location, Some(sponsor.location.as_str()));
    let engagement = factors::engagement_score(influencer.engagement_rate);
    let tier = factors::follower_tier(influencer.followers);
    let price_compat = factors::price_compatibility(influencer.rate_per_post, budget);

    let total = category * weights.category
        + budget_fit * weights.budget
        + location * weights.location
        + engagement * weights.engagement
        + tier * weights.follower_tier;

    // Single-threshold reasons; no good/perfect tiers on the sponsor side
    let mut reasons = Vec::new();
    if category >= 85.0 {
        reasons.push("Content matches the sponsor's industry".to_string());
    }
    if budget_fit >= 70.0 {
        reasons.push("Rate fits the campaign budget".to_string());
    }
    if location >= 70.0 {
        reasons.push("Active in the sponsor's market".to_string());
    }
    if influencer.engagement_rate >= 5.0 {
        reasons.push("Strong engagement rate".to_string());
    }
    if tier >= 85.0 {
        reasons.push("Large audience reach".to_string());
    }

    let score = clamp_round(total);
    MatchScore {
        score,
        breakdown: ScoreBreakdown {
            category_match: clamp_round(category),
            follower_size_match: clamp_round(tier),
            budget_match: clamp_round(budget_fit),
            location_match: clamp_round(location),
            engagement_rate: clamp_round(engagement),
            price_compatibility: clamp_round(price_compat),
        },
        reasons,
        compatibility: Compatibility::from_score(score),
    }
}

#[inline]
fn clamp_round(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GigStatus;

    fn fitness_influencer() -> InfluencerProfile {
        InfluencerProfile {
            id: "inf_1".to_string(),
            name: "Ava Torres".to_string(),
            categories: vec!["Fitness".to_string(), "Wellness".to_string()],
            followers: 125_000,
            engagement_rate: 4.2,
            rate_per_post: 2500.0,
            location: "Los Angeles, CA".to_string(),
        }
    }

    fn fitness_gig() -> Gig {
        Gig {
            id: "gig_1".to_string(),
            title: "Spring activewear campaign".to_string(),
            categories: vec!["Fitness".to_string()],
            requirements: vec!["50k+ followers".to_string()],
            price: 3000.0,
            location: Some("Los Angeles, CA".to_string()),
            status: GigStatus::Open,
        }
    }

    #[test]
    fn test_gig_match_breakdown_hand_trace() {
        let result = calculate_influencer_gig_match(
            &fitness_influencer(),
            &fitness_gig(),
            &GigScoringWeights::default(),
        );

        // "Fitness" matches, "Wellness" does not; 1 of max(2, 1)
        assert_eq!(result.breakdown.category_match, 50);
        // 125k vs 50k+ -> ratio 2.5, inside the qualified band
        assert_eq!(result.breakdown.follower_size_match, 100);
        // 3000 / 2500 = 1.2, inside the ideal budget band
        assert_eq!(result.breakdown.budget_match, 100);
        // exact city
        assert_eq!(result.breakdown.location_match, 100);
        // 4.2% engagement
        assert_eq!(result.breakdown.engagement_rate, 75);
        // 3000 >= 0.8 * 2500
        assert_eq!(result.breakdown.price_compatibility, 100);

        // 50*.30 + 100*.20 + 100*.20 + 100*.10 + 75*.15 + 100*.05 = 81.25 -> 81
        assert_eq!(result.score, 81);
        assert_eq!(result.compatibility, Compatibility::Good);
    }

    #[test]
    fn test_gig_match_reasons_order_and_tiers() {
        let result = calculate_influencer_gig_match(
            &fitness_influencer(),
            &fitness_gig(),
            &GigScoringWeights::default(),
        );

        // 4.2% engagement is below both reason thresholds, so no engagement line
        assert_eq!(
            result.reasons,
            vec![
                "Audience size is an ideal fit",
                "Rate aligns well with the gig budget",
                "Based in the same city",
            ]
        );
    }

    #[test]
    fn test_gig_match_zero_rate_does_not_blow_up() {
        let mut influencer = fitness_influencer();
        influencer.rate_per_post = 0.0;

        let result =
            calculate_influencer_gig_match(&influencer, &fitness_gig(), &GigScoringWeights::default());

        assert_eq!(result.breakdown.budget_match, 50);
        assert_eq!(result.breakdown.price_compatibility, 50);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_gig_match_is_deterministic() {
        let influencer = fitness_influencer();
        let gig = fitness_gig();
        let weights = GigScoringWeights::default();

        let first = calculate_influencer_gig_match(&influencer, &gig, &weights);
        let second = calculate_influencer_gig_match(&influencer, &gig, &weights);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sponsor_match_industry_hit() {
        let sponsor = SponsorProfile {
            id: "sp_1".to_string(),
            name: "Peak Supplements".to_string(),
            industry: "Sports & Fitness".to_string(),
            location: "Los Angeles, CA".to_string(),
        };

        let result = calculate_sponsor_influencer_match(
            &sponsor,
            &fitness_influencer(),
            10_000.0,
            &SponsorScoringWeights::default(),
        );

        // "fitness" is a substring of the split token "fitness"
        assert_eq!(result.breakdown.category_match, 85);
        // breakdown reuses the follower slot for the coarse tier (125k -> 100)
        assert_eq!(result.breakdown.follower_size_match, 100);
        // 10000 / 2500 = 4.0 -> outside the 3x band
        assert_eq!(result.breakdown.budget_match, 30);
        assert_eq!(result.breakdown.location_match, 100);
        assert!(result
            .reasons
            .contains(&"Content matches the sponsor's industry".to_string()));
        assert!(result.reasons.contains(&"Large audience reach".to_string()));
    }

    #[test]
    fn test_sponsor_match_industry_miss_stays_neutral() {
        let sponsor = SponsorProfile {
            id: "sp_2".to_string(),
            name: "Gearbox Motors".to_string(),
            industry: "Automotive".to_string(),
            location: "Detroit, MI".to_string(),
        };

        let result = calculate_sponsor_influencer_match(
            &sponsor,
            &fitness_influencer(),
            2500.0,
            &SponsorScoringWeights::default(),
        );

        assert_eq!(result.breakdown.category_match, 50);
        assert!(!result
            .reasons
            .contains(&"Content matches the sponsor's industry".to_string()));
    }
}
