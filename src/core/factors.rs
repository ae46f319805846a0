use crate::core::requirements::parse_follower_requirement;

/// Cities treated as one global market for creator campaigns
const GLOBAL_HUBS: [&str; 6] = ["london", "paris", "milan", "tokyo", "dubai", "barcelona"];

/// Score category overlap between two free-text taxonomies (0-100)
///
/// Matching is substring-based in both directions so "Fitness" pairs with
/// "Fitness & Wellness" and "Tech" with "Technology". The count of matched
/// subject categories is normalized by the larger side, so a narrow profile
/// cannot max out against a broad listing.
pub fn category_match(subject: &[String], target: &[String]) -> f64 {
    if subject.is_empty() || target.is_empty() {
        return 0.0;
    }

    let target_lower: Vec<String> = target.iter().map(|c| c.to_lowercase()).collect();
    let matched = subject
        .iter()
        .filter(|category| {
            let category = category.to_lowercase();
            target_lower
                .iter()
                .any(|t| t.contains(&category) || category.contains(t))
        })
        .count();

    if matched == 0 {
        return 0.0;
    }

    (matched as f64 / subject.len().max(target.len()) as f64) * 100.0
}

/// Score audience size against a gig's textual follower requirement (0-100)
///
/// A listing with no stated threshold scores a neutral-positive 75. Above the
/// threshold, extreme over-qualification is penalized (it usually signals a
/// budget mismatch). Below it, partial credit is capped at 50 so "close but
/// under" stays distinguishable from "qualified".
pub fn follower_size_match(followers: u64, requirements: &[String]) -> f64 {
    let Some(required) = parse_follower_requirement(requirements) else {
        return 75.0;
    };

    let ratio = followers as f64 / required as f64;
    if followers >= required {
        if ratio <= 3.0 {
            100.0
        } else if ratio <= 5.0 {
            85.0
        } else {
            70.0
        }
    } else {
        (ratio * 100.0).min(50.0)
    }
}

/// Score how well a gig's price fits an influencer's rate (0-100)
///
/// Both undershooting and overshooting are penalized on the same schedule: a
/// price far below the rate underpays the creator, far above wastes sponsor
/// budget. A moderate premium (up to 1.3x) still counts as fully compatible.
/// An unset rate (zero or negative) scores a neutral 50.
pub fn budget_match(rate_per_post: f64, price: f64) -> f64 {
    if rate_per_post <= 0.0 {
        return 50.0;
    }

    let ratio = price / rate_per_post;
    if (0.9..=1.3).contains(&ratio) {
        100.0
    } else if (0.7..0.9).contains(&ratio) || (ratio > 1.3 && ratio <= 1.5) {
        85.0
    } else if (0.5..0.7).contains(&ratio) || (ratio > 1.5 && ratio <= 2.0) {
        70.0
    } else if (0.3..0.5).contains(&ratio) || (ratio > 2.0 && ratio <= 3.0) {
        50.0
    } else {
        30.0
    }
}

/// Score location proximity from "City, Region" strings (0-100)
///
/// A gig with no location is remote-friendly and scores a neutral 50. Exact
/// city beats same region; two cities on the global-hub list are treated as
/// one market. Strings without a comma degrade to city-only comparison.
pub fn location_match(subject: &str, target: Option<&str>) -> f64 {
    let Some(target) = target else {
        return 50.0;
    };

    let (subject_city, subject_region) = split_location(subject);
    let (target_city, target_region) = split_location(target);

    if !subject_city.is_empty() && subject_city == target_city {
        return 100.0;
    }

    if let (Some(a), Some(b)) = (subject_region, target_region) {
        if a == b {
            return 70.0;
        }
    }

    if GLOBAL_HUBS.contains(&subject_city.as_str()) && GLOBAL_HUBS.contains(&target_city.as_str())
    {
        return 60.0;
    }

    40.0
}

fn split_location(location: &str) -> (String, Option<String>) {
    let mut parts = location.split(',').map(|part| part.trim().to_lowercase());
    let city = parts.next().unwrap_or_default();
    let region = parts.next().filter(|region| !region.is_empty());
    (city, region)
}

/// Normalize an engagement-rate percentage to a quality score (0-100)
///
/// Breakpoints follow typical industry tiers and are not configurable.
pub fn engagement_score(engagement_rate: f64) -> f64 {
    if engagement_rate >= 8.0 {
        100.0
    } else if engagement_rate >= 6.0 {
        90.0
    } else if engagement_rate >= 4.0 {
        75.0
    } else if engagement_rate >= 2.0 {
        60.0
    } else {
        40.0
    }
}

/// One-directional price check used as a minor tie-breaker (0-100)
///
/// Only asks "does the price clear enough of the rate"; the symmetric
/// fit lives in [`budget_match`]. An unset rate scores a neutral 50.
pub fn price_compatibility(rate_per_post: f64, price: f64) -> f64 {
    if rate_per_post <= 0.0 {
        return 50.0;
    }

    if price >= rate_per_post * 0.8 {
        100.0
    } else if price >= rate_per_post * 0.6 {
        75.0
    } else if price >= rate_per_post * 0.4 {
        50.0
    } else {
        25.0
    }
}

/// Coarse audience-size tier for sponsor-side matching (0-100)
///
/// Sponsor briefs carry no textual follower requirement, so this is a step
/// function over absolute reach, independent of [`follower_size_match`].
pub fn follower_tier(followers: u64) -> f64 {
    if followers >= 100_000 {
        100.0
    } else if followers >= 50_000 {
        85.0
    } else if followers >= 10_000 {
        70.0
    } else {
        50.0
    }
}

/// Match an influencer's categories against a sponsor's industry string (0-100)
///
/// The industry may carry `&`-separated sub-industries ("Sports & Fitness");
/// each segment is compared with the same bidirectional substring rule as
/// [`category_match`]. Boolean-ish by design: 85 on any hit, 50 otherwise.
pub fn industry_category_match(industry: &str, categories: &[String]) -> f64 {
    let tokens: Vec<String> = industry
        .split('&')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let hit = categories.iter().any(|category| {
        let category = category.to_lowercase();
        !category.is_empty()
            && tokens
                .iter()
                .any(|token| token.contains(&category) || category.contains(token))
    });

    if hit {
        85.0
    } else {
        50.0
    }
}
