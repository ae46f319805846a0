use once_cell::sync::Lazy;
use regex::Regex;

/// Follower thresholds written informally in listing text, e.g. "50k+ followers"
static FOLLOWER_REQUIREMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*k\+").unwrap());

/// Extract a minimum follower count from free-text gig requirements.
///
/// Scans each requirement line for the first `<N>k+` figure and scales it to
/// an absolute count (`"50k+" -> 50_000`). Returns `None` when no line carries
/// the pattern; callers treat that as "no stated requirement" rather than an
/// error. A zero threshold ("0k+") is meaningless and is also treated as
/// unstated.
pub fn parse_follower_requirement(requirements: &[String]) -> Option<u64> {
    for requirement in requirements {
        if let Some(caps) = FOLLOWER_REQUIREMENT.captures(requirement) {
            if let Ok(thousands) = caps[1].parse::<u64>() {
                if thousands > 0 {
                    return Some(thousands * 1000);
                }
            }
        }
    }
    None
}
