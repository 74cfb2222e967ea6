use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::Tier;

/// Label used when a member references a confederation that does not exist
pub const UNKNOWN_CONFEDERATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfederationStanding {
    pub conf_id: String,
    pub name: String,
    pub tier: Tier,
    pub image_url: Option<String>,
    pub total_points: f64,
    pub member_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStanding {
    pub member_id: String,
    pub name: String,
    pub team_name: String,
    pub conf_id: String,
    pub conf_name: String,
    pub conf_tier: Option<Tier>,
    pub conf_image: Option<String>,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Top100Achievement {
    pub entry_id: String,
    pub season: String,
    pub rank: i64,
    pub earned_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Top100Standing {
    pub conf_id: String,
    pub conf_name: String,
    pub conf_image: Option<String>,
    pub points: i64,
    pub entries: Vec<Top100Achievement>,
}

/// Higher score first; equal scores fall back to ascending ID
pub(crate) fn by_score_then_id(a_score: f64, a_id: &str, b_score: f64, b_id: &str) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a_id.cmp(b_id))
}
