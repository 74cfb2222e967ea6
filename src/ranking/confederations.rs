use crate::domain::{Confederation, MemberCollection};
use crate::scoring::{round_to_cents, score_of};

use super::types::{by_score_then_id, ConfederationStanding};

/// Leaderboard of active confederations by the summed score of their members
pub fn rank_confederations(
    confederations: &[Confederation],
    members: &MemberCollection,
) -> Vec<ConfederationStanding> {
    let mut standings: Vec<ConfederationStanding> = confederations
        .iter()
        .filter(|conf| conf.active)
        .map(|conf| build_standing(conf, members))
        .collect();

    standings.sort_by(|a, b| by_score_then_id(a.total_points, &a.conf_id, b.total_points, &b.conf_id));
    standings
}

fn build_standing(conf: &Confederation, members: &MemberCollection) -> ConfederationStanding {
    let (total, count) = members
        .in_confederation(&conf.id)
        .fold((0.0, 0), |(total, count), member| {
            (total + score_of(member, conf.tier), count + 1)
        });

    ConfederationStanding {
        conf_id: conf.id.clone(),
        name: conf.name.clone(),
        tier: conf.tier,
        image_url: conf.image_url.clone(),
        total_points: round_to_cents(total),
        member_count: count,
    }
}
