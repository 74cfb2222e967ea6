use crate::domain::{Confederation, Member, MemberCollection};
use crate::scoring::score_of;

use super::types::{by_score_then_id, MemberStanding, UNKNOWN_CONFEDERATION};

/// Leaderboard of every member, whatever the state of their confederation.
///
/// A member whose confederation cannot be found scores 0 and is labelled
/// as belonging to an unknown confederation.
pub fn rank_members(confederations: &[Confederation], members: &MemberCollection) -> Vec<MemberStanding> {
    let mut standings: Vec<MemberStanding> = members
        .iter()
        .map(|member| {
            let conf = confederations.iter().find(|c| c.id == member.conf_id);
            build_standing(member, conf)
        })
        .collect();

    standings.sort_by(|a, b| by_score_then_id(a.points, &a.member_id, b.points, &b.member_id));
    standings
}

fn build_standing(member: &Member, conf: Option<&Confederation>) -> MemberStanding {
    let (points, conf_name, conf_tier, conf_image) = match conf {
        Some(conf) => (
            score_of(member, conf.tier),
            conf.name.clone(),
            Some(conf.tier),
            conf.image_url.clone(),
        ),
        None => (0.0, UNKNOWN_CONFEDERATION.to_string(), None, None),
    };

    MemberStanding {
        member_id: member.id.clone(),
        name: member.name.clone(),
        team_name: member.team_name.clone(),
        conf_id: member.conf_id.clone(),
        conf_name,
        conf_tier,
        conf_image,
        points,
    }
}
