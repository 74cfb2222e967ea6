use crate::domain::{Attendance, GameResult, GameScore, Member, Tier};

use super::tier::multiplier_of;

// Absorbs binary representation error so that e.g. 7.005 rounds up.
const ROUNDING_GUARD: f64 = 1e-7;

/// Total points of a member across all 16 game cells.
///
/// Result points are scaled by the confederation's tier multiplier;
/// attendance points are added as-is. The sum is rounded once, at the end.
/// Totals are unbounded and may be negative.
pub fn score_of(member: &Member, tier: Tier) -> f64 {
    let multiplier = multiplier_of(tier);
    let total: f64 = member
        .cells()
        .map(|cell| cell_points(cell, multiplier))
        .sum();

    round_to_cents(total)
}

fn cell_points(cell: &GameScore, multiplier: f64) -> f64 {
    result_points(cell.result) * multiplier + attendance_points(cell.attendance)
}

fn result_points(result: GameResult) -> f64 {
    match result {
        GameResult::Win => 3.0,
        GameResult::Draw => 1.0,
        GameResult::Loss | GameResult::None => 0.0,
    }
}

fn attendance_points(attendance: Attendance) -> f64 {
    match attendance {
        Attendance::Present => 3.0,
        Attendance::Absent => 1.0,
        Attendance::NoTrain => -6.0,
        Attendance::None => 0.0,
    }
}

/// Round to 2 decimals, halves rounding up (towards positive infinity)
pub fn round_to_cents(raw: f64) -> f64 {
    ((raw * 100.0) + 0.5 + ROUNDING_GUARD).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TIERS: [Tier; 4] = [Tier::Gold, Tier::Platinum, Tier::Diamond, Tier::Supreme];

    fn member() -> Member {
        Member::new("m1", "Ana", "Alpha FC", "c1")
    }

    fn fill(member: &mut Member, cell: GameScore) {
        for week in member.weeks.iter_mut() {
            for game in week.games.iter_mut() {
                *game = cell;
            }
        }
    }

    #[test]
    fn test_empty_member_scores_zero_for_every_tier() {
        for tier in ALL_TIERS {
            assert_eq!(score_of(&member(), tier), 0.0);
        }
    }

    #[test]
    fn test_single_win_is_multiplied() {
        let mut m = member();
        m.weeks[1].games[2].result = GameResult::Win;

        assert_eq!(score_of(&m, Tier::Gold), 3.0);
        assert_eq!(score_of(&m, Tier::Platinum), 3.0);
        assert_eq!(score_of(&m, Tier::Diamond), 3.6);
        assert_eq!(score_of(&m, Tier::Supreme), 4.5);
    }

    #[test]
    fn test_attendance_is_never_multiplied() {
        let mut m = member();
        fill(&mut m, GameScore { result: GameResult::None, attendance: Attendance::Present });

        for tier in ALL_TIERS {
            assert_eq!(score_of(&m, tier), 48.0);
        }
    }

    #[test]
    fn test_no_train_penalty_is_not_clamped() {
        let mut m = member();
        fill(&mut m, GameScore { result: GameResult::Loss, attendance: Attendance::NoTrain });

        assert_eq!(score_of(&m, Tier::Supreme), -96.0);
    }

    #[test]
    fn test_mixed_week() {
        let mut m = member();
        m.weeks[0].games = [
            GameScore { result: GameResult::Win, attendance: Attendance::Present },
            GameScore { result: GameResult::Draw, attendance: Attendance::Absent },
            GameScore { result: GameResult::Loss, attendance: Attendance::NoTrain },
            GameScore::default(),
        ];

        // results (3 + 1) * 1.2 = 4.8, attendance 3 + 1 - 6 = -2
        assert_eq!(score_of(&m, Tier::Diamond), 2.8);
    }

    #[test]
    fn test_rounding_applied_once_at_the_end() {
        let mut m = member();
        fill(&mut m, GameScore { result: GameResult::Draw, attendance: Attendance::None });

        assert_eq!(score_of(&m, Tier::Diamond), 19.2);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(7.005), 7.01);
        assert_eq!(round_to_cents(7.004), 7.0);
        assert_eq!(round_to_cents(3.5999999999999996), 3.6);
        assert_eq!(round_to_cents(-2.5), -2.5);
        assert_eq!(round_to_cents(-0.005), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut m = member();
        fill(&mut m, GameScore { result: GameResult::Win, attendance: Attendance::Absent });

        let first = score_of(&m, Tier::Diamond);
        let second = score_of(&m, Tier::Diamond);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
