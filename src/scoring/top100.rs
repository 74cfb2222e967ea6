use serde::Serialize;

const MIN_RANK: i64 = 1;
const MAX_RANK: i64 = 100;

/// Base and bonus points earned by one Top-100 placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Top100Points {
    pub points: i64,
    pub bonus: i64,
}

impl Top100Points {
    pub fn total(&self) -> i64 {
        self.points + self.bonus
    }
}

/// Points for a placement; ranks outside 1-100 are not a recognised
/// placement and earn nothing.
pub fn top100_points_of(rank: i64) -> Top100Points {
    if !(MIN_RANK..=MAX_RANK).contains(&rank) {
        return Top100Points::default();
    }

    Top100Points {
        points: base_points(rank),
        bonus: bonus_points(rank),
    }
}

fn base_points(rank: i64) -> i64 {
    (MAX_RANK + 1 - rank).max(0)
}

fn bonus_points(rank: i64) -> i64 {
    match rank {
        1 => 100,
        2 => 60,
        3 => 40,
        4..=10 => 20,
        11..=20 => 10,
        21..=100 => 5,
        _ => 0,
    }
}
