pub mod member;
pub mod tier;
pub mod top100;

pub use member::{round_to_cents, score_of};
pub use tier::multiplier_of;
pub use top100::{top100_points_of, Top100Points};
