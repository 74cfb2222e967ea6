pub mod confederations;
pub mod members;
pub mod season;
pub mod top100;
pub mod types;

pub use confederations::rank_confederations;
pub use members::rank_members;
pub use season::{resolve_source, Rankings, RankingSource, SeasonSelection};
pub use top100::rank_top100;
pub use types::{ConfederationStanding, MemberStanding, Top100Achievement, Top100Standing};
