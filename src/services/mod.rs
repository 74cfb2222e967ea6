pub mod editing;
pub mod history;
pub mod import;
pub mod ranking;
pub mod roster;
pub mod season;
pub mod server;

use chrono::Utc;

/// Millisecond timestamp ID, bumped until it does not collide with `taken`
pub(crate) fn next_record_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut candidate = Utc::now().timestamp_millis();
    while taken(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
