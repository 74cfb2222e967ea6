pub mod archive;
mod collection;
pub mod editing;
pub mod models;
pub mod roster;
pub mod sanitize;

pub use archive::SeasonSummary;
pub use collection::MemberCollection;
pub use editing::{Actor, CellUpdate};
pub use models::*;
pub use roster::ConfederationDraft;
pub use sanitize::sanitize_app_data;
