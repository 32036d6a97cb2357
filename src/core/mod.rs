// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod specialty;

pub use distance::{distance_between, haversine_miles};
pub use filters::{matches_criteria, matches_name, matches_specialty};
pub use ranker::{RankOutcome, Ranker, DEFAULT_RESULT_LIMIT};
pub use specialty::{available_groups, expand_groups, groups_for_text};
