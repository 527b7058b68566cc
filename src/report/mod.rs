//! Tables built from parsed game files: missions per country and the idea
//! group policy matrix.

mod markdown;
mod missions;
mod policies;

pub use markdown::markdown_table;
pub use missions::{count_missions, mission_rows, MissionCount};
pub use policies::{group_ideas, localise_table, policy_requirements, policy_table, DIAGONAL, EXEMPT, MISSING};

/// Rows of cells, header row first.
pub type Table = Vec<Vec<String>>;

#[cfg(test)]
mod tests;
