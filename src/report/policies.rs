use indexmap::{IndexMap, IndexSet};

use crate::ast::Document;
use crate::localisation::LocalisationTable;
use crate::options::ReportOptions;
use crate::walker::ConditionTree;

use super::Table;

pub const DIAGONAL: &str = " - ";
pub const EXEMPT: &str = "No Policies by Design";
pub const MISSING: &str = "missing";

/// Names of the idea groups in `document`: top-level entries whose
/// `category` is one of the configured categories.
pub fn group_ideas(document: &Document, options: &ReportOptions) -> Vec<String> {
    document
        .iter()
        .filter(|(_, value)| {
            value
                .get("category")
                .and_then(|c| c.as_str())
                .is_some_and(|c| options.idea_categories.iter().any(|cat| cat == c))
        })
        .map(|(key, _)| key.to_string())
        .collect()
}

/// For every policy in `document`, the idea groups its first `potential`
/// block requires. Policies that require none are left out.
pub fn policy_requirements(document: &Document) -> IndexMap<String, IndexSet<String>> {
    let mut requirements = IndexMap::new();

    for (policy, value) in document {
        let Some(potential) = value.get("potential") else {
            continue;
        };
        let groups = ConditionTree::from_value(potential).collect_reachable("has_idea_group");
        if !groups.is_empty() {
            requirements.insert(policy.to_string(), groups);
        }
    }

    requirements
}

/// Square table of idea group pairs. Cell `(row, column)` lists the policies
/// requiring both groups.
pub fn policy_table(
    ideas: &[String],
    requirements: &IndexMap<String, IndexSet<String>>,
    options: &ReportOptions,
) -> Table {
    let is_exempt = |idea: &String| options.policy_exempt_groups.contains(idea);

    let mut header = vec![String::new()];
    header.extend(ideas.iter().cloned());
    let mut rows = vec![header];

    for (r, row_idea) in ideas.iter().enumerate() {
        let mut row = vec![row_idea.clone()];
        for (c, col_idea) in ideas.iter().enumerate() {
            let cell = if r == c {
                DIAGONAL.to_string()
            } else if is_exempt(row_idea) || is_exempt(col_idea) {
                EXEMPT.to_string()
            } else {
                let policies: Vec<&str> = requirements
                    .iter()
                    .filter(|(_, groups)| groups.contains(row_idea) && groups.contains(col_idea))
                    .map(|(policy, _)| policy.as_str())
                    .collect();
                if policies.is_empty() {
                    MISSING.to_string()
                } else {
                    policies.join("<br>")
                }
            };
            row.push(cell);
        }
        rows.push(row);
    }

    rows
}

/// Replace every cell that is a known localisation key with its text.
pub fn localise_table(rows: &mut Table, localisation: &LocalisationTable) {
    for cell in rows.iter_mut().flatten() {
        if let Some(text) = localisation.get(cell.as_str()) {
            *cell = text.to_string();
        }
    }
}
