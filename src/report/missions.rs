// Author: Dustin Pilgrim
// License: MIT

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::ast::{find, find_all, Document, Key, Value};
use crate::localisation::LocalisationTable;
use crate::options::ReportOptions;
use crate::walker::ConditionTree;

use super::Table;

/// Missions available to one country tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissionCount {
    pub total: u32,
    pub normal: u32,
    pub branching: u32,
}

impl MissionCount {
    fn record(&mut self, branching: bool) {
        self.total += 1;
        if branching {
            self.branching += 1;
        } else {
            self.normal += 1;
        }
    }
}

/// Count the missions of every mission group in `documents` per eligible tag.
/// Tags appear in the order they were first counted.
pub fn count_missions<'a, I>(documents: I, options: &ReportOptions) -> IndexMap<String, MissionCount>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut counts = IndexMap::new();
    for document in documents {
        for (group_key, group) in document {
            match group.as_object() {
                Some(entries) => count_group(entries, options, &mut counts),
                None => log::debug!("{}: not a mission group, skipped", group_key),
            }
        }
    }
    counts
}

fn count_group(entries: &[(Key, Value)], options: &ReportOptions, counts: &mut IndexMap<String, MissionCount>) {
    let tags = eligible_tags(entries);
    if tags.is_empty() {
        return;
    }

    for (key, value) in entries {
        if options.is_skipped_mission_key(&key.to_string()) {
            continue;
        }
        let Some(branching) = mission_kind(value, options) else {
            continue;
        };
        for tag in &tags {
            counts.entry(tag.clone()).or_default().record(branching);
        }
    }
}

/// Tags reachable in the group's last `potential` block.
fn eligible_tags(entries: &[(Key, Value)]) -> IndexSet<String> {
    entries
        .iter()
        .filter(|(k, _)| k.matches("potential"))
        .last()
        .map(|(_, potential)| ConditionTree::from_value(potential).collect_reachable("tag"))
        .unwrap_or_default()
}

/// `Some(true)` for a branching mission, `Some(false)` for a normal one and
/// `None` when the entry is not a mission at all.
fn mission_kind(value: &Value, options: &ReportOptions) -> Option<bool> {
    let items = value.as_object()?;
    if find(items, "trigger").is_none() || find(items, "effect").is_none() {
        return None;
    }

    let icon = find_all(items, "icon").pop()?;
    let icon = icon.as_str().unwrap_or_default();
    Some(options.branching_icons.iter().any(|b| icon.contains(b.as_str())))
}

/// Report rows, header first, sorted by total missions (highest first).
/// With a localisation table the country column reads `Name (TAG)`.
pub fn mission_rows(counts: &IndexMap<String, MissionCount>, localisation: Option<&LocalisationTable>) -> Table {
    let mut sorted: Vec<(&String, &MissionCount)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    let mut rows = vec![vec![
        "Country".to_string(),
        "Total".to_string(),
        "Normal".to_string(),
        "Branching".to_string(),
    ]];

    for (tag, count) in sorted {
        let country = match localisation.and_then(|l| l.get(tag)) {
            Some(name) => format!("{} ({})", name, tag),
            None => tag.clone(),
        };
        rows.push(vec![
            country,
            count.total.to_string(),
            count.normal.to_string(),
            count.branching.to_string(),
        ]);
    }

    rows
}
