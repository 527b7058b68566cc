// Author: Dustin Pilgrim
// License: MIT

//! Static reachability over trigger blocks.
//!
//! A trigger block is an object whose pairs are either plain facts
//! (`tag = FRA`) or the connectives `NOT`, `AND` and `OR` wrapping further
//! trigger blocks. A fact is *reachable* when it sits under an even number of
//! `NOT`s. `AND` and `OR` are both transparent: this is a syntactic
//! approximation, nothing here decides whether a trigger can be satisfied.

use indexmap::IndexSet;

use crate::ast::{Key, Value};
use crate::options::WalkOptions;

/// How a pair's key is interpreted inside a trigger block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Not,
    And,
    Or,
    /// Any other key, a plain fact.
    Data,
}

impl ControlKey {
    pub fn classify(key: &Key) -> ControlKey {
        if key.matches("NOT") {
            ControlKey::Not
        } else if key.matches("AND") {
            ControlKey::And
        } else if key.matches("OR") {
            ControlKey::Or
        } else {
            ControlKey::Data
        }
    }
}

/// One normalised entry of a trigger block.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition<'a> {
    Not(ConditionTree<'a>),
    And(ConditionTree<'a>),
    Or(ConditionTree<'a>),
    Data { key: &'a Key, value: &'a Value },
}

/// A trigger block with its control keys decided once, up front.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionTree<'a> {
    pub conditions: Vec<Condition<'a>>,
}

impl<'a> ConditionTree<'a> {
    pub fn from_pairs(pairs: &'a [(Key, Value)]) -> Self {
        Self::from_pairs_with(pairs, &WalkOptions::default())
    }

    /// Normalise `pairs`. Control blocks nested deeper than
    /// `options.max_depth` are replaced by empty branches.
    pub fn from_pairs_with(pairs: &'a [(Key, Value)], options: &WalkOptions) -> Self {
        normalise(pairs, 0, options.max_depth)
    }

    /// Normalise any value. Only objects have conditions; scalars and
    /// arrays (including the empty block) yield an empty tree.
    pub fn from_value(value: &'a Value) -> Self {
        value
            .as_object()
            .map(|pairs| Self::from_pairs(pairs))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Add every string value stored under `key` (case-insensitive) that is
    /// reachable from here to `acc`. `negated` is the parity of the `NOT`s
    /// already passed on the way to this block.
    pub fn collect_into(&self, key: &str, negated: bool, acc: &mut IndexSet<String>) {
        for condition in &self.conditions {
            match condition {
                Condition::Data { key: k, value } => {
                    if !negated && k.matches(key) {
                        if let Some(s) = value.as_str() {
                            acc.insert(s.to_string());
                        }
                    }
                }
                Condition::Not(inner) => inner.collect_into(key, !negated, acc),
                Condition::And(inner) | Condition::Or(inner) => {
                    inner.collect_into(key, negated, acc)
                }
            }
        }
    }

    /// Reachable string values stored under `key`, in first-seen order.
    pub fn collect_reachable(&self, key: &str) -> IndexSet<String> {
        let mut acc = IndexSet::new();
        self.collect_into(key, false, &mut acc);
        acc
    }

    /// True if the exact pair `(key, value)` is reachable from here.
    pub fn contains_mapping(&self, key: &Key, value: &Value, negated: bool) -> bool {
        self.conditions.iter().any(|condition| match condition {
            Condition::Data { key: k, value: v } => !negated && *k == key && *v == value,
            Condition::Not(inner) => inner.contains_mapping(key, value, !negated),
            Condition::And(inner) | Condition::Or(inner) => {
                inner.contains_mapping(key, value, negated)
            }
        })
    }
}

fn normalise<'a>(pairs: &'a [(Key, Value)], depth: usize, max_depth: usize) -> ConditionTree<'a> {
    let conditions = pairs
        .iter()
        .map(|(key, value)| {
            let control = ControlKey::classify(key);
            if control == ControlKey::Data {
                return Condition::Data { key, value };
            }

            let inner = match value.as_object() {
                Some(_) if depth >= max_depth => {
                    log::warn!("trigger nested deeper than {} levels, branch ignored", max_depth);
                    ConditionTree::default()
                }
                Some(items) => normalise(items, depth + 1, max_depth),
                // `NOT = yes`, `OR = { }` and the like match nothing
                None => ConditionTree::default(),
            };

            match control {
                ControlKey::Not => Condition::Not(inner),
                ControlKey::And => Condition::And(inner),
                _ => Condition::Or(inner),
            }
        })
        .collect();

    ConditionTree { conditions }
}

/// Identifiers stored under `key_of_interest` that are reachable in `block`.
pub fn collect_reachable(block: &[(Key, Value)], key_of_interest: &str) -> IndexSet<String> {
    ConditionTree::from_pairs(block).collect_reachable(key_of_interest)
}

/// True if the exact pair `(key, value)` is reachable in `block`.
pub fn contains_mapping(block: &[(Key, Value)], key: &Key, value: &Value) -> bool {
    ConditionTree::from_pairs(block).contains_mapping(key, value, false)
}
