//! Reference validation for a game document.
//!
//! Validation never fails: dangling references are authoring feedback, so
//! they come back as data in a [`ValidationReport`]. Only `errors` affect
//! `valid`; warnings alone never do.
//!
//! The default rules check exactly two kinds of reference:
//! - monmus -> attribute types and learnable skills
//! - skill -> attribute type
//!
//! Item references (shop stock, map drops, rewards) are not checked.
//! [`ValidationRules::strict`] opts into duplicate-id errors and quest
//! prerequisite cycle warnings on top of the defaults.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::aggregates::GameData;
use crate::ids::QuestId;

/// Outcome of validating one `GameData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff `errors` is empty
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_findings(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            warnings,
            errors,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Which checks to run beyond the reference checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Report two entities of one type sharing an id as an error
    #[serde(default)]
    pub duplicate_ids: bool,
    /// Report cycles in quest prerequisites as warnings
    #[serde(default)]
    pub quest_cycles: bool,
}

impl ValidationRules {
    pub fn strict() -> Self {
        Self {
            duplicate_ids: true,
            quest_cycles: true,
        }
    }
}

/// Validate with the default reference checks only.
pub fn validate(data: &GameData) -> ValidationReport {
    validate_with(data, ValidationRules::default())
}

pub fn validate_with(data: &GameData, rules: ValidationRules) -> ValidationReport {
    let mut warnings = dangling_references(data);
    let mut errors = Vec::new();

    if rules.duplicate_ids {
        errors.extend(duplicate_ids(data));
    }
    if rules.quest_cycles {
        warnings.extend(quest_cycles(data));
    }

    ValidationReport::from_findings(warnings, errors)
}

fn dangling_references(data: &GameData) -> Vec<String> {
    let attribute_ids = data.attribute_ids();
    let skill_ids = data.skill_ids();
    let mut warnings = Vec::new();

    for monmus in &data.monmus_list {
        for attribute_id in &monmus.attribute_types {
            if !attribute_ids.contains(attribute_id) {
                warnings.push(format!(
                    "Monmus '{}' (ID: {}) references missing attribute type ID {}",
                    monmus.name.primary(),
                    monmus.id,
                    attribute_id
                ));
            }
        }

        for skill_id in monmus.declared_skill_ids() {
            if !skill_ids.contains(&skill_id) {
                warnings.push(format!(
                    "Monmus '{}' (ID: {}) references missing skill ID {}",
                    monmus.name.primary(),
                    monmus.id,
                    skill_id
                ));
            }
        }
    }

    for skill in &data.skills {
        if !attribute_ids.contains(&skill.attribute_type_id) {
            warnings.push(format!(
                "Skill '{}' (ID: {}) references missing attribute type ID {}",
                skill.name.primary(),
                skill.id,
                skill.attribute_type_id
            ));
        }
    }

    warnings
}

fn duplicate_ids(data: &GameData) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(duplicates_in("attribute type", data.attributes.iter().map(|a| a.id)));
    errors.extend(duplicates_in("skill", data.skills.iter().map(|s| s.id)));
    errors.extend(duplicates_in("item", data.items.iter().map(|i| i.id)));
    errors.extend(duplicates_in("monmus", data.monmus_list.iter().map(|m| m.id)));
    errors.extend(duplicates_in("map node", data.map_nodes.iter().map(|n| n.id.clone())));
    errors.extend(duplicates_in("event", data.events.iter().map(|e| e.id.clone())));
    errors.extend(duplicates_in("NPC", data.npcs.iter().map(|n| n.id)));
    errors.extend(duplicates_in("quest", data.quests.iter().map(|q| q.id)));
    errors
}

/// One message per id that occurs more than once, in first-seen order.
fn duplicates_in<K>(label: &str, ids: impl Iterator<Item = K>) -> Vec<String>
where
    K: Eq + Hash + Clone + Display,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for id in ids {
        let count = counts.entry(id.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(id);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter_map(|id| {
            let count = counts.get(&id).copied().unwrap_or(0);
            (count > 1).then(|| format!("Duplicate {label} ID {id} ({count} entries)"))
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

fn quest_cycles(data: &GameData) -> Vec<String> {
    let mut edges: BTreeMap<QuestId, Vec<QuestId>> = BTreeMap::new();
    for quest in &data.quests {
        edges
            .entry(quest.id)
            .or_default()
            .extend(quest.required_quest_ids.iter().copied());
    }

    let mut state: HashMap<QuestId, Visit> = HashMap::new();
    let mut warnings = Vec::new();
    for quest in &data.quests {
        let mut path = Vec::new();
        walk_prerequisites(quest.id, &edges, &mut state, &mut path, &mut warnings);
    }
    warnings
}

fn walk_prerequisites(
    quest: QuestId,
    edges: &BTreeMap<QuestId, Vec<QuestId>>,
    state: &mut HashMap<QuestId, Visit>,
    path: &mut Vec<QuestId>,
    warnings: &mut Vec<String>,
) {
    if state.contains_key(&quest) {
        return;
    }
    state.insert(quest, Visit::InProgress);
    path.push(quest);

    for &next in edges.get(&quest).map(Vec::as_slice).unwrap_or_default() {
        // Prerequisites pointing outside the document cannot close a cycle
        if !edges.contains_key(&next) {
            continue;
        }
        match state.get(&next).copied() {
            Some(Visit::InProgress) => {
                let start = path.iter().position(|q| *q == next).unwrap_or(0);
                let cycle: Vec<String> = path[start..]
                    .iter()
                    .chain(std::iter::once(&next))
                    .map(ToString::to_string)
                    .collect();
                warnings.push(format!("Quest prerequisite cycle: {}", cycle.join(" -> ")));
            }
            Some(Visit::Done) => {}
            None => walk_prerequisites(next, edges, state, path, warnings),
        }
    }

    path.pop();
    state.insert(quest, Visit::Done);
}
