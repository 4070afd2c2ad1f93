// src/services/catalog_query.rs
//
// Pure query pipeline over the in-memory catalog.
//
// DESIGN PRINCIPLES:
// 1. Pure - no repository access, no events, no mutation
// 2. Deterministic - same inputs → same output, always
// 3. Order-preserving - filtering keeps the input order; only sorting reorders
// 4. Stable - records with equal sort keys keep their relative order
//
// The pipeline is always recomputed from scratch after a mutation, never
// patched incrementally.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::ability::{Ability, AbilityCategory};
use crate::domain::boss::Boss;
use crate::domain::item::{Item, ItemProperty, ItemType, Rarity};

/// Map-modifier dimension a boss filter can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapModifier {
    RuinedPath,
    Increased,
}

/// Completion dimension of a boss filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    Completed,
    Incomplete,
}

/// Independently-optional predicates; `None` matches everything for that
/// dimension. Active predicates AND-combine.
#[derive(Debug, Clone, Default)]
pub struct BossFilter {
    /// Exact match against the level tier label
    pub level: Option<String>,

    /// Compared against the stringified difficulty, so the boss-rush
    /// sentinel and star ratings share one dimension
    pub difficulty: Option<String>,

    /// Exact match against the derived kind label
    pub kind: Option<String>,

    /// Case-insensitive substring over name, location and description,
    /// OR-combined across the three fields
    pub search: Option<String>,

    pub modifier: Option<MapModifier>,

    pub completion: Option<CompletionFilter>,

    /// Excludes completed records regardless of every other predicate.
    /// Stackable with `completion`: redundant, not contradictory.
    pub hide_completed: bool,
}

/// Narrow the collection to the records matching every active predicate.
/// The result is a subsequence of the input: relative order is preserved.
pub fn filter_bosses(bosses: &[Boss], filter: &BossFilter, completed: &HashSet<u64>) -> Vec<Boss> {
    bosses
        .iter()
        .filter(|boss| matches_boss(boss, filter, completed))
        .cloned()
        .collect()
}

fn matches_boss(boss: &Boss, filter: &BossFilter, completed: &HashSet<u64>) -> bool {
    let level_match = filter
        .level
        .as_deref()
        .map_or(true, |level| boss.level.label() == level);

    let difficulty_match = filter
        .difficulty
        .as_deref()
        .map_or(true, |difficulty| boss.difficulty.to_string() == difficulty);

    let kind_match = filter
        .kind
        .as_deref()
        .map_or(true, |kind| boss.kind_label() == kind);

    let search_match = filter
        .search
        .as_deref()
        .map_or(true, |query| matches_search(boss, query));

    let modifier_match = match filter.modifier {
        None => true,
        Some(MapModifier::RuinedPath) => boss.has_ruined_path,
        Some(MapModifier::Increased) => boss.has_increased,
    };

    let completion_match = match filter.completion {
        None => true,
        Some(CompletionFilter::Completed) => completed.contains(&boss.id),
        Some(CompletionFilter::Incomplete) => !completed.contains(&boss.id),
    };

    let hide_match = !filter.hide_completed || !completed.contains(&boss.id);

    level_match
        && difficulty_match
        && kind_match
        && search_match
        && modifier_match
        && completion_match
        && hide_match
}

fn matches_search(boss: &Boss, query: &str) -> bool {
    let query = query.to_lowercase();
    let hit = |field: &str| field.to_lowercase().contains(&query);

    hit(&boss.name)
        || boss.location.as_deref().map_or(false, hit)
        || boss.description.as_deref().map_or(false, hit)
}

/// The user-selectable sort dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Level,
    Difficulty,
    Name,
    Kind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Order a filtered subset.
///
/// Completed records always sink to the bottom; the direction flag flips
/// only the secondary key. The sort is stable: records that compare equal
/// keep their relative order from the input.
pub fn sort_bosses(
    mut bosses: Vec<Boss>,
    key: SortKey,
    direction: SortDirection,
    completed: &HashSet<u64>,
) -> Vec<Boss> {
    bosses.sort_by(|a, b| {
        let a_done = completed.contains(&a.id);
        let b_done = completed.contains(&b.id);
        if a_done != b_done {
            return if a_done {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    bosses
}

fn compare_by_key(a: &Boss, b: &Boss, key: SortKey) -> Ordering {
    match key {
        SortKey::Level => a.level.rank().cmp(&b.level.rank()),
        SortKey::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Kind => a
            .kind_label()
            .to_lowercase()
            .cmp(&b.kind_label().to_lowercase()),
    }
}

/// Independently-optional predicates over the item collection
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub item_type: Option<ItemType>,
    pub rarity: Option<Rarity>,

    /// The item must carry this property with a positive value
    pub property: Option<ItemProperty>,

    /// Case-insensitive substring over name and description
    pub search: Option<String>,
}

pub fn filter_items(items: &[Item], filter: &ItemFilter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_item(item, filter))
        .cloned()
        .collect()
}

fn matches_item(item: &Item, filter: &ItemFilter) -> bool {
    let type_match = filter
        .item_type
        .map_or(true, |item_type| item.item_type == item_type);

    let rarity_match = filter.rarity.map_or(true, |rarity| item.rarity == rarity);

    let property_match = filter
        .property
        .map_or(true, |property| item.has_property(property));

    let search_match = filter.search.as_deref().map_or(true, |query| {
        let query = query.to_lowercase();
        item.name.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query)
    });

    type_match && rarity_match && property_match && search_match
}

/// Filter the static ability table by category; `None` keeps everything
pub fn filter_abilities(abilities: &[Ability], category: Option<AbilityCategory>) -> Vec<Ability> {
    match category {
        None => abilities.to_vec(),
        Some(category) => abilities
            .iter()
            .filter(|ability| ability.category == category)
            .cloned()
            .collect(),
    }
}
