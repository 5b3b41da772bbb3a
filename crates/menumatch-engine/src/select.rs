//! Final selection: group, rank, dedup, and cap raw matches per dish.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use menumatch_core::Match;

/// Characters of snippet compared when deduplicating near-identical quotes.
const DEDUP_PREFIX_LEN: usize = 50;

/// Reduce raw matches to at most `per_dish_cap` per dish.
///
/// Matches are grouped by dish, stable-sorted on the composite key
/// (match-type priority, descending rating), deduplicated on the first 50
/// characters of the snippet (first occurrence after the sort wins), then
/// truncated to the cap. Idempotent and side-effect free.
pub fn select_top_matches(
    all_matches: &[Match],
    per_dish_cap: usize,
) -> HashMap<Uuid, Vec<Match>> {
    let mut groups: HashMap<Uuid, Vec<Match>> = HashMap::new();
    for m in all_matches {
        groups.entry(m.dish_id).or_default().push(m.clone());
    }

    for group in groups.values_mut() {
        group.sort_by_key(|m| (m.match_type.priority(), Reverse(m.rating)));

        let mut seen: HashSet<String> = HashSet::new();
        group.retain(|m| {
            let prefix: String = m.review_snippet.chars().take(DEDUP_PREFIX_LEN).collect();
            seen.insert(prefix)
        });

        group.truncate(per_dish_cap);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use menumatch_core::MatchType;

    fn raw(dish_id: Uuid, snippet: &str, rating: u8, match_type: MatchType) -> Match {
        Match {
            dish_id,
            dish_name: "Lobster Roll".to_string(),
            review_snippet: snippet.to_string(),
            author: "Pat".to_string(),
            rating,
            source_term: "lobster roll".to_string(),
            match_type,
        }
    }

    #[test]
    fn test_name_matches_precede_keyword_and_general() {
        let id = Uuid::new_v4();
        let matches = vec![
            raw(id, "A general quote about the food being great.", 5, MatchType::General),
            raw(id, "A keyword quote mentioning the lobster here.", 5, MatchType::Keyword),
            raw(id, "A name quote praising the lobster roll itself.", 4, MatchType::Name),
        ];
        let selected = select_top_matches(&matches, 3);
        let kept = &selected[&id];
        assert_eq!(kept[0].match_type, MatchType::Name);
        assert_eq!(kept[1].match_type, MatchType::Keyword);
        assert_eq!(kept[2].match_type, MatchType::General);
    }

    #[test]
    fn test_higher_rating_wins_within_a_type() {
        let id = Uuid::new_v4();
        let matches = vec![
            raw(id, "Three star take on the lobster roll today.", 3, MatchType::Name),
            raw(id, "Five star take on the lobster roll today.", 5, MatchType::Name),
        ];
        let selected = select_top_matches(&matches, 3);
        assert_eq!(selected[&id][0].rating, 5);
        assert_eq!(selected[&id][1].rating, 3);
    }

    #[test]
    fn test_shared_fifty_char_prefix_collapses() {
        let id = Uuid::new_v4();
        let shared = "The lobster roll was outstanding and the fries were";
        let matches = vec![
            raw(id, &format!("{shared} crisp."), 5, MatchType::Name),
            raw(id, &format!("{shared} limp."), 5, MatchType::Name),
        ];
        let selected = select_top_matches(&matches, 3);
        assert_eq!(selected[&id].len(), 1);
        assert!(selected[&id][0].review_snippet.ends_with("crisp."));
    }

    #[test]
    fn test_cap_is_never_exceeded() {
        let id = Uuid::new_v4();
        let matches: Vec<Match> = (0..6)
            .map(|i| {
                raw(
                    id,
                    &format!("Distinct review number {i} praising the lobster roll."),
                    5,
                    MatchType::Name,
                )
            })
            .collect();
        let selected = select_top_matches(&matches, 3);
        assert_eq!(selected[&id].len(), 3);
    }

    #[test]
    fn test_groups_are_per_dish() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let matches = vec![
            raw(a, "Quote for the first dish in the list here.", 5, MatchType::Name),
            raw(b, "Quote for the second dish in the list here.", 4, MatchType::Keyword),
        ];
        let selected = select_top_matches(&matches, 3);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[&a].len(), 1);
        assert_eq!(selected[&b].len(), 1);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let id = Uuid::new_v4();
        let matches = vec![
            raw(id, "First distinct quote about the lobster roll.", 5, MatchType::Name),
            raw(id, "Second distinct quote about the lobster roll.", 4, MatchType::Keyword),
        ];
        let once = select_top_matches(&matches, 3);
        let again = select_top_matches(&once[&id], 3);
        assert_eq!(once[&id].len(), again[&id].len());
    }
}
