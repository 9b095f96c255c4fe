//! Reorder Utilities
//!
//! List arithmetic behind drag-and-drop reordering of characters and raids.

use leptos_dragdrop::insert_index;
use serde::Serialize;

use crate::models::{Character, TodoRaid};

/// Body element of the sort endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    pub id: i64,
    pub sort_number: i32,
}

/// Move the element at `from` into drop slot `slot`.
/// Returns false when the drop leaves the order unchanged.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, slot: usize) -> bool {
    if from >= list.len() || slot > list.len() {
        return false;
    }
    match insert_index(from, slot) {
        Some(to) => {
            let item = list.remove(from);
            list.insert(to, item);
            true
        }
        None => false,
    }
}

/// Sort numbers for the whole list in its current order
pub fn sort_requests<T>(list: &[T], id_of: impl Fn(&T) -> i64) -> Vec<SortRequest> {
    list.iter()
        .enumerate()
        .map(|(index, item)| SortRequest {
            id: id_of(item),
            sort_number: index as i32,
        })
        .collect()
}

/// Raids of a character in display order
pub fn raids_in_order(character: &Character) -> Vec<TodoRaid> {
    let mut raids = character.todo_list.clone();
    raids.sort_by_key(|r| r.sort_number);
    raids
}

/// New raid order after dropping raid `raid_id` into `slot`
pub fn reorder_raids(character: &Character, raid_id: i64, slot: usize) -> Option<Vec<SortRequest>> {
    let mut raids = raids_in_order(character);
    let from = raids.iter().position(|r| r.id == raid_id)?;
    if !move_item(&mut raids, from, slot) {
        return None;
    }
    Some(sort_requests(&raids, |r| r.id))
}

/// New order of a server roster after dropping character `character_id`
/// into `slot` of the shown (not hidden) cards. Hidden characters keep their
/// relative order after the shown ones.
pub fn reorder_roster(roster: &[Character], character_id: i64, slot: usize) -> Option<Vec<SortRequest>> {
    let (mut shown, hidden): (Vec<&Character>, Vec<&Character>) =
        roster.iter().partition(|c| c.settings.show_character);
    let from = shown.iter().position(|c| c.character_id == character_id)?;
    if !move_item(&mut shown, from, slot) {
        return None;
    }
    shown.extend(hidden);
    Some(sort_requests(&shown, |c| c.character_id))
}

/// Write sort numbers from `requests` onto matching characters
pub fn apply_character_order(characters: &mut [Character], requests: &[SortRequest]) {
    for request in requests {
        if let Some(c) = characters.iter_mut().find(|c| c.character_id == request.id) {
            c.sort_number = request.sort_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::fixtures::{character, raid};

    #[test]
    fn test_move_down() {
        let mut list = vec![10, 20, 30, 40];
        assert!(move_item(&mut list, 0, 3));
        assert_eq!(list, vec![20, 30, 10, 40]);
    }

    #[test]
    fn test_move_up_to_front() {
        let mut list = vec![10, 20, 30, 40];
        assert!(move_item(&mut list, 3, 0));
        assert_eq!(list, vec![40, 10, 20, 30]);
    }

    #[test]
    fn test_move_to_end_slot() {
        let mut list = vec![10, 20, 30];
        assert!(move_item(&mut list, 0, 3));
        assert_eq!(list, vec![20, 30, 10]);
    }

    #[test]
    fn test_adjacent_slot_is_noop() {
        let mut list = vec![10, 20, 30];
        assert!(!move_item(&mut list, 1, 2));
        assert!(!move_item(&mut list, 1, 1));
        assert!(!move_item(&mut list, 5, 0));
        assert_eq!(list, vec![10, 20, 30]);
    }

    #[test]
    fn test_sort_requests_follow_list_order() {
        let list = vec![(7i64, "a"), (3i64, "b")];
        let requests = sort_requests(&list, |(id, _)| *id);
        assert_eq!(
            requests,
            vec![SortRequest { id: 7, sort_number: 0 }, SortRequest { id: 3, sort_number: 1 }]
        );
    }

    #[test]
    fn test_reorder_raids_uses_display_order() {
        let mut c = character(1, "버서커");
        let mut first = raid(5, "카멘", false);
        first.sort_number = 9;
        c.todo_list = vec![first, raid(6, "에키드나", false), raid(7, "베히모스", false)];
        // Display order is 6, 7, 5; drag 5 to the front
        let requests = reorder_raids(&c, 5, 0).unwrap();
        let ids: Vec<_> = requests.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
        assert!(reorder_raids(&c, 6, 1).is_none());
        assert!(reorder_raids(&c, 99, 0).is_none());
    }

    #[test]
    fn test_reorder_roster_keeps_hidden_last() {
        let mut hidden = character(2, "바드");
        hidden.settings.show_character = false;
        let roster = vec![character(1, "버서커"), hidden, character(3, "도화가"), character(4, "소서리스")];
        let requests = reorder_roster(&roster, 4, 0).unwrap();
        let ids: Vec<_> = requests.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
        assert_eq!(requests[3].sort_number, 3);
    }

    #[test]
    fn test_apply_character_order() {
        let mut roster = vec![character(1, "버서커"), character(2, "바드")];
        apply_character_order(&mut roster, &[SortRequest { id: 2, sort_number: 0 }, SortRequest { id: 1, sort_number: 1 }]);
        assert_eq!(roster[0].sort_number, 1);
        assert_eq!(roster[1].sort_number, 0);
    }
}
