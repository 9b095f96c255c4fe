//! Global Application State Store
//!
//! Cached server data, using Leptos reactive_stores for fine-grained reactivity.
//! Mutations replace the changed record from the response instead of refetching.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::default_catalog;
use crate::models::{Character, ContentEntry, Friend, Member};

/// Cached server data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// My characters, all servers
    pub characters: Vec<Character>,
    pub friends: Vec<Friend>,
    /// Raid catalog (default until the backend list loads)
    pub contents: Vec<ContentEntry>,
    pub member: Option<Member>,
    pub has_unread: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            contents: default_catalog(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a character in the store by id
pub fn store_update_character(store: &AppStore, updated: Character) {
    replace_character(&mut store.characters().write(), updated);
}

/// Remove a character from the store by id
pub fn store_remove_character(store: &AppStore, character_id: i64) {
    store.characters().write().retain(|c| c.character_id != character_id);
}

/// Replace a friend in the store by id
pub fn store_update_friend(store: &AppStore, updated: Friend) {
    if let Some(friend) = store
        .friends()
        .write()
        .iter_mut()
        .find(|f| f.friend_id == updated.friend_id)
    {
        *friend = updated;
    }
}

/// Replace a character inside whichever friend's roster holds it
pub fn store_update_friend_character(store: &AppStore, updated: Character) {
    for friend in store.friends().write().iter_mut() {
        if replace_character(&mut friend.character_list, updated.clone()) {
            break;
        }
    }
}

fn replace_character(list: &mut [Character], updated: Character) -> bool {
    match list.iter_mut().find(|c| c.character_id == updated.character_id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

// ========================
// Selectors
// ========================

/// Distinct servers, most characters first, then by name
pub fn servers(characters: &[Character]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for character in characters {
        match counts.iter_mut().find(|(name, _)| name == &character.server_name) {
            Some((_, n)) => *n += 1,
            None => counts.push((character.server_name.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Characters of one server in display order; None picks the busiest server
pub fn characters_on(characters: &[Character], server: Option<&str>) -> Vec<Character> {
    let busiest = servers(characters).into_iter().next().map(|(name, _)| name);
    let Some(server) = server.map(str::to_string).or(busiest) else {
        return Vec::new();
    };
    let mut list: Vec<Character> = characters
        .iter()
        .filter(|c| c.server_name == server)
        .cloned()
        .collect();
    list.sort_by_key(|c| c.sort_number);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::fixtures::character;

    fn on(id: i64, server: &str, sort_number: i32) -> Character {
        let mut c = character(id, "버서커");
        c.server_name = server.to_string();
        c.sort_number = sort_number;
        c
    }

    #[test]
    fn test_servers_ordered_by_count_then_name() {
        let roster = vec![on(1, "카제로스", 0), on(2, "루페온", 0), on(3, "카제로스", 1), on(4, "아만", 0)];
        let names: Vec<_> = servers(&roster).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["카제로스", "루페온", "아만"]);
    }

    #[test]
    fn test_characters_on_defaults_to_busiest_server() {
        let roster = vec![on(1, "루페온", 2), on(2, "카제로스", 0), on(3, "루페온", 1)];
        let ids: Vec<_> = characters_on(&roster, None).iter().map(|c| c.character_id).collect();
        assert_eq!(ids, vec![3, 1]);
        let ids: Vec<_> = characters_on(&roster, Some("카제로스")).iter().map(|c| c.character_id).collect();
        assert_eq!(ids, vec![2]);
        assert!(characters_on(&[], None).is_empty());
    }

    #[test]
    fn test_replace_character_by_id() {
        let mut list = vec![on(1, "루페온", 0), on(2, "루페온", 1)];
        let mut updated = on(2, "루페온", 1);
        updated.gold_character = true;
        assert!(replace_character(&mut list, updated));
        assert!(list[1].gold_character);
        assert!(!replace_character(&mut list, on(9, "루페온", 0)));
    }
}
