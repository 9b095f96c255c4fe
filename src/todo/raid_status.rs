//! Raid Status Grouping
//!
//! Groups every weekly raid entry of the roster by week category, in catalog
//! order, with a support/dealer split derived from the owning class.

use crate::models::Character;

/// Party role of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Support,
    Dealer,
}

const SUPPORT_CLASSES: [&str; 3] = ["바드", "홀리나이트", "도화가"];

impl Role {
    pub fn from_class(class_name: &str) -> Self {
        if SUPPORT_CLASSES.contains(&class_name) {
            Role::Support
        } else {
            Role::Dealer
        }
    }
}

/// One row of the raid status board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaidStatus {
    pub name: String,
    pub total: usize,
    pub completed: usize,
    pub support_count: usize,
    pub dealer_count: usize,
}

/// Rows for each category in `order` that has at least one entry.
/// Categories missing from `order` are not reported.
pub fn raid_status<S: AsRef<str>>(characters: &[Character], order: &[S]) -> Vec<RaidStatus> {
    let mut rows: Vec<RaidStatus> = order
        .iter()
        .map(|name| RaidStatus {
            name: name.as_ref().to_string(),
            ..Default::default()
        })
        .collect();

    for character in characters {
        let role = Role::from_class(&character.character_class_name);
        for raid in &character.todo_list {
            let Some(row) = rows.iter_mut().find(|row| row.name == raid.week_category) else {
                continue;
            };
            row.total += 1;
            if raid.check {
                row.completed += 1;
            }
            match role {
                Role::Support => row.support_count += 1,
                Role::Dealer => row.dealer_count += 1,
            }
        }
    }

    rows.retain(|row| row.total > 0);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::fixtures::{character, raid};

    #[test]
    fn test_empty_categories_are_dropped_and_order_kept() {
        let mut c = character(1, "버서커");
        c.todo_list = vec![raid(1, "C", false), raid(2, "B", true)];

        let rows = raid_status(&[c], &["A", "B", "C"]);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(rows[0].completed, 1);
        assert_eq!(rows[1].completed, 0);
    }

    #[test]
    fn test_role_split_by_class() {
        let classes = ["바드", "버서커", "홀리나이트"];
        let roster: Vec<_> = classes
            .iter()
            .enumerate()
            .map(|(i, class)| {
                let mut c = character(i as i64, class);
                c.todo_list = vec![raid(i as i64, "카멘", false)];
                c
            })
            .collect();

        let rows = raid_status(&roster, &["카멘"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].support_count, 2);
        assert_eq!(rows[0].dealer_count, 1);
        assert_eq!(rows[0].total, 3);
    }

    #[test]
    fn test_unlisted_category_is_ignored() {
        let mut c = character(1, "도화가");
        c.todo_list = vec![raid(1, "에기르", true), raid(2, "모르는 레이드", true)];
        let rows = raid_status(&[c], &["에기르".to_string()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, 1);
        assert_eq!(rows[0].support_count, 1);
    }

    #[test]
    fn test_role_from_class() {
        assert_eq!(Role::from_class("도화가"), Role::Support);
        assert_eq!(Role::from_class("소서리스"), Role::Dealer);
    }
}
