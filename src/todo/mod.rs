//! Todo Aggregation & Status Engine
//!
//! Derived state computed from the cached character roster: daily and weekly
//! completion totals, per-raid status rows and gauge cell arithmetic.

mod aggregate;
mod gauge;
mod raid_status;
mod stage;

pub use aggregate::{daily_totals, weekly_totals, Totals};
pub use gauge::{filled_cells, value_for_click, CubeCounter, GaugeSpec, REST_GAUGE};
pub use raid_status::raid_status;
pub use stage::{ChaosStage, GuardianStage};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Character, CharacterSettings, TodoRaid};

    pub fn character(id: i64, class_name: &str) -> Character {
        Character {
            character_id: id,
            character_name: format!("Character {}", id),
            character_class_name: class_name.to_string(),
            server_name: "루페온".to_string(),
            item_level: 1620.0,
            sort_number: id as i32,
            chaos_check: Default::default(),
            chaos_gauge: 0,
            guardian_check: Default::default(),
            guardian_gauge: 0,
            gold_character: false,
            cube_ticket: 0,
            todo_list: Vec::new(),
            settings: CharacterSettings::default(),
        }
    }

    pub fn raid(id: i64, week_category: &str, check: bool) -> TodoRaid {
        TodoRaid {
            id,
            name: format!("{} 노말", week_category),
            week_category: week_category.to_string(),
            gold: 0,
            check,
            sort_number: id as i32,
        }
    }
}
