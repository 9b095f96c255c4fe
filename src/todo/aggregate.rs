//! Daily / Weekly Totals

use crate::models::Character;

/// Completed-vs-total pair for a summary badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: usize,
    pub completed: usize,
}

impl Totals {
    fn add(&mut self, done: bool) {
        self.total += 1;
        if done {
            self.completed += 1;
        }
    }

    /// Completion percentage, 0 when there is nothing to do
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 / self.total) as u32
        }
    }
}

/// Chaos and guardian slots of visible characters.
/// Each content type counts on its own toggle.
pub fn daily_totals(characters: &[Character]) -> Totals {
    let mut totals = Totals::default();
    for character in characters.iter().filter(|c| c.settings.show_character) {
        if character.settings.show_chaos {
            totals.add(character.chaos_check.is_done());
        }
        if character.settings.show_guardian {
            totals.add(character.guardian_check.is_done());
        }
    }
    totals
}

/// Weekly raid entries of gold characters
pub fn weekly_totals(characters: &[Character]) -> Totals {
    characters
        .iter()
        .filter(|c| c.gold_character)
        .flat_map(|c| c.todo_list.iter())
        .fold(Totals::default(), |mut totals, raid| {
            totals.add(raid.check);
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::fixtures::{character, raid};
    use crate::todo::{ChaosStage, GuardianStage};

    #[test]
    fn test_daily_counts_only_visible_characters() {
        let mut first = character(1, "버서커");
        first.chaos_check = ChaosStage::Done;
        let mut second = character(2, "바드");
        second.settings.show_character = false;
        second.chaos_check = ChaosStage::Done;
        second.guardian_check = GuardianStage::Done;

        let totals = daily_totals(&[first, second]);
        assert_eq!(totals, Totals { total: 2, completed: 1 });
    }

    #[test]
    fn test_daily_content_toggles_are_independent() {
        let mut chaos_only = character(1, "버서커");
        chaos_only.settings.show_guardian = false;
        chaos_only.guardian_check = GuardianStage::Done;
        let mut guardian_only = character(2, "바드");
        guardian_only.settings.show_chaos = false;
        guardian_only.guardian_check = GuardianStage::Done;

        let totals = daily_totals(&[chaos_only, guardian_only]);
        assert_eq!(totals, Totals { total: 2, completed: 1 });
    }

    #[test]
    fn test_chaos_half_done_is_not_completed() {
        let mut c = character(1, "버서커");
        c.chaos_check = ChaosStage::Once;
        c.settings.show_guardian = false;
        assert_eq!(daily_totals(&[c]), Totals { total: 1, completed: 0 });
    }

    #[test]
    fn test_weekly_counts_only_gold_characters() {
        let mut gold = character(1, "버서커");
        gold.gold_character = true;
        gold.todo_list = vec![raid(1, "카멘", true), raid(2, "에키드나", false)];
        let mut alt = character(2, "바드");
        alt.todo_list = vec![raid(3, "카멘", true), raid(4, "베히모스", true)];

        let totals = weekly_totals(&[gold, alt]);
        assert_eq!(totals, Totals { total: 2, completed: 1 });
        assert_eq!(totals.percent(), 50);
    }

    #[test]
    fn test_weekly_counts_hidden_gold_character() {
        let mut hidden = character(1, "버서커");
        hidden.settings.show_character = false;
        hidden.gold_character = true;
        hidden.todo_list = vec![raid(1, "카멘", true), raid(2, "에키드나", false)];

        assert_eq!(weekly_totals(std::slice::from_ref(&hidden)), Totals { total: 2, completed: 1 });
        assert_eq!(daily_totals(&[hidden]), Totals::default());
    }

    #[test]
    fn test_completed_never_exceeds_total() {
        let mut roster = Vec::new();
        for id in 0..12 {
            let mut c = character(id, "버서커");
            c.settings.show_character = id % 2 == 0;
            c.settings.show_chaos = id % 3 != 0;
            c.chaos_check = ChaosStage::try_from((id % 3) as u8).unwrap();
            c.guardian_check = GuardianStage::try_from((id % 2) as u8).unwrap();
            c.gold_character = id % 4 != 1;
            c.todo_list = (0..id).map(|n| raid(n, "카멘", n % 2 == 0)).collect();
            roster.push(c);
        }
        let daily = daily_totals(&roster);
        let weekly = weekly_totals(&roster);
        assert!(daily.completed <= daily.total);
        assert!(weekly.completed <= weekly.total);
    }

    #[test]
    fn test_empty_roster_is_zero() {
        assert_eq!(daily_totals(&[]), Totals::default());
        assert_eq!(weekly_totals(&[]).percent(), 0);
    }
}
