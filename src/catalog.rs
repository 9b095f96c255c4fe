//! Content Catalog
//!
//! Weekly raid names grouped by week category. The backend's list replaces
//! the built-in one once loaded.

use crate::models::ContentEntry;

const DEFAULT_RAIDS: &[(&str, &str)] = &[
    ("모르둠 하드", "모르둠"),
    ("모르둠 노말", "모르둠"),
    ("아브렐슈드 2막 하드", "아브렐슈드 2막"),
    ("아브렐슈드 2막 노말", "아브렐슈드 2막"),
    ("에기르 하드", "에기르"),
    ("에기르 노말", "에기르"),
    ("베히모스", "베히모스"),
    ("에키드나 하드", "에키드나"),
    ("에키드나 노말", "에키드나"),
    ("카멘 하드", "카멘"),
    ("카멘 노말", "카멘"),
    ("상아탑 하드", "상아탑"),
    ("상아탑 노말", "상아탑"),
    ("일리아칸 하드", "일리아칸"),
    ("일리아칸 노말", "일리아칸"),
    ("카양겔 하드", "카양겔"),
    ("카양겔 노말", "카양겔"),
    ("아브렐슈드 하드", "아브렐슈드"),
    ("아브렐슈드 노말", "아브렐슈드"),
    ("쿠크세이튼", "쿠크세이튼"),
    ("비아키스 하드", "비아키스"),
    ("비아키스 노말", "비아키스"),
    ("발탄 하드", "발탄"),
    ("발탄 노말", "발탄"),
];

/// Built-in catalog used until the backend list arrives
pub fn default_catalog() -> Vec<ContentEntry> {
    DEFAULT_RAIDS
        .iter()
        .enumerate()
        .map(|(i, (name, category))| ContentEntry {
            id: i as i64 + 1,
            name: name.to_string(),
            category: category.to_string(),
            sort_order: i as i32,
        })
        .collect()
}

/// Distinct categories ordered by their lowest `sort_order`
pub fn week_category_order(entries: &[ContentEntry]) -> Vec<String> {
    let mut sorted: Vec<&ContentEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.sort_order);

    let mut order: Vec<String> = Vec::new();
    for entry in sorted {
        if !order.iter().any(|c| c == &entry.category) {
            order.push(entry.category.clone());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, category: &str, sort_order: i32) -> ContentEntry {
        ContentEntry {
            id,
            name: format!("{} {}", category, id),
            category: category.to_string(),
            sort_order,
        }
    }

    #[test]
    fn test_order_follows_sort_order_not_input_order() {
        let entries = vec![entry(1, "카멘", 5), entry(2, "에기르", 1), entry(3, "카멘", 0)];
        assert_eq!(week_category_order(&entries), vec!["카멘", "에기르"]);
    }

    #[test]
    fn test_default_catalog_has_unique_categories() {
        let order = week_category_order(&default_catalog());
        assert_eq!(order.first().map(String::as_str), Some("모르둠"));
        assert_eq!(order.last().map(String::as_str), Some("발탄"));
        let mut deduped = order.clone();
        deduped.dedup();
        assert_eq!(order, deduped);
        assert_eq!(order.len(), 13);
    }
}
