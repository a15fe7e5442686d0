use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Menu catalog keyed by section (breakfast, lunch, dinner, ...). BTreeMap
/// keeps tab order stable across renders.
pub type Menu = BTreeMap<String, MenuCategory>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub available_time: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub dietary_info: Option<Vec<String>>,
}

/// A line in the guest's in-progress order. `line_id` is unique per added
/// line so the same menu item can appear twice and be removed individually.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub line_id: String,
    pub item: MenuItem,
}

pub fn order_total(order: &[OrderItem]) -> f64 {
    order.iter().map(|line| line.item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price,
            category: "breakfast".to_string(),
            image: None,
            dietary_info: None,
        }
    }

    fn line(id: &str, price: f64) -> OrderItem {
        OrderItem {
            line_id: format!("{}-0", id),
            item: item(id, price),
        }
    }

    #[test]
    fn running_total_follows_additions_and_removals() {
        let mut order = vec![line("1", 12.50), line("2", 8.00), line("3", 15.25)];
        assert_eq!(order_total(&order), 35.75);

        order.retain(|l| l.line_id != "2-0");
        assert_eq!(order_total(&order), 27.75);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }
}
