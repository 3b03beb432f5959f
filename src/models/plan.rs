use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single meal with its carbohydrate content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "meal")]
    pub description: String,

    #[serde(rename = "carbs")]
    pub carb_grams: f64,
}

/// A snack between meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snack {
    #[serde(rename = "snack")]
    pub description: String,

    #[serde(rename = "carbs")]
    pub carb_grams: f64,
}

/// One day of the loading plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,

    #[serde(default)]
    pub snacks: Vec<Snack>,

    #[serde(rename = "total_carbs")]
    pub total_carb_grams: f64,

    #[serde(default)]
    pub hydration_notes: String,
}

/// Multi-day meal plan keyed by day label (`day_1`, `day_2`, ...).
///
/// The number of days normally equals the loading window, but that is
/// up to the service and is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<String, DayPlan>,
}

impl MealPlan {
    pub fn new(days: BTreeMap<String, DayPlan>) -> Self {
        Self { days }
    }

    pub fn get(&self, label: &str) -> Option<&DayPlan> {
        self.days.get(label)
    }

    /// Days in natural order, so `day_2` comes before `day_10`.
    pub fn days(&self) -> Vec<(&str, &DayPlan)> {
        let mut days: Vec<(&str, &DayPlan)> =
            self.days.iter().map(|(k, v)| (k.as_str(), v)).collect();
        days.sort_by(|a, b| compare_day_labels(a.0, b.0));
        days
    }

    /// Sum of the per-day totals reported by the service.
    pub fn total_carb_grams(&self) -> f64 {
        self.days.values().map(|d| d.total_carb_grams).sum()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Trailing number of a day label, if any (`day_12` -> 12).
fn day_number(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

fn compare_day_labels(a: &str, b: &str) -> Ordering {
    match (day_number(a), day_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}
