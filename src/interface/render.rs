use crate::faq::FAQ_ENTRIES;
use crate::models::{CarbTargets, DayPlan, MealPlan};
use crate::wizard::{Screen, View};

/// Whole grams, rounded: `599.6` -> `600g`.
pub fn format_grams(grams: f64) -> String {
    format!("{}g", grams.round() as i64)
}

/// Carb counts as reported by the service: integers stay integers.
fn format_carbs(grams: f64) -> String {
    if grams.fract() == 0.0 {
        format!("{}g", grams as i64)
    } else {
        format!("{grams:.1}g")
    }
}

/// `day_1` -> `Day 1`.
pub fn format_day_label(label: &str) -> String {
    label
        .replacen('_', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_step_header(screen: Screen) -> String {
    let title = match screen {
        Screen::Input => "Calculate Your Marathon Carb Loading Needs",
        Screen::CarbResult => "Your Carb Loading Plan",
        Screen::MealPlan => "Your Personalized Meal Plan",
    };
    format!("=== Step {} of 3: {} ===", screen.number(), title)
}

pub fn format_carb_targets(targets: &CarbTargets) -> String {
    let rows = [
        ("Daily Carbs", format_grams(targets.daily_carb_grams), "Per day"),
        (
            "Loading Period",
            format!("{} days", targets.loading_days),
            "Duration",
        ),
        ("Total Carbs", format_grams(targets.total_carb_grams), "Overall"),
    ];

    rows.iter()
        .map(|(title, value, subtitle)| format!("  {title:<15} {value:>8}   {subtitle}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_preferences(preferences: &[String]) -> String {
    if preferences.is_empty() {
        "Food preferences: (none)".to_string()
    } else {
        format!("Food preferences: {}", preferences.join(", "))
    }
}

pub fn format_day_plan(label: &str, day: &DayPlan) -> String {
    let mut lines = vec![format!("--- {} ---", format_day_label(label))];

    for (name, meal) in [
        ("Breakfast", &day.breakfast),
        ("Lunch", &day.lunch),
        ("Dinner", &day.dinner),
    ] {
        lines.push(format!(
            "  {name:<10} {} ({} carbs)",
            meal.description,
            format_carbs(meal.carb_grams)
        ));
    }

    if day.snacks.is_empty() {
        lines.push(format!("  {:<10} (none)", "Snacks"));
    } else {
        for (i, snack) in day.snacks.iter().enumerate() {
            let name = if i == 0 { "Snacks" } else { "" };
            lines.push(format!(
                "  {name:<10} {} ({} carbs)",
                snack.description,
                format_carbs(snack.carb_grams)
            ));
        }
    }

    lines.push(format!(
        "  Daily Total: {} carbs",
        format_carbs(day.total_carb_grams)
    ));
    if !day.hydration_notes.is_empty() {
        lines.push(format!("  Hydration: {}", day.hydration_notes));
    }

    lines.join("\n")
}

pub fn format_meal_plan(plan: &MealPlan) -> String {
    if plan.is_empty() {
        return "The meal plan came back empty.".to_string();
    }

    let mut sections: Vec<String> = plan
        .days()
        .into_iter()
        .map(|(label, day)| format_day_plan(label, day))
        .collect();
    let unit = if plan.len() == 1 { "day" } else { "days" };
    sections.push(format!(
        "Plan Total: {} carbs over {} {unit}",
        format_carbs(plan.total_carb_grams()),
        plan.len()
    ));
    sections.join("\n\n")
}

pub fn format_faq() -> String {
    let mut lines = vec!["=== Frequently Asked Questions ===".to_string()];
    for entry in FAQ_ENTRIES {
        lines.push(String::new());
        lines.push(entry.question.to_string());
        lines.push(format!("  {}", entry.answer));
    }
    lines.join("\n")
}

/// Print the active screen of the wizard.
pub fn display_view(view: &View<'_>) {
    println!();
    match view {
        View::Input { fields } => {
            println!("{}", format_step_header(Screen::Input));
            if !fields.weight.is_empty() {
                println!(
                    "  Weight: {} lbs, window: {}",
                    fields.weight, fields.loading_window
                );
            }
        }
        View::CarbResult {
            targets,
            preferences,
            ..
        } => {
            println!("{}", format_step_header(Screen::CarbResult));
            println!();
            println!("{}", format_carb_targets(targets));
            println!();
            println!("{}", format_preferences(preferences));
        }
        View::MealPlan { plan, .. } => {
            println!("{}", format_step_header(Screen::MealPlan));
            println!();
            println!("{}", format_meal_plan(plan));
        }
    }
    println!();
}

pub fn display_carb_targets(targets: &CarbTargets) {
    println!();
    println!("{}", format_step_header(Screen::CarbResult));
    println!();
    println!("{}", format_carb_targets(targets));
    println!();
}

pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("{}", format_step_header(Screen::MealPlan));
    println!();
    println!("{}", format_meal_plan(plan));
    println!();
}

pub fn display_faq() {
    println!();
    println!("{}", format_faq());
    println!();
}

pub fn display_error(message: &str) {
    println!("! {message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Meal, Snack};
    use std::collections::BTreeMap;

    fn sample_day() -> DayPlan {
        DayPlan {
            breakfast: Meal {
                description: "Bagel with honey".to_string(),
                carb_grams: 120.0,
            },
            lunch: Meal {
                description: "Rice bowl".to_string(),
                carb_grams: 180.5,
            },
            dinner: Meal {
                description: "Spaghetti".to_string(),
                carb_grams: 210.0,
            },
            snacks: vec![
                Snack {
                    description: "Banana".to_string(),
                    carb_grams: 27.0,
                },
                Snack {
                    description: "Sports drink".to_string(),
                    carb_grams: 36.0,
                },
            ],
            total_carb_grams: 573.5,
            hydration_notes: "Sip water through the day".to_string(),
        }
    }

    #[test]
    fn test_format_carb_targets_rounds() {
        let out = format_carb_targets(&CarbTargets {
            daily_carb_grams: 599.6,
            total_carb_grams: 1798.9,
            loading_days: 3,
        });
        assert!(out.contains("600g"));
        assert!(out.contains("3 days"));
        assert!(out.contains("1799g"));
    }

    #[test]
    fn test_format_day_label() {
        assert_eq!(format_day_label("day_1"), "Day 1");
        assert_eq!(format_day_label("day_12"), "Day 12");
        assert_eq!(format_day_label("race_eve"), "Race Eve");
    }

    #[test]
    fn test_format_day_plan() {
        let out = format_day_plan("day_2", &sample_day());
        assert!(out.starts_with("--- Day 2 ---"));
        assert!(out.contains("Bagel with honey (120g carbs)"));
        assert!(out.contains("Rice bowl (180.5g carbs)"));
        assert!(out.contains("Sports drink (36g carbs)"));
        assert!(out.contains("Daily Total: 573.5g carbs"));
        assert!(out.contains("Hydration: Sip water through the day"));
    }

    #[test]
    fn test_empty_hydration_note_is_omitted() {
        let mut day = sample_day();
        day.hydration_notes.clear();
        day.snacks.clear();
        let out = format_day_plan("day_1", &day);
        assert!(!out.contains("Hydration"));
        assert!(out.contains("(none)"));
    }

    #[test]
    fn test_format_meal_plan_ends_with_plan_total() {
        let mut days = BTreeMap::new();
        days.insert("day_2".to_string(), sample_day());
        days.insert("day_1".to_string(), sample_day());
        let out = format_meal_plan(&MealPlan::new(days));

        assert!(out.find("Day 1").unwrap() < out.find("Day 2").unwrap());
        assert!(out.ends_with("Plan Total: 1147g carbs over 2 days"));
    }

    #[test]
    fn test_format_empty_meal_plan() {
        assert_eq!(
            format_meal_plan(&MealPlan::default()),
            "The meal plan came back empty."
        );
    }

    #[test]
    fn test_format_faq_lists_every_question() {
        let out = format_faq();
        for entry in FAQ_ENTRIES {
            assert!(out.contains(entry.question));
        }
    }
}
