use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{FoodPreferences, LoadingWindow, SUGGESTED_FOODS};

/// Similarity above which free text is offered as a suggested food.
const SUGGESTION_MATCH_THRESHOLD: f64 = 0.88;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Calculate,
    Forward,
    Faq,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    ChooseSuggestions,
    AddCustom,
    Generate,
    Back,
    Forward,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealPlanAction {
    Back,
    StartOver,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqAction {
    Back,
    Quit,
}

/// Choices offered below the FAQ. The first one is the default.
const FAQ_CHOICES: [(&str, FaqAction); 2] = [
    ("Back to the calculator", FaqAction::Back),
    ("Quit", FaqAction::Quit),
];

/// Let the user pick one of `choices`, returning the paired value.
fn select_action<T: Copy>(prompt: &str, choices: &[(&str, T)]) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(choices[selection].1)
}

/// Prompt for body weight in pounds. The raw text is returned; the wizard
/// validates it.
pub fn prompt_weight(current: &str) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt("Your weight (lbs)")
        .allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn prompt_loading_window(current: LoadingWindow) -> Result<LoadingWindow> {
    let options = LoadingWindow::ALL;
    let labels: Vec<String> = options.iter().map(|w| w.to_string()).collect();
    let default = options.iter().position(|w| *w == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Carb-loading window")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

pub fn prompt_input_action(can_forward: bool) -> Result<InputAction> {
    let mut choices = vec![("Calculate carb needs", InputAction::Calculate)];
    if can_forward {
        choices.push(("Forward to previous results", InputAction::Forward));
    }
    choices.push(("FAQ", InputAction::Faq));
    choices.push(("Quit", InputAction::Quit));
    select_action("What next?", &choices)
}

pub fn prompt_result_action(can_forward: bool) -> Result<ResultAction> {
    let mut choices = vec![
        ("Generate meal plan", ResultAction::Generate),
        ("Choose suggested foods", ResultAction::ChooseSuggestions),
        ("Add a food preference", ResultAction::AddCustom),
        ("Back", ResultAction::Back),
    ];
    if can_forward {
        choices.push(("Forward to meal plan", ResultAction::Forward));
    }
    choices.push(("Quit", ResultAction::Quit));
    select_action("What next?", &choices)
}

pub fn prompt_meal_plan_action() -> Result<MealPlanAction> {
    select_action(
        "What next?",
        &[
            ("Back to carb results", MealPlanAction::Back),
            ("Start over", MealPlanAction::StartOver),
            ("Quit", MealPlanAction::Quit),
        ],
    )
}

pub fn prompt_faq_action() -> Result<FaqAction> {
    select_action("What next?", &FAQ_CHOICES)
}

/// Show the suggested foods with the current selection checked.
///
/// Returns the suggestions whose checked state changed, i.e. the ones to
/// toggle.
pub fn prompt_suggestions(selected: &FoodPreferences) -> Result<Vec<&'static str>> {
    let defaults: Vec<bool> = SUGGESTED_FOODS
        .iter()
        .map(|food| selected.contains(food))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Foods you'd like in your plan (space to toggle, enter to confirm)")
        .items(&SUGGESTED_FOODS)
        .defaults(&defaults)
        .interact()?;

    Ok(SUGGESTED_FOODS
        .iter()
        .enumerate()
        .filter(|(i, _)| chosen.contains(i) != defaults[*i])
        .map(|(_, food)| *food)
        .collect())
}

/// Closest suggested food to free text, when it is close enough to be a
/// likely typo. Exact (case-sensitive) matches are not reported.
pub fn closest_suggestion(text: &str) -> Option<&'static str> {
    let text = text.trim();
    if text.is_empty() || SUGGESTED_FOODS.iter().any(|food| *food == text) {
        return None;
    }

    let lowered = text.to_lowercase();
    SUGGESTED_FOODS
        .iter()
        .map(|food| (*food, jaro_winkler(&food.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score >= SUGGESTION_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(food, _)| food)
}

/// Prompt for a free-text food preference.
///
/// Text that looks like a misspelt suggestion is offered as that suggestion.
pub fn prompt_custom_preference() -> Result<String> {
    let text: String = Input::new()
        .with_prompt("Add a food preference (or press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    if let Some(food) = closest_suggestion(&text) {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{food}'?"))
            .default(true)
            .interact()?;
        if confirm {
            return Ok(food.to_string());
        }
    }

    Ok(text)
}
