use std::collections::BTreeMap;
use std::sync::Mutex;

use assert_float_eq::assert_float_absolute_eq;
use async_trait::async_trait;

use carbomatic::error::{CarboError, Result};
use carbomatic::interface::{format_carb_targets, format_meal_plan};
use carbomatic::models::{CarbTargets, DayPlan, InputFields, LoadingWindow, Meal, MealPlan, Snack};
use carbomatic::service::{CalculateCarbsRequest, GenerateMealPlanRequest, NutritionService};
use carbomatic::wizard::{
    CALCULATION_FAILED_MESSAGE, MEAL_PLAN_FAILED_MESSAGE, Screen, View, Wizard,
};

/// Scripted stand-in for the nutrition service that records every request.
#[derive(Default)]
struct FakeService {
    targets: Option<CarbTargets>,
    plan: Option<MealPlan>,
    calculations: Mutex<Vec<CalculateCarbsRequest>>,
    plans: Mutex<Vec<GenerateMealPlanRequest>>,
}

impl FakeService {
    fn new(targets: Option<CarbTargets>, plan: Option<MealPlan>) -> Self {
        Self {
            targets,
            plan,
            ..Self::default()
        }
    }

    fn calculations(&self) -> Vec<CalculateCarbsRequest> {
        self.calculations.lock().unwrap().clone()
    }

    fn plans(&self) -> Vec<GenerateMealPlanRequest> {
        self.plans.lock().unwrap().clone()
    }
}

fn server_error(endpoint: &'static str) -> CarboError {
    CarboError::Status {
        endpoint,
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[async_trait]
impl NutritionService for FakeService {
    async fn calculate_carbs(&self, request: &CalculateCarbsRequest) -> Result<CarbTargets> {
        self.calculations.lock().unwrap().push(request.clone());
        self.targets.clone().ok_or_else(|| server_error("calculate-carbs"))
    }

    async fn generate_meal_plan(&self, request: &GenerateMealPlanRequest) -> Result<MealPlan> {
        self.plans.lock().unwrap().push(request.clone());
        self.plan.clone().ok_or_else(|| server_error("generate-meal-plan"))
    }
}

fn race_targets() -> CarbTargets {
    CarbTargets {
        daily_carb_grams: 600.0,
        total_carb_grams: 1800.0,
        loading_days: 3,
    }
}

fn one_day_plan() -> MealPlan {
    let mut days = BTreeMap::new();
    days.insert(
        "day_1".to_string(),
        DayPlan {
            breakfast: Meal {
                description: "Oatmeal with bananas and honey".to_string(),
                carb_grams: 150.0,
            },
            lunch: Meal {
                description: "Rice bowl with chicken".to_string(),
                carb_grams: 180.0,
            },
            dinner: Meal {
                description: "Pasta marinara".to_string(),
                carb_grams: 200.0,
            },
            snacks: vec![Snack {
                description: "Banana with rice cakes".to_string(),
                carb_grams: 70.0,
            }],
            total_carb_grams: 600.0,
            hydration_notes: "Drink 3-4 liters of water".to_string(),
        },
    );
    MealPlan::new(days)
}

fn wizard_with_weight(weight: &str) -> Wizard {
    Wizard::with_fields(InputFields::new(weight, LoadingWindow::ThreeDays))
}

#[tokio::test]
async fn test_invalid_weights_stay_on_input() {
    let service = FakeService::new(Some(race_targets()), None);

    for weight in ["", "  ", "abc", "0", "-154", "1e400", "NaN", "154 lbs"] {
        let mut wizard = wizard_with_weight(weight);
        wizard.submit(&service).await;

        assert_eq!(wizard.screen(), Screen::Input, "weight {weight:?}");
        assert!(
            wizard.error_message().is_some_and(|m| !m.is_empty()),
            "weight {weight:?} should set an error"
        );
        assert!(!wizard.loading());
    }

    assert!(service.calculations().is_empty(), "invalid input reached the network");
}

#[tokio::test]
async fn test_weight_is_sent_in_kilograms() {
    for lbs in [90.0, 120.5, 154.0, 200.0, 310.25] {
        let service = FakeService::new(Some(race_targets()), None);
        let mut wizard = wizard_with_weight(&lbs.to_string());
        wizard.submit(&service).await;

        let sent = service.calculations();
        assert_eq!(sent.len(), 1);
        assert_float_absolute_eq!(sent[0].weight_kg, lbs * 0.453592, 1e-9);
    }
}

#[tokio::test]
async fn test_calculation_then_results_screen() {
    let service = FakeService::new(Some(race_targets()), None);
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;

    let sent = service.calculations();
    assert_float_absolute_eq!(sent[0].weight_kg, 69.85, 0.01);
    assert_eq!(sent[0].carb_load_days, 3);

    assert_eq!(wizard.screen(), Screen::CarbResult);
    assert!(!wizard.loading());
    assert!(wizard.error_message().is_none());

    let View::CarbResult { targets, .. } = wizard.view() else {
        panic!("expected the results view");
    };
    let rendered = format_carb_targets(targets);
    assert!(rendered.contains("600g"));
    assert!(rendered.contains("3 days"));
    assert!(rendered.contains("1800g"));
}

#[tokio::test]
async fn test_back_then_forward_does_not_refetch() {
    let service = FakeService::new(Some(race_targets()), None);
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;
    let before = wizard.targets().cloned();

    assert!(wizard.back());
    assert_eq!(wizard.screen(), Screen::Input);
    assert_eq!(wizard.fields().weight, "154");

    assert!(wizard.forward());
    assert_eq!(wizard.screen(), Screen::CarbResult);
    assert_eq!(wizard.targets().cloned(), before);
    assert_eq!(service.calculations().len(), 1);
}

#[tokio::test]
async fn test_meal_plan_request_carries_preferences() {
    let service = FakeService::new(Some(race_targets()), Some(one_day_plan()));
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;

    wizard.toggle_suggestion("Rice");
    wizard.toggle_suggestion("Bananas");
    wizard.generate_plan(&service).await;

    let sent = service.plans();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        GenerateMealPlanRequest {
            daily_carb_grams: 600.0,
            days: 3,
            dietary_restrictions: Vec::new(),
            meal_preferences: vec!["Rice".to_string(), "Bananas".to_string()],
        }
    );

    assert_eq!(wizard.screen(), Screen::MealPlan);
    let View::MealPlan { plan, .. } = wizard.view() else {
        panic!("expected the meal plan view");
    };
    let rendered = format_meal_plan(plan);
    assert!(rendered.contains("Day 1"));
    assert!(rendered.contains("Oatmeal with bananas and honey"));
    assert!(rendered.contains("Rice bowl with chicken"));
    assert!(rendered.contains("Pasta marinara"));
    assert!(rendered.contains("Banana with rice cakes"));
    assert!(rendered.contains("Drink 3-4 liters of water"));
}

#[tokio::test]
async fn test_calculation_failure_keeps_input() {
    let service = FakeService::new(None, None);
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;

    assert_eq!(wizard.screen(), Screen::Input);
    assert!(!wizard.loading());
    assert_eq!(wizard.error_message(), Some(CALCULATION_FAILED_MESSAGE));
    assert_ne!(wizard.error_message(), Some(MEAL_PLAN_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_meal_plan_failure_keeps_results() {
    let service = FakeService::new(Some(race_targets()), None);
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;
    wizard.generate_plan(&service).await;

    assert_eq!(wizard.screen(), Screen::CarbResult);
    assert!(!wizard.loading());
    assert_eq!(wizard.error_message(), Some(MEAL_PLAN_FAILED_MESSAGE));
    assert_eq!(wizard.targets(), Some(&race_targets()));

    // going back clears the banner
    wizard.back();
    assert!(wizard.error_message().is_none());
}

#[tokio::test]
async fn test_retry_clears_previous_error() {
    let failing = FakeService::new(None, None);
    let working = FakeService::new(Some(race_targets()), None);
    let mut wizard = wizard_with_weight("154");

    wizard.submit(&failing).await;
    assert!(wizard.error_message().is_some());

    wizard.submit(&working).await;
    assert!(wizard.error_message().is_none());
    assert_eq!(wizard.screen(), Screen::CarbResult);
}

#[tokio::test]
async fn test_start_over_clears_results_but_keeps_fields() {
    let service = FakeService::new(Some(race_targets()), Some(one_day_plan()));
    let mut wizard = wizard_with_weight("154");
    wizard.submit(&service).await;
    wizard.toggle_suggestion("Rice");
    wizard.generate_plan(&service).await;
    assert_eq!(wizard.screen(), Screen::MealPlan);

    assert!(wizard.start_over());
    assert_eq!(wizard.screen(), Screen::Input);
    assert!(wizard.targets().is_none());
    assert!(wizard.meal_plan().is_none());
    assert!(wizard.error_message().is_none());
    assert!(wizard.preferences().is_empty());
    assert!(!wizard.can_go_forward());

    assert_eq!(wizard.fields().weight, "154");
    assert_eq!(wizard.fields().loading_window, LoadingWindow::ThreeDays);
}

#[test]
fn test_double_submit_is_ignored_while_loading() {
    let mut wizard = wizard_with_weight("154");
    assert!(wizard.begin_calculation().is_some());
    assert!(wizard.begin_calculation().is_none());

    wizard.finish_calculation(Ok(race_targets()));
    assert!(wizard.begin_meal_plan().is_some());
    assert!(wizard.begin_meal_plan().is_none());
    assert!(wizard.loading());
}

#[test]
fn test_late_meal_plan_is_applied_after_navigating_back() {
    let mut wizard = wizard_with_weight("154");
    wizard.begin_calculation().unwrap();
    wizard.finish_calculation(Ok(race_targets()));

    wizard.begin_meal_plan().unwrap();
    wizard.back();
    assert_eq!(wizard.screen(), Screen::Input);
    assert!(wizard.loading());

    // No cancellation: the response still lands and moves the wizard.
    wizard.finish_meal_plan(Ok(one_day_plan()));
    assert_eq!(wizard.screen(), Screen::MealPlan);
    assert!(!wizard.loading());
    assert_eq!(wizard.targets(), Some(&race_targets()));
}

#[test]
fn test_late_failure_after_navigating_back_leaves_screen() {
    let mut wizard = wizard_with_weight("154");
    wizard.begin_calculation().unwrap();
    wizard.finish_calculation(Ok(race_targets()));

    wizard.begin_meal_plan().unwrap();
    wizard.back();
    wizard.finish_meal_plan(Err(server_error("generate-meal-plan")));

    assert_eq!(wizard.screen(), Screen::Input);
    assert_eq!(wizard.error_message(), Some(MEAL_PLAN_FAILED_MESSAGE));
}
