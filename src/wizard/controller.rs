use tracing::{debug, info, warn};

use super::step::{Retained, Screen, Step, View};
use crate::error::{CarboError, Result};
use crate::models::{CarbTargets, FoodPreferences, InputFields, LoadingWindow, MealPlan};
use crate::service::{CalculateCarbsRequest, GenerateMealPlanRequest, NutritionService};

pub const MISSING_WEIGHT_MESSAGE: &str = "Please enter your weight";
pub const INVALID_WEIGHT_MESSAGE: &str = "Please enter a valid weight in pounds";
pub const CALCULATION_FAILED_MESSAGE: &str =
    "Error calculating carbs. Make sure the backend is running.";
pub const MEAL_PLAN_FAILED_MESSAGE: &str =
    "Error generating meal plan. Make sure the meal plan service has API credits available.";

/// The request currently awaiting a response.
#[derive(Debug, Clone, PartialEq)]
enum InFlight {
    Calculation,
    /// Carries the targets the plan was requested for, so the response can
    /// be applied even if the runner navigated away in the meantime.
    MealPlan { targets: CarbTargets },
}

/// Three-screen carb-loading wizard: input, carb results, meal plan.
///
/// Requests are split into `begin_*`/`finish_*` pairs. `begin_*` validates,
/// marks the wizard as loading and hands back the payload to send;
/// `finish_*` applies whatever came back. Nothing is cancelled: a response
/// that arrives after the runner moved to another screen is still applied.
#[derive(Debug, Default)]
pub struct Wizard {
    step: Step,
    fields: InputFields,
    preferences: FoodPreferences,
    custom_preference: String,
    in_flight: Option<InFlight>,
    error_message: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: InputFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.step.screen()
    }

    pub fn view(&self) -> View<'_> {
        match &self.step {
            Step::Input { .. } => View::Input {
                fields: &self.fields,
            },
            Step::CarbResult { targets, .. } => View::CarbResult {
                targets,
                preferences: self.preferences.as_slice(),
                custom_preference: &self.custom_preference,
            },
            Step::MealPlan { targets, plan } => View::MealPlan { targets, plan },
        }
    }

    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    pub fn targets(&self) -> Option<&CarbTargets> {
        self.step.targets()
    }

    pub fn meal_plan(&self) -> Option<&MealPlan> {
        self.step.meal_plan()
    }

    pub fn preferences(&self) -> &FoodPreferences {
        &self.preferences
    }

    pub fn custom_preference(&self) -> &str {
        &self.custom_preference
    }

    /// True exactly while a request is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether `forward` would move to another screen.
    pub fn can_go_forward(&self) -> bool {
        matches!(
            self.step,
            Step::Input { retained: Some(_) } | Step::CarbResult { plan: Some(_), .. }
        )
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.fields.weight = weight.into();
    }

    pub fn set_loading_window(&mut self, window: LoadingWindow) {
        self.fields.loading_window = window;
    }

    /// Validate the input screen and start a carb calculation.
    ///
    /// Returns `None` when nothing should be sent: another request is still
    /// in flight, the wizard is not on the input screen, or the weight did
    /// not validate (in which case the error message is set).
    pub fn begin_calculation(&mut self) -> Option<CalculateCarbsRequest> {
        if self.loading() {
            debug!("submit ignored, request already in flight");
            return None;
        }
        if self.screen() != Screen::Input {
            return None;
        }

        let weight_kg = match self.fields.weight_kg() {
            Ok(kg) => kg,
            Err(err) => {
                debug!(%err, weight = %self.fields.weight, "weight rejected");
                self.error_message = Some(validation_message(&err).to_string());
                return None;
            }
        };

        self.error_message = None;
        self.in_flight = Some(InFlight::Calculation);

        let request = CalculateCarbsRequest {
            weight_kg,
            carb_load_days: self.fields.loading_window.days(),
        };
        info!(
            weight_kg = request.weight_kg,
            days = request.carb_load_days,
            "carb calculation started"
        );
        Some(request)
    }

    /// Apply the outcome of the request returned by `begin_calculation`.
    pub fn finish_calculation(&mut self, outcome: Result<CarbTargets>) {
        if !matches!(self.in_flight, Some(InFlight::Calculation)) {
            warn!("carb targets arrived with no calculation in flight, ignoring");
            return;
        }
        self.in_flight = None;

        match outcome {
            Ok(targets) => {
                if self.screen() != Screen::Input {
                    warn!(screen = ?self.screen(), "applying carb targets after navigation");
                }
                info!(
                    daily = targets.daily_carb_grams,
                    total = targets.total_carb_grams,
                    days = targets.loading_days,
                    "carb targets received"
                );
                self.step = Step::CarbResult {
                    targets,
                    plan: None,
                };
            }
            Err(err) => {
                warn!(%err, "carb calculation failed");
                self.error_message = Some(CALCULATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Submit the input screen and wait for the result.
    pub async fn submit<S>(&mut self, service: &S)
    where
        S: NutritionService + ?Sized,
    {
        if let Some(request) = self.begin_calculation() {
            let outcome = service.calculate_carbs(&request).await;
            self.finish_calculation(outcome);
        }
    }

    /// Add a suggested food if absent, remove it if present.
    ///
    /// Only the results screen edits preferences; elsewhere this is a no-op
    /// returning false.
    pub fn toggle_suggestion(&mut self, food: &str) -> bool {
        if self.screen() != Screen::CarbResult {
            return false;
        }
        self.preferences.toggle(food)
    }

    pub fn set_custom_preference(&mut self, text: impl Into<String>) {
        self.custom_preference = text.into();
    }

    /// Accept the custom-preference text box, as on pressing Enter.
    ///
    /// The box is emptied whether or not its contents were added.
    pub fn accept_custom_preference(&mut self) -> bool {
        if self.screen() != Screen::CarbResult {
            return false;
        }
        let text = std::mem::take(&mut self.custom_preference);
        self.preferences.add_custom(&text)
    }

    /// Start generating a meal plan for the targets on screen.
    ///
    /// Returns `None` when another request is in flight or the wizard is not
    /// on the results screen.
    pub fn begin_meal_plan(&mut self) -> Option<GenerateMealPlanRequest> {
        if self.loading() {
            debug!("generate ignored, request already in flight");
            return None;
        }
        let Step::CarbResult { targets, .. } = &self.step else {
            return None;
        };
        let targets = targets.clone();

        self.error_message = None;
        let request = GenerateMealPlanRequest {
            daily_carb_grams: targets.daily_carb_grams,
            days: targets.loading_days,
            dietary_restrictions: Vec::new(),
            meal_preferences: self.preferences.to_vec(),
        };
        self.in_flight = Some(InFlight::MealPlan { targets });

        info!(
            daily_carb_grams = request.daily_carb_grams,
            days = request.days,
            preferences = ?request.meal_preferences,
            "meal plan generation started"
        );
        Some(request)
    }

    /// Apply the outcome of the request returned by `begin_meal_plan`.
    pub fn finish_meal_plan(&mut self, outcome: Result<MealPlan>) {
        let targets = match self.in_flight.take() {
            Some(InFlight::MealPlan { targets }) => targets,
            other => {
                self.in_flight = other;
                warn!("meal plan arrived with no generation in flight, ignoring");
                return;
            }
        };

        match outcome {
            Ok(plan) => {
                if self.screen() != Screen::CarbResult {
                    warn!(screen = ?self.screen(), "applying meal plan after navigation");
                }
                info!(days = plan.len(), "meal plan received");
                self.step = Step::MealPlan { targets, plan };
            }
            Err(err) => {
                warn!(%err, "meal plan generation failed");
                self.error_message = Some(MEAL_PLAN_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Generate a meal plan and wait for it.
    pub async fn generate_plan<S>(&mut self, service: &S)
    where
        S: NutritionService + ?Sized,
    {
        if let Some(request) = self.begin_meal_plan() {
            let outcome = service.generate_meal_plan(&request).await;
            self.finish_meal_plan(outcome);
        }
    }

    /// Step back one screen, keeping everything already fetched.
    ///
    /// Returning to the input screen ends the results visit, which drops
    /// the food preferences.
    pub fn back(&mut self) -> bool {
        let next = match std::mem::take(&mut self.step) {
            Step::CarbResult { targets, plan } => {
                self.clear_preferences();
                Step::Input {
                    retained: Some(Retained { targets, plan }),
                }
            }
            Step::MealPlan { targets, plan } => Step::CarbResult {
                targets,
                plan: Some(plan),
            },
            input @ Step::Input { .. } => {
                self.step = input;
                return false;
            }
        };
        self.move_to(next);
        true
    }

    /// Step forward to a screen whose data is already held, without
    /// issuing a request.
    pub fn forward(&mut self) -> bool {
        let next = match std::mem::take(&mut self.step) {
            Step::Input {
                retained: Some(Retained { targets, plan }),
            } => Step::CarbResult { targets, plan },
            Step::CarbResult {
                targets,
                plan: Some(plan),
            } => Step::MealPlan { targets, plan },
            unchanged => {
                self.step = unchanged;
                return false;
            }
        };
        self.move_to(next);
        true
    }

    /// Discard targets, plan and preferences and return to the input
    /// screen. The typed weight and window are kept.
    pub fn start_over(&mut self) -> bool {
        if self.screen() != Screen::MealPlan {
            return false;
        }
        self.clear_preferences();
        self.move_to(Step::Input { retained: None });
        true
    }

    fn move_to(&mut self, next: Step) {
        debug!(from = ?self.step.screen(), to = ?next.screen(), "wizard transition");
        self.step = next;
        self.error_message = None;
    }

    fn clear_preferences(&mut self) {
        self.preferences.clear();
        self.custom_preference.clear();
    }
}

fn validation_message(err: &CarboError) -> &'static str {
    match err {
        CarboError::MissingWeight => MISSING_WEIGHT_MESSAGE,
        _ => INVALID_WEIGHT_MESSAGE,
    }
}
