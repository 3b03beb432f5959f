pub mod plan;
pub mod preferences;
pub mod targets;

pub use plan::{DayPlan, Meal, MealPlan, Snack};
pub use preferences::{FoodPreferences, SUGGESTED_FOODS};
pub use targets::{
    CarbTargets, InputFields, LBS_TO_KG, LoadingWindow, lbs_to_kg, parse_weight_lbs,
};
