mod controller;
mod step;

pub use controller::{
    CALCULATION_FAILED_MESSAGE, INVALID_WEIGHT_MESSAGE, MEAL_PLAN_FAILED_MESSAGE,
    MISSING_WEIGHT_MESSAGE, Wizard,
};
pub use step::{Retained, Screen, Step, View};
