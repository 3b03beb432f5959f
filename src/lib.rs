pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod interface;
pub mod models;
pub mod service;
pub mod wizard;

pub use error::{CarboError, Result};
pub use models::{CarbTargets, InputFields, LoadingWindow, MealPlan};
pub use service::{HttpNutritionService, NutritionService};
pub use wizard::{Screen, Wizard};
