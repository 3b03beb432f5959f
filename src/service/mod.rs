mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CarbTargets, MealPlan};

pub use client::HttpNutritionService;

pub const CALCULATE_CARBS_PATH: &str = "calculate-carbs";
pub const GENERATE_MEAL_PLAN_PATH: &str = "generate-meal-plan";

/// Body of `POST /calculate-carbs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateCarbsRequest {
    pub weight_kg: f64,
    pub carb_load_days: u32,
}

/// Body of `POST /generate-meal-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateMealPlanRequest {
    pub daily_carb_grams: f64,
    pub days: u32,
    /// Not collected by the wizard; always sent empty.
    pub dietary_restrictions: Vec<String>,
    pub meal_preferences: Vec<String>,
}

/// Body returned by `POST /generate-meal-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub meal_plan: MealPlan,
}

/// The remote service that does the carb math and writes meal plans.
#[async_trait]
pub trait NutritionService: Send + Sync {
    async fn calculate_carbs(&self, request: &CalculateCarbsRequest) -> Result<CarbTargets>;

    async fn generate_meal_plan(&self, request: &GenerateMealPlanRequest) -> Result<MealPlan>;
}
