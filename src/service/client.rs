use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{
    CALCULATE_CARBS_PATH, CalculateCarbsRequest, GENERATE_MEAL_PLAN_PATH,
    GenerateMealPlanRequest, MealPlanResponse, NutritionService,
};
use crate::config::ApiConfig;
use crate::error::{CarboError, Result};
use crate::models::{CarbTargets, MealPlan};

/// JSON-over-HTTP client for the nutrition service.
pub struct HttpNutritionService {
    http: Client,
    config: ApiConfig,
}

impl HttpNutritionService {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("carbomatic/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// POST a JSON body and decode a JSON reply.
    ///
    /// Any non-success status is an error; the body of a failed reply is
    /// logged but never interpreted.
    async fn post_json<B, T>(&self, path: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path)?;
        debug!(%url, "POST");

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(endpoint = path, %status, %detail, "nutrition service request failed");
            return Err(CarboError::Status {
                endpoint: path,
                status,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| CarboError::Decode {
            endpoint: path,
            source,
        })
    }
}

#[async_trait]
impl NutritionService for HttpNutritionService {
    async fn calculate_carbs(&self, request: &CalculateCarbsRequest) -> Result<CarbTargets> {
        info!(
            weight_kg = request.weight_kg,
            days = request.carb_load_days,
            "calculating carb targets"
        );
        self.post_json(CALCULATE_CARBS_PATH, request).await
    }

    async fn generate_meal_plan(&self, request: &GenerateMealPlanRequest) -> Result<MealPlan> {
        info!(
            daily_carb_grams = request.daily_carb_grams,
            days = request.days,
            preferences = request.meal_preferences.len(),
            "generating meal plan"
        );
        let response: MealPlanResponse = self.post_json(GENERATE_MEAL_PLAN_PATH, request).await?;
        Ok(response.meal_plan)
    }
}
