use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CarboError, Result};

/// Pounds to kilograms.
pub const LBS_TO_KG: f64 = 0.453592;

/// Length of the carb-loading window before race day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingWindow {
    TwoDays,
    #[default]
    ThreeDays,
}

impl LoadingWindow {
    pub const ALL: [LoadingWindow; 2] = [LoadingWindow::ThreeDays, LoadingWindow::TwoDays];

    pub fn days(self) -> u32 {
        match self {
            LoadingWindow::TwoDays => 2,
            LoadingWindow::ThreeDays => 3,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            2 => Some(LoadingWindow::TwoDays),
            3 => Some(LoadingWindow::ThreeDays),
            _ => None,
        }
    }
}

impl fmt::Display for LoadingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Days", self.days())
    }
}

/// Daily and total carbohydrate targets returned by the calculation endpoint.
///
/// Immutable once received; the wizard only ever replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbTargets {
    pub daily_carb_grams: f64,
    pub total_carb_grams: f64,
    pub loading_days: u32,
}

/// Raw values the runner typed on the input screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFields {
    /// Free text, expected to be a weight in pounds.
    pub weight: String,
    pub loading_window: LoadingWindow,
}

impl InputFields {
    pub fn new(weight: impl Into<String>, loading_window: LoadingWindow) -> Self {
        Self {
            weight: weight.into(),
            loading_window,
        }
    }

    /// Validated weight converted to kilograms.
    pub fn weight_kg(&self) -> Result<f64> {
        parse_weight_lbs(&self.weight).map(lbs_to_kg)
    }
}

#[inline]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * LBS_TO_KG
}

/// Parse a user-entered weight in pounds.
///
/// Blank input is `MissingWeight`; anything that is not a finite number
/// greater than zero is `InvalidWeight`.
pub fn parse_weight_lbs(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CarboError::MissingWeight);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CarboError::InvalidWeight(trimmed.to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CarboError::InvalidWeight(trimmed.to_string()));
    }

    Ok(value)
}
