use crate::models::{CarbTargets, InputFields, MealPlan};

/// Results fetched earlier and kept while the runner is back on the input
/// screen, so stepping forward again does not need a new request.
#[derive(Debug, Clone, PartialEq)]
pub struct Retained {
    pub targets: CarbTargets,
    pub plan: Option<MealPlan>,
}

/// Which screen is active, together with the data that screen needs.
///
/// Each variant carries exactly what is valid for it: there is no way to be
/// on the meal-plan screen without a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Input { retained: Option<Retained> },
    CarbResult {
        targets: CarbTargets,
        plan: Option<MealPlan>,
    },
    MealPlan { targets: CarbTargets, plan: MealPlan },
}

impl Default for Step {
    fn default() -> Self {
        Step::Input { retained: None }
    }
}

impl Step {
    pub fn screen(&self) -> Screen {
        match self {
            Step::Input { .. } => Screen::Input,
            Step::CarbResult { .. } => Screen::CarbResult,
            Step::MealPlan { .. } => Screen::MealPlan,
        }
    }

    /// Targets currently held, on screen or retained.
    pub fn targets(&self) -> Option<&CarbTargets> {
        match self {
            Step::Input { retained } => retained.as_ref().map(|r| &r.targets),
            Step::CarbResult { targets, .. } | Step::MealPlan { targets, .. } => Some(targets),
        }
    }

    /// Plan currently held, on screen or retained.
    pub fn meal_plan(&self) -> Option<&MealPlan> {
        match self {
            Step::Input { retained } => retained.as_ref().and_then(|r| r.plan.as_ref()),
            Step::CarbResult { plan, .. } => plan.as_ref(),
            Step::MealPlan { plan, .. } => Some(plan),
        }
    }
}

/// Data-free tag of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Input,
    CarbResult,
    MealPlan,
}

impl Screen {
    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        match self {
            Screen::Input => 1,
            Screen::CarbResult => 2,
            Screen::MealPlan => 3,
        }
    }
}

/// What a renderer needs to draw the active screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Input {
        fields: &'a InputFields,
    },
    CarbResult {
        targets: &'a CarbTargets,
        preferences: &'a [String],
        custom_preference: &'a str,
    },
    MealPlan {
        targets: &'a CarbTargets,
        plan: &'a MealPlan,
    },
}
