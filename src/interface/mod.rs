pub mod prompts;
pub mod render;

pub use prompts::{
    FaqAction, InputAction, MealPlanAction, ResultAction, closest_suggestion,
    prompt_custom_preference, prompt_faq_action, prompt_input_action, prompt_loading_window,
    prompt_meal_plan_action, prompt_result_action, prompt_suggestions, prompt_weight,
};
pub use render::{
    display_carb_targets, display_error, display_faq, display_meal_plan, display_view,
    format_carb_targets, format_day_label, format_day_plan, format_faq, format_grams,
    format_meal_plan, format_preferences, format_step_header,
};
