use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use carbomatic::cli::{Cli, Command};
use carbomatic::config::ApiConfig;
use carbomatic::error::{CarboError, Result};
use carbomatic::faq::{FaqToggle, MemoryQueryState};
use carbomatic::interface::{
    FaqAction, InputAction, MealPlanAction, ResultAction, display_carb_targets, display_error,
    display_faq, display_meal_plan, display_view, prompt_custom_preference, prompt_faq_action,
    prompt_input_action, prompt_loading_window, prompt_meal_plan_action, prompt_result_action,
    prompt_suggestions, prompt_weight,
};
use carbomatic::models::{InputFields, LoadingWindow};
use carbomatic::service::{HttpNutritionService, NutritionService};
use carbomatic::wizard::{Screen, Wizard};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "carbomatic=debug"
    } else {
        "carbomatic=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = ApiConfig::resolve(cli.api_url.as_deref(), cli.origin.as_deref())?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    debug!(base_url = %config.base_url, "nutrition service configured");

    let command = cli.command.unwrap_or_default();
    if let Command::Faq = command {
        display_faq();
        return Ok(());
    }

    let service = HttpNutritionService::new(config)?;
    match command {
        Command::Wizard => cmd_wizard(&service).await,
        Command::Calculate { weight, days } => cmd_calculate(&service, weight, days).await,
        Command::Plan {
            weight,
            days,
            preferences,
        } => cmd_plan(&service, weight, days, &preferences).await,
        Command::Faq => Ok(()),
    }
}

/// Wizard seeded from command-line arguments.
fn wizard_for(weight: String, days: u32) -> Wizard {
    let window = LoadingWindow::from_days(days).unwrap_or_default();
    Wizard::with_fields(InputFields::new(weight, window))
}

/// Surface the wizard's banner as a command failure.
fn banner_error(wizard: &Wizard) -> Result<()> {
    match wizard.error_message() {
        Some(message) => Err(CarboError::Wizard(message.to_string())),
        None => Ok(()),
    }
}

/// Calculate carb targets once.
async fn cmd_calculate<S: NutritionService>(service: &S, weight: String, days: u32) -> Result<()> {
    let mut wizard = wizard_for(weight, days);
    wizard.submit(service).await;
    banner_error(&wizard)?;

    if let Some(targets) = wizard.targets() {
        display_carb_targets(targets);
    }
    Ok(())
}

/// Calculate carb targets and generate a meal plan in one go.
async fn cmd_plan<S: NutritionService>(
    service: &S,
    weight: String,
    days: u32,
    preferences: &[String],
) -> Result<()> {
    let mut wizard = wizard_for(weight, days);
    wizard.submit(service).await;
    banner_error(&wizard)?;

    if let Some(targets) = wizard.targets() {
        display_carb_targets(targets);
    }

    for food in preferences {
        wizard.set_custom_preference(food.as_str());
        wizard.accept_custom_preference();
    }

    println!("Generating meal plan...");
    wizard.generate_plan(service).await;
    banner_error(&wizard)?;

    if let Some(plan) = wizard.meal_plan() {
        display_meal_plan(plan);
    }
    Ok(())
}

/// Interactive three-screen wizard.
async fn cmd_wizard<S: NutritionService>(service: &S) -> Result<()> {
    let mut wizard = Wizard::new();
    let mut faq = FaqToggle::new(MemoryQueryState::new());

    loop {
        if faq.is_open() {
            display_faq();
            match prompt_faq_action()? {
                FaqAction::Back => faq.close(),
                FaqAction::Quit => break,
            }
            continue;
        }

        display_view(&wizard.view());
        if let Some(message) = wizard.error_message() {
            display_error(message);
        }

        match wizard.screen() {
            Screen::Input => match prompt_input_action(wizard.can_go_forward())? {
                InputAction::Calculate => {
                    let weight = prompt_weight(&wizard.fields().weight)?;
                    wizard.set_weight(weight);
                    let window = prompt_loading_window(wizard.fields().loading_window)?;
                    wizard.set_loading_window(window);

                    println!("Calculating...");
                    wizard.submit(service).await;
                }
                InputAction::Forward => {
                    wizard.forward();
                }
                InputAction::Faq => faq.open(),
                InputAction::Quit => break,
            },
            Screen::CarbResult => match prompt_result_action(wizard.can_go_forward())? {
                ResultAction::ChooseSuggestions => {
                    for food in prompt_suggestions(wizard.preferences())? {
                        wizard.toggle_suggestion(food);
                    }
                }
                ResultAction::AddCustom => {
                    let text = prompt_custom_preference()?;
                    let pending = text.trim().to_string();
                    wizard.set_custom_preference(text);
                    if !wizard.accept_custom_preference() && !pending.is_empty() {
                        println!("'{pending}' is already in your list.");
                    }
                }
                ResultAction::Generate => {
                    println!("Generating meal plan...");
                    wizard.generate_plan(service).await;
                }
                ResultAction::Back => {
                    wizard.back();
                }
                ResultAction::Forward => {
                    wizard.forward();
                }
                ResultAction::Quit => break,
            },
            Screen::MealPlan => match prompt_meal_plan_action()? {
                MealPlanAction::Back => {
                    wizard.back();
                }
                MealPlanAction::StartOver => {
                    wizard.start_over();
                }
                MealPlanAction::Quit => break,
            },
        }
    }

    Ok(())
}
