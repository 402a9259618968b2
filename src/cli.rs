use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use wanderlust::models::plan::{PlanFilter, PlanType};
use wanderlust::service::view_flow::{PlanDraft, View, ViewController};

#[derive(Parser)]
#[command(name = "wanderlust", about = "Travel-planning dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: pick a destination, then navigate the views.
    Session,
    /// List available countries.
    Countries,
    /// Show a single view by its path, e.g. /my-plans.
    View { path: String },
    /// List saved plans, optionally filtered by type.
    Plans {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Save a plan directly.
    Save {
        title: String,
        #[arg(long, default_value = "other")]
        r#type: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        extra: Option<String>,
    },
    /// Delete a saved plan by id.
    Delete { id: String },
    /// Delete all saved plans.
    Clear,
    /// Convert an amount between currencies.
    Convert { amount: f64, from: String, to: String },
}

pub async fn cli(mut controller: ViewController) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            if let Err(e) = session(&mut controller).await {
                println!("Session ended: {}", e);
            }
        }
        Commands::Countries => {
            let countries = controller.load_countries().await;
            for country in &countries {
                println!("{}  {}", country.code, country.name);
            }
        }
        Commands::View { path } => {
            controller.navigate_path(&path).await;
        }
        Commands::Plans { filter } => {
            let filter = PlanFilter::parse(filter.as_deref().unwrap_or("all"));
            controller.filter_plans(filter);
        }
        Commands::Save {
            title,
            r#type,
            date,
            location,
            extra,
        } => {
            let draft = PlanDraft {
                id: None,
                title,
                date,
                plan_type: PlanType::parse(&r#type),
                location,
                extra,
            };
            if let Err(e) = controller.save_plan(draft) {
                println!("Failed to save plan: {}", e);
            }
        }
        Commands::Delete { id } => {
            if let Err(e) = controller.delete_plan(&id, PlanFilter::All) {
                println!("Failed to delete plan: {}", e);
            }
        }
        Commands::Clear => {
            if let Err(e) = controller.clear_plans() {
                println!("Failed to clear plans: {}", e);
            }
        }
        Commands::Convert { amount, from, to } => {
            controller.convert(amount, &from, &to).await;
        }
    }
}

async fn session(
    controller: &mut ViewController,
) -> Result<(), Box<dyn std::error::Error>> {
    let countries = controller.load_countries().await;
    if countries.is_empty() {
        return Err("no countries available, check your connection".into());
    }

    let labels: Vec<String> = countries
        .iter()
        .map(|c| format!("{} — {}", c.code, c.name))
        .collect();
    let picked = Select::new("Destination country:", labels.clone()).prompt()?;
    let index = labels.iter().position(|l| l == &picked).unwrap_or(0);
    let country_code = countries[index].code.clone();

    let cities = controller.country_changed(&country_code).await;
    let city = if cities.is_empty() {
        String::new()
    } else {
        Select::new("City:", cities).prompt()?
    };

    let default_year = (Utc::now().year() + 1).to_string();
    let year: i32 = Text::new("Year:")
        .with_default(&default_year)
        .prompt()?
        .trim()
        .parse()?;

    controller.search(&country_code, &city, year).await;

    loop {
        let mut options: Vec<String> = View::ALL.iter().map(|v| v.title().to_string()).collect();
        options.push("Save a plan".to_string());
        options.push("Convert currency".to_string());
        options.push("Quit".to_string());

        let choice = Select::new("Go to:", options).prompt()?;
        match choice.as_str() {
            "Quit" => break,
            "Save a plan" => {
                let title = Text::new("Title:").prompt()?;
                let kind = Select::new(
                    "Type:",
                    vec![
                        "holiday".to_string(),
                        "event".to_string(),
                        "longweekend".to_string(),
                    ],
                )
                .prompt()?;
                let date = Text::new("Date (optional):").prompt()?;
                let draft = PlanDraft {
                    id: None,
                    title,
                    date: (!date.is_empty()).then_some(date),
                    plan_type: PlanType::parse(&kind),
                    location: None,
                    extra: None,
                };
                if let Err(e) = controller.save_plan(draft) {
                    println!("Failed to save plan: {}", e);
                }
            }
            "Convert currency" => {
                let amount: f64 = Text::new("Amount:").prompt()?.trim().parse()?;
                let default_from = controller
                    .selection()
                    .and_then(|s| s.country.as_ref())
                    .and_then(|c| c.primary_currency())
                    .unwrap_or("USD")
                    .to_string();
                let from = Text::new("From currency:")
                    .with_default(&default_from)
                    .prompt()?;
                let to = Text::new("To currency:").with_default("EUR").prompt()?;
                controller.convert(amount, &from, &to).await;
            }
            title => {
                if let Some(view) = View::ALL.iter().find(|v| v.title() == title) {
                    controller.enter_view(*view).await;
                }
            }
        }
    }
    Ok(())
}
