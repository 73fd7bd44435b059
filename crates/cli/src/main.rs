//! FridgeMate CLI - drive the FridgeMate API from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the session persists across invocations)
//! fm-cli login -e kim@example.com -p secret
//!
//! # Browse the signed-in user's refrigerator
//! fm-cli fridge list
//!
//! # Put a food in, 2 pieces expiring June 1st
//! fm-cli fridge add --food-id 5 --quantity 2 --unit 개 --exp-date 2024-06-01
//!
//! # Look for something to cook
//! fm-cli recipes search 김치찌개
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - Session management
//! - `users` - User management
//! - `foods` - Food catalog management
//! - `fridge` - The signed-in user's refrigerator
//! - `recipes` - Recipe browsing and search

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "fm-cli")]
#[command(author, version, about = "FridgeMate CLI")]
struct Cli {
    /// Answer yes to every confirmation prompt
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session (does not contact the server)
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage the food catalog
    Foods {
        #[command(subcommand)]
        action: FoodAction,
    },
    /// Manage the signed-in user's refrigerator
    Fridge {
        #[command(subcommand)]
        action: FridgeAction,
    },
    /// Browse recipes
    Recipes {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,
    /// Create a user
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Phone number (optional)
        #[arg(long)]
        phone: Option<String>,
    },
    /// Update a user (email is immutable)
    Update {
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// New password; omitted leaves it unchanged
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Delete a user
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum FoodAction {
    /// List foods, optionally narrowed to one type
    List {
        /// Type filter, e.g. 반찬
        #[arg(short = 't', long = "type")]
        food_type: Option<String>,
    },
    /// Create a food
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short = 't', long = "type")]
        food_type: Option<String>,

        /// Path of an image file to upload and attach
        #[arg(short, long)]
        image: Option<std::path::PathBuf>,
    },
    /// Update a food
    Update {
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short = 't', long = "type")]
        food_type: Option<String>,

        #[arg(short, long)]
        image: Option<std::path::PathBuf>,
    },
    /// Delete a food
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum FridgeAction {
    /// List the refrigerator's contents with expiry countdowns
    List {
        /// Type tab, e.g. 반찬; omitted shows everything
        #[arg(short = 't', long = "type")]
        food_type: Option<String>,
    },
    /// Put a food into the refrigerator
    Add {
        #[arg(long)]
        food_id: i64,

        /// Positive amount, e.g. 2 or 1.5
        #[arg(short, long)]
        quantity: String,

        /// One of 개, g, kg, ml, L, 봉, 팩, 병
        #[arg(short, long)]
        unit: String,

        /// Expiration date, e.g. 2024-06-01
        #[arg(short, long)]
        exp_date: String,
    },
    /// Update an entry's quantity, unit or expiration date
    Update {
        id: i64,

        #[arg(short, long)]
        quantity: Option<String>,

        #[arg(short, long)]
        unit: Option<String>,

        #[arg(short, long)]
        exp_date: Option<String>,
    },
    /// Take an entry out of the refrigerator
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum RecipeAction {
    /// List one page of recipes
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one recipe with its instruction steps
    Show { seq: i64 },
    /// Search recipes by name
    Search { name: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let yes = cli.yes;
    match cli.command {
        Commands::Login { email, password } => commands::session::login(&email, &password).await?,
        Commands::Logout => commands::session::logout()?,
        Commands::Whoami => commands::session::whoami()?,
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list().await?,
            UserAction::Create {
                name,
                email,
                password,
                phone,
            } => commands::users::create(&name, &email, &password, phone.as_deref()).await?,
            UserAction::Update {
                id,
                name,
                phone,
                password,
            } => {
                commands::users::update(id, name.as_deref(), phone.as_deref(), password.as_deref())
                    .await?;
            }
            UserAction::Delete { id } => commands::users::delete(id, yes).await?,
        },
        Commands::Foods { action } => match action {
            FoodAction::List { food_type } => commands::foods::list(food_type.as_deref()).await?,
            FoodAction::Create {
                name,
                food_type,
                image,
            } => commands::foods::create(&name, food_type.as_deref(), image.as_deref()).await?,
            FoodAction::Update {
                id,
                name,
                food_type,
                image,
            } => {
                commands::foods::update(id, name.as_deref(), food_type.as_deref(), image.as_deref())
                    .await?;
            }
            FoodAction::Delete { id } => commands::foods::delete(id, yes).await?,
        },
        Commands::Fridge { action } => match action {
            FridgeAction::List { food_type } => {
                commands::fridge::list(food_type.as_deref()).await?;
            }
            FridgeAction::Add {
                food_id,
                quantity,
                unit,
                exp_date,
            } => commands::fridge::add(food_id, &quantity, &unit, &exp_date).await?,
            FridgeAction::Update {
                id,
                quantity,
                unit,
                exp_date,
            } => {
                commands::fridge::update(
                    id,
                    quantity.as_deref(),
                    unit.as_deref(),
                    exp_date.as_deref(),
                )
                .await?;
            }
            FridgeAction::Remove { id } => commands::fridge::remove(id, yes).await?,
        },
        Commands::Recipes { action } => match action {
            RecipeAction::List { page } => commands::recipes::list(page).await?,
            RecipeAction::Show { seq } => commands::recipes::show(seq).await?,
            RecipeAction::Search { name } => commands::recipes::search(&name).await?,
        },
    }
    Ok(())
}
