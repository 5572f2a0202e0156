mod client;
mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use remindir_core::config::RemindirConfig;

use commands::Session;
use commands::new::CompanyCodes;

#[derive(Parser)]
#[command(name = "remindir")]
#[command(about = "Track your personal and company reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in by storing your user id in the config
    Login { user_id: String },
    /// Forget the signed-in user
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Summary cards and reminders in backend order
    Dashboard {
        /// Show company reminders instead of personal ones
        #[arg(long)]
        company: bool,
    },
    /// Reminders sorted by due date
    List {
        /// Show company reminders instead of personal ones
        #[arg(long)]
        company: bool,
    },
    /// Search your reminders
    Search { query: String },
    New {
        title: Option<String>,

        /// Due date (YYYY-MM-DD or MM/DD/YYYY)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short = 'm', long)]
        description: Option<String>,

        /// Create a company reminder
        #[arg(long)]
        company: bool,

        /// Target company (defaults to your own)
        #[arg(long, requires = "company")]
        company_code: Option<String>,

        #[arg(long, requires = "company")]
        create_code: Option<String>,
    },
    /// Flip the completion state of a reminder
    Toggle { id: String },
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Agenda of personal and company reminders for a month
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Show your company, or switch to another one
    Company {
        #[command(subcommand)]
        action: Option<CompanyAction>,
    },
}

#[derive(Subcommand)]
enum CompanyAction {
    /// Join a different company (prompts for its password)
    Switch { company_id: String },
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = RemindirConfig::load()?;

    match cli.command {
        Commands::Login { user_id } => commands::auth::login(config, &user_id),
        Commands::Logout => commands::auth::logout(config),
        Commands::Whoami => commands::auth::whoami(&config),
        Commands::Dashboard { company } => {
            let session = Session::new(&config)?;
            commands::dashboard::run(&session, company).await
        }
        Commands::List { company } => {
            let session = Session::new(&config)?;
            commands::list::run(&session, company).await
        }
        Commands::Search { query } => {
            let session = Session::new(&config)?;
            commands::search::run(&session, &query).await
        }
        Commands::New {
            title,
            date,
            description,
            company,
            company_code,
            create_code,
        } => {
            let session = Session::new(&config)?;
            let codes = company.then_some(CompanyCodes {
                company_code,
                create_code,
            });
            commands::new::run(&session, title, date, description, codes).await
        }
        Commands::Toggle { id } => {
            let session = Session::new(&config)?;
            commands::toggle::run(&session, &id).await
        }
        Commands::Delete { id, force } => {
            let session = Session::new(&config)?;
            commands::delete::run(&session, &id, force).await
        }
        Commands::Calendar { month } => {
            let session = Session::new(&config)?;
            commands::calendar::run(&session, month).await
        }
        Commands::Company { action } => {
            let session = Session::new(&config)?;
            match action {
                None => commands::company::show(&session).await,
                Some(CompanyAction::Switch { company_id }) => {
                    commands::company::switch(&session, &company_id).await
                }
            }
        }
    }
}
