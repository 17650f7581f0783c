// --- File: crates/services/beautybook_app/src/main.rs ---
mod app_state;
mod commands;
mod error;

use app_state::AppState;
use beautybook_common::{config_error, logging};
use beautybook_common::models::{parse_hhmm, UserRole};
use beautybook_config::load_config;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "beautybook", version, about = "BeautyBook Mini App from the terminal")]
struct Cli {
    /// Raw Telegram WebApp init data (`user=...&auth_date=...&hash=...`)
    #[arg(long, env = "BEAUTYBOOK_INIT_DATA", global = true)]
    init_data: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List my appointments
    Bookings,
    /// Ask the backend for free start times of a master
    Slots {
        #[arg(long)]
        master_id: i64,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Book a catalog service
    Book {
        #[arg(long)]
        master_id: i64,
        #[arg(long)]
        service_id: i64,
        /// Defaults to the first open day from today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel one of my appointments
    Cancel { booking_id: i64 },
    /// Show notifications
    Notifications {
        /// Keep polling until interrupted
        #[arg(long)]
        watch: bool,
    },
    /// Mark a notification read
    Read { notification_id: i64 },
    /// Mark every notification read
    ReadAll,
    /// Show my profile
    Profile,
    /// Edit my profile
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Show the client or master dashboard
    Dashboard {
        #[arg(long, value_enum, default_value_t = Role::Client)]
        role: Role,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Client,
    Master,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Client => UserRole::Client,
            Role::Master => UserRole::Master,
        }
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    parse_hhmm(raw).map_err(|e| format!("expected HH:MM: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config().map_err(config_error) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_from_str(&config.logging.level);

    let state = match AppState::new(config, cli.init_data.as_deref()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Bookings => commands::bookings(&state).await,
        Command::Slots { master_id, date } => commands::slots(&state, master_id, date).await,
        Command::Book {
            master_id,
            service_id,
            date,
            time,
            notes,
        } => commands::book(&state, master_id, service_id, date, time, notes).await,
        Command::Cancel { booking_id } => commands::cancel(&state, booking_id).await,
        Command::Notifications { watch } => commands::notifications(&state, watch).await,
        Command::Read { notification_id } => commands::read(&state, notification_id).await,
        Command::ReadAll => commands::read_all(&state).await,
        Command::Profile => commands::profile(&state).await,
        Command::UpdateProfile {
            first_name,
            last_name,
            phone,
        } => commands::update_profile(&state, first_name, last_name, phone).await,
        Command::Dashboard { role } => commands::dashboard(&state, role.into()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
