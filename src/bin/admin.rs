//! CLI administration tool for the travel agency service.
//!
//! Inspects trips and clients and manages registrations directly against the
//! database, going through the same services as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Overall counts
//! cargo run --bin admin -- stats
//!
//! # Trip catalogue with availability
//! cargo run --bin admin -- trips
//!
//! # A client and their registrations
//! cargo run --bin admin -- client 12
//!
//! # Register / deregister a client
//! cargo run --bin admin -- register 12 3
//! cargo run --bin admin -- deregister 12 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use travel_agency::AppState;
use travel_agency::error::AppError;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the travel agency database.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show record counts
    Stats,

    /// List trips with availability
    Trips,

    /// Show a client and their registrations
    Client {
        /// Client ID
        id: i32,
    },

    /// Register a client for a trip
    Register {
        /// Client ID
        client_id: i32,
        /// Trip ID
        trip_id: i32,
    },

    /// Remove a client's registration from a trip
    Deregister {
        /// Client ID
        client_id: i32,
        /// Trip ID
        trip_id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Trips => list_trips(&app_state(&pool)).await?,
        Commands::Client { id } => show_client(&app_state(&pool), id).await?,
        Commands::Register { client_id, trip_id } => {
            register(&app_state(&pool), client_id, trip_id).await?
        }
        Commands::Deregister {
            client_id,
            trip_id,
            yes,
        } => deregister(&app_state(&pool), client_id, trip_id, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn app_state(pool: &PgPool) -> AppState {
    AppState::from_pool(Arc::new(pool.clone()))
}

fn service_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}", e)
}

/// Displays record counts for clients, trips and registrations.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let clients_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Client")
        .fetch_one(pool)
        .await?;

    let trips_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Trip")
        .fetch_one(pool)
        .await?;

    let registrations_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Client_Trip")
        .fetch_one(pool)
        .await?;

    println!(
        "  Clients:       {}",
        clients_count.to_string().bright_green().bold()
    );
    println!(
        "  Trips:         {}",
        trips_count.to_string().bright_green().bold()
    );
    println!(
        "  Registrations: {}",
        registrations_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists trips in start-date order with their fill level.
///
/// # Output Format
///
/// ```text
///   ID  Name                           From         Booked   Left  Status
///   ──────────────────────────────────────────────────────────────────────
///   1   Alps Hiking                    2025-06-01   12/20    8     OPEN
/// ```
async fn list_trips(state: &AppState) -> Result<()> {
    println!("{}", "🧭 Trips".bright_blue().bold());
    println!();

    let trips = state
        .trip_service
        .list_trips()
        .await
        .map_err(service_error)?;

    if trips.is_empty() {
        println!("{}", "  No trips found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<12} {:<8} {:<5} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "From".bright_white().bold(),
        "Booked".bright_white().bold(),
        "Left".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for trip in &trips {
        // Trips are listed and counted separately; one may vanish in between.
        let Some(capacity) = state
            .trip_service
            .trip_capacity(trip.id)
            .await
            .map_err(service_error)?
        else {
            continue;
        };

        let status = if capacity.is_full() {
            "FULL".red()
        } else {
            "OPEN".green()
        };

        println!(
            "  {:<3} {:<30} {:<12} {:<8} {:<5} {}",
            trip.id.to_string().bright_black(),
            trip.name.cyan(),
            trip.date_from.format("%Y-%m-%d").to_string().bright_black(),
            format!("{}/{}", capacity.participants, capacity.max_people),
            capacity.remaining(),
            status
        );

        if !trip.countries.is_empty() {
            let countries: Vec<&str> = trip.countries.iter().map(|c| c.name.as_str()).collect();
            println!("      {}", countries.join(", ").bright_black());
        }
    }

    println!();
    println!("  Total: {}", trips.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows a client's details and registrations.
async fn show_client(state: &AppState, id: i32) -> Result<()> {
    let client = state
        .client_service
        .get_client(id)
        .await
        .map_err(service_error)?;

    println!("{}", "👤 Client".bright_blue().bold());
    println!();
    println!("  ID:        {}", client.id.to_string().bright_black());
    println!(
        "  Name:      {}",
        format!("{} {}", client.first_name, client.last_name).cyan()
    );
    println!("  Email:     {}", client.email);
    println!(
        "  Telephone: {}",
        client.telephone.as_deref().unwrap_or("-")
    );
    println!("  PESEL:     {}", client.pesel.as_deref().unwrap_or("-"));
    println!();

    let trips = state
        .client_service
        .get_client_trips(id)
        .await
        .map_err(service_error)?;

    if trips.is_empty() {
        println!("{}", "  No registered trips".yellow());
        println!();
        return Ok(());
    }

    println!("{}", "  Registrations:".bright_white().bold());
    for registration in &trips {
        let payment = match registration.payment_date {
            Some(date) => format!("paid {date}").green(),
            None => "unpaid".yellow(),
        };
        println!(
            "    {:<3} {:<30} registered {}  {}",
            registration.trip_id.to_string().bright_black(),
            registration.trip.name.cyan(),
            registration.registered_at,
            payment
        );
    }
    println!();

    Ok(())
}

/// Registers a client for a trip.
async fn register(state: &AppState, client_id: i32, trip_id: i32) -> Result<()> {
    let receipt = state
        .client_service
        .register_client_for_trip(client_id, trip_id)
        .await
        .map_err(service_error)?;

    if receipt.registered {
        println!(
            "{} (registered at {})",
            "✅ Client registered for the trip".green().bold(),
            receipt.registered_at
        );
    } else {
        println!("{}", "⚠️  Registration was not stored".yellow());
    }

    Ok(())
}

/// Removes a registration after confirmation (default: No).
async fn deregister(state: &AppState, client_id: i32, trip_id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Remove Registration".bright_blue().bold());
    println!();
    println!("  Client: {}", client_id.to_string().cyan());
    println!("  Trip:   {}", trip_id.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this registration?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .client_service
        .remove_client_from_trip(client_id, trip_id)
        .await
        .map_err(service_error)?;

    println!();
    println!("{}", "✅ Registration removed".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
