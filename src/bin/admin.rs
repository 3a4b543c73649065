//! CLI administration tool for pitchboard.
//!
//! Provides commands for inspecting and moderating pitches and performing
//! database checks without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # List every pitch, or the pitches of one author
//! cargo run --bin admin -- pitch list
//! cargo run --bin admin -- pitch list --author ada
//!
//! # Show a single pitch
//! cargo run --bin admin -- pitch show 42
//!
//! # Delete a pitch (asks for confirmation unless --yes)
//! cargo run --bin admin -- pitch delete 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use pitchboard::application::services::PitchService;
use pitchboard::domain::entities::Pitch;
use pitchboard::infrastructure::persistence::PgPitchRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing pitchboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and moderate pitches
    Pitch {
        #[command(subcommand)]
        action: PitchAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Pitch subcommands.
#[derive(Subcommand)]
enum PitchAction {
    /// List pitches, newest first
    List {
        /// Only pitches of this author
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Show one pitch
    Show {
        id: i64,
    },

    /// Delete a pitch
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
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
        Commands::Pitch { action } => handle_pitch_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches pitch commands.
async fn handle_pitch_action(action: PitchAction, pool: &PgPool) -> Result<()> {
    let service = PitchService::new(Arc::new(PgPitchRepository::new(Arc::new(pool.clone()))));

    match action {
        PitchAction::List { author } => list_pitches(&service, author).await?,
        PitchAction::Show { id } => show_pitch(&service, id).await?,
        PitchAction::Delete { id, yes } => delete_pitch(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists pitches in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Pitches
///
///   ID    Title                          Author           Views   Created
///   ──────────────────────────────────────────────────────────────────────────
///   12    Solar Kiosk                    ada              41      2025-06-01 10:30
/// ```
async fn list_pitches(service: &PitchService, author: Option<String>) -> Result<()> {
    println!("{}", "📋 Pitches".bright_blue().bold());
    println!();

    let pitches = match &author {
        Some(author) => service.list_by_author(author).await,
        None => service.search(None).await,
    }
    .map_err(|e| anyhow::anyhow!("Failed to list pitches: {}", e))?;

    if pitches.is_empty() {
        println!("{}", "  No posts yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<16} {:<7} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold(),
        "Views".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for pitch in &pitches {
        println!(
            "  {:<5} {:<30} {:<16} {:<7} {}",
            pitch.id.to_string().bright_black(),
            truncate(&pitch.title, 30).cyan(),
            pitch.author_id,
            pitch.views,
            pitch
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        pitches.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_pitch(service: &PitchService, id: i64) -> Result<()> {
    let pitch = service
        .get_pitch(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_pitch(&pitch);
    println!();
    println!("{}", pitch.pitch);
    println!();

    Ok(())
}

/// Deletes a pitch after confirmation (default: No).
async fn delete_pitch(service: &PitchService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Pitch".bright_blue().bold());
    println!();

    let pitch = service
        .get_pitch(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_pitch(&pitch);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this pitch?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete pitch: {}", e))?;

    println!("{}", "✅ Pitch deleted".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of pitches
/// - Number of distinct authors
/// - Total views
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (pitches, authors, views): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(DISTINCT author_id), COALESCE(SUM(views), 0)::BIGINT FROM pitches",
    )
    .fetch_one(pool)
    .await?;

    println!("  Pitches: {}", pitches.to_string().bright_green().bold());
    println!("  Authors: {}", authors.to_string().bright_green().bold());
    println!("  Views:   {}", views.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}

fn print_pitch(pitch: &Pitch) {
    println!("  ID:       {}", pitch.id.to_string().bright_black());
    println!("  Title:    {}", pitch.title.cyan());
    println!("  Author:   {}", pitch.author_id);
    println!("  Category: {}", pitch.category);
    println!("  Views:    {}", pitch.views);
    println!(
        "  Created:  {}",
        pitch.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
