//! PIECELINE - a piece inventory manager
//!
//! A supply queue up front, a reserve stack on the side, and the swaps that
//! move pieces between them.

mod error;
mod exchange;
mod generator;
mod piece;
mod queue;
mod reserve;
mod settings;
mod shell;

use generator::PieceGenerator;
use settings::Settings;
use shell::Shell;
use std::io;

/// Get the pieceline temp directory, creating it if needed
fn pieceline_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("pieceline");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // Setup pieceline temp directory for logs
    let log_dir = pieceline_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file; stdout stays clean for the menu
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pieceline=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "pieceline starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    // Load settings
    let settings = Settings::load().validated();
    tracing::debug!(?settings, "settings in effect");

    // Run the interactive shell and capture result
    let mut shell = Shell::new(&settings, PieceGenerator::new());
    let result = shell.run();

    // Save settings (materializes the defaults on first run)
    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    // Print final message
    match &result {
        Ok(stats) => {
            println!("\n🦀 Thanks for managing the pieces! 🦀");
            println!(
                "Played: {} | Sent to reserve: {}",
                stats.played, stats.reserved
            );
            tracing::info!(played = stats.played, reserved = stats.reserved, "shutting down");
        }
        Err(_) => {}
    }

    result.map(|_| ())
}
