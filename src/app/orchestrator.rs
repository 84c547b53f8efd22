//! Main application orchestrator.
//!
//! Coordinates the entire descent search:
//! 1. Initializes logging.
//! 2. Validates the trail map path.
//! 3. Loads waypoint records from the file.
//! 4. Builds the mountain tree, skipping duplicate labels.
//! 5. Runs the path exploration over the tree.
//! 6. Prints the accepted descents to stdout, one per line.
//!
//! Stdout carries only the accepted descents; all progress reporting goes
//! to the verbose log file (`trail-pathfinder.log`) unless `--quiet`
//! disables it.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::trail::PathExplorer;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the trail map is missing or unreadable. A trail
/// map with no survivable descent is not an error; the program simply
/// prints nothing.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let trail_file_path = &cli.trail_file;
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("trail-pathfinder.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (trail-pathfinder.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to trail-pathfinder.log");
            if let Err(e) = logger::flush_global_logger() {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to flush trail-pathfinder.log after initialization: {}",
                    e
                );
            }
        }
    }

    // Validate the trail map path. This is an early check.
    file_handler::validate_trail_file(trail_file_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(
        quiet_mode,
        "Processing File: {}",
        trail_file_path.display()
    );
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let waypoints = processing::load_waypoints_from_file(trail_file_path, quiet_mode)?;

    verbose_println!(quiet_mode, "\n[STEP 2] Building the mountain...");
    let mountain = processing::build_mountain(waypoints, quiet_mode);
    verbose_println!(
        quiet_mode,
        "   => {} waypoint(s), height {}.",
        mountain.size(),
        mountain.height()
    );
    if !mountain.is_empty() {
        let lowest = mountain.first()?;
        let highest = mountain.last()?;
        verbose_println!(
            quiet_mode,
            "   => Label range: {} .. {}.",
            lowest.label(),
            highest.label()
        );
    }

    verbose_println!(quiet_mode, "\n[STEP 3] Exploring descents...");
    let descents = PathExplorer::explore(&mountain);
    verbose_println!(
        quiet_mode,
        "   => {} survivable descent(s).",
        descents.len()
    );

    for descent in &descents {
        println!("{}", descent.join(" "));
    }

    // Final flush of the run log before exiting successfully.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of trail-pathfinder.log: {}",
                e
            );
        }
    }

    Ok(())
}
