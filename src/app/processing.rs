//! Trail map ingestion: line parsing and mountain construction.
//!
//! Each non-blank line of the input describes one waypoint. The first
//! whitespace-delimited token is the label; the remainder of the line is
//! scanned for the literal tag substrings in left-to-right order. The
//! first obstacle tag encountered switches the line into obstacle mode,
//! after which every further match is recorded as an obstacle regardless
//! of its own identity. Matches before that point are supplies.

use super::error::AppError;
use super::verbose_println; // Macros for conditional logging.
use crate::trail::{is_obstacle_tag, Waypoint, AXE, FALLEN_TREE, FOOD, RAFT, RIVER};
use crate::tree::OrderedTree;
use std::fs;
use std::path::Path;

/// The tag vocabulary recognized on a waypoint line, in the order the
/// alternatives are tried when two could start at the same position.
const TAG_PATTERNS: [&str; 5] = [FOOD, RAFT, AXE, FALLEN_TREE, RIVER];

/// Loads waypoint records from a trail map file.
///
/// Blank lines are skipped; every other line yields one waypoint.
///
/// # Arguments
/// * `trail_file_path` - Path to the trail map file.
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Errors
/// Returns `AppError::Io` if the file cannot be read.
pub fn load_waypoints_from_file(
    trail_file_path: &Path,
    quiet_mode: bool,
) -> Result<Vec<Waypoint>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Reading trail map...");
    let contents = fs::read_to_string(trail_file_path)?;

    let waypoints: Vec<Waypoint> = contents.lines().filter_map(parse_waypoint).collect();

    if waypoints.is_empty() {
        verbose_println!(quiet_mode, "   => No waypoints found.");
    } else {
        verbose_println!(quiet_mode, "   => Parsed {} waypoint(s).", waypoints.len());
    }
    Ok(waypoints)
}

/// Parses one trail map line into a waypoint.
///
/// Returns `None` for blank lines. Tags are scanned as literal substrings,
/// so they match inside larger words as well: `seafood` carries a `food`
/// unit. That is the input contract, not an accident of the scanner.
pub fn parse_waypoint(line: &str) -> Option<Waypoint> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (label, details) = match trimmed.split_once(char::is_whitespace) {
        Some((label, details)) => (label, details),
        None => (trimmed, ""),
    };

    let mut waypoint = Waypoint::new(label);
    let mut obstacle_mode = false;
    for tag in scan_tags(details) {
        if is_obstacle_tag(tag) {
            obstacle_mode = true;
        }
        if obstacle_mode {
            waypoint.add_obstacle(tag);
        } else {
            waypoint.add_supply(tag);
        }
    }
    Some(waypoint)
}

/// Scans `details` for non-overlapping tag occurrences, earliest first.
/// The cursor advances past each match, so a matched region is never
/// reused by a later tag.
fn scan_tags(details: &str) -> Vec<&'static str> {
    let mut tags = Vec::new();
    let mut cursor = 0;
    while cursor < details.len() {
        let mut earliest: Option<(usize, &'static str)> = None;
        for pattern in TAG_PATTERNS {
            if let Some(offset) = details[cursor..].find(pattern) {
                let position = cursor + offset;
                if earliest.map_or(true, |(best, _)| position < best) {
                    earliest = Some((position, pattern));
                }
            }
        }
        let Some((position, pattern)) = earliest else {
            break;
        };
        tags.push(pattern);
        cursor = position + pattern.len();
    }
    tags
}

/// Builds the mountain by inserting waypoints in file order. A waypoint
/// whose label is already present is a no-op insert and is logged.
pub fn build_mountain(waypoints: Vec<Waypoint>, quiet_mode: bool) -> OrderedTree<Waypoint> {
    let mut mountain = OrderedTree::new();
    for waypoint in waypoints {
        let label = waypoint.label().to_owned();
        if !mountain.insert(waypoint) {
            verbose_println!(quiet_mode, "   [WARN] Duplicate waypoint '{}' ignored.", label);
        }
    }
    mountain
}
