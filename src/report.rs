//! Console output formatting.
//!
//! This module is separate from the sync logic to allow propsync to be used
//! as a library without printing side effects.

use colored::Colorize;

use crate::sync::FileOutcome;

/// Print the warnings and status line for one synchronized file.
///
/// One warning per missing key, in master order, then either
/// `Updating <path>` or `No changes needed for <path>`.
pub fn print_file_outcome(outcome: &FileOutcome) {
    for key in &outcome.missing_keys {
        println!(
            "{}: missing translation for '{}' in {}",
            "warning".bold().yellow(),
            key,
            outcome.path.display()
        );
    }

    if outcome.updated {
        println!("Updating {}", outcome.path.display());
    } else {
        println!("No changes needed for {}", outcome.path.display());
    }
}

pub fn print_done() {
    println!("Synchronization complete.");
}
