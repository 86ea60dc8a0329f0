use std::path::Path;

use anyhow::{Result, bail};

use super::args::Arguments;
use crate::{parser, report, sync};

/// Run one synchronization pass over every translation file.
///
/// All paths are checked up front so a missing file aborts the run before
/// anything is touched. The master is parsed once and shared; translation
/// files are then processed strictly in argument order, each outcome
/// reported as it completes. The first read or write failure propagates and
/// ends the run; files already rewritten stay rewritten.
pub fn run(args: Arguments) -> Result<()> {
    ensure_exists(&args.master, "Master")?;
    for path in &args.translations {
        ensure_exists(path, "Translation")?;
    }

    let master = parser::parse_file(&args.master)?;

    for path in &args.translations {
        let outcome = sync::sync_file(&master, path)?;
        report::print_file_outcome(&outcome);
    }

    report::print_done();
    Ok(())
}

fn ensure_exists(path: &Path, role: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{} file '{}' not found", role, path.display());
    }
    Ok(())
}
