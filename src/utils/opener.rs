//! Open a file with the platform's default viewer.

use crate::errors::AppResult;
use std::path::Path;
use std::process::Command;

fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}

/// Spawn the viewer without waiting for it.
pub fn open_file(path: &Path) -> AppResult<()> {
    let (program, args) = opener_command();
    Command::new(program).args(args).arg(path).spawn()?;
    Ok(())
}
