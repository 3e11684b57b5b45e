//! `architecture-lint [BACKEND_DIR]`
//!
//! Checks the backend's layer boundaries and exits non-zero on any finding.
//! Without an argument the backend next to this tool in the workspace is
//! checked.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let backend_dir = std::env::args_os()
        .nth(1)
        .map_or_else(workspace_backend, PathBuf::from);

    match architecture_lint::check_backend(&backend_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Nothing useful to do if stderr is gone.
            let _ = writeln!(io::stderr().lock(), "{error}");
            ExitCode::FAILURE
        }
    }
}

fn workspace_backend() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../backend")
}
