//! Build script for the trueshuffle daemon.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory so that a fresh install has a documented starting point next to
//! the place where the daemon looks for its `.env` file and account
//! credentials.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the local data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/trueshuffle/.env.example`
/// - macOS: `~/Library/Application Support/trueshuffle/.env.example`
/// - Windows: `%LOCALAPPDATA%/trueshuffle/.env.example`
///
/// The `credentials/` directory is created alongside it; each account lives in
/// its own sub-directory there.
///
/// A missing template only produces a cargo warning.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("trueshuffle");
    fs::create_dir_all(out_dir.join("credentials"))?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
