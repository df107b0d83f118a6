//! Packaging companion: wraps the main binary into a standalone windowed
//! bundle with `cargo bundle`. Takes no flags; input and output names are
//! fixed. Build tooling only, the application itself never calls this.

use std::path::Path;
use std::process::{exit, Command};

use anyhow::{bail, Context, Result};

const MAIN_SOURCE: &str = "src/main.rs";
const APP_BIN: &str = "code-counter";

fn bundler_available() -> bool {
    Command::new("cargo")
        .args(["bundle", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn install_bundler() -> Result<()> {
    println!("cargo-bundle is not installed. Installing...");
    let status = Command::new("cargo")
        .args(["install", "cargo-bundle"])
        .status()
        .context("Failed to run `cargo install cargo-bundle`")?;
    if !status.success() {
        bail!("`cargo install cargo-bundle` exited with {}", status);
    }
    Ok(())
}

fn create_bundle() -> Result<()> {
    println!("Building a standalone bundle from {}...", MAIN_SOURCE);

    if !bundler_available() {
        install_bundler()?;
    }

    let status = Command::new("cargo")
        .args(["bundle", "--release", "--bin", APP_BIN])
        .status()
        .context("Failed to run `cargo bundle`")?;
    if !status.success() {
        bail!("`cargo bundle` exited with {}", status);
    }

    println!("Bundle created successfully!");
    println!("You can find {} under target/release/bundle", APP_BIN);
    Ok(())
}

fn main() {
    if !Path::new(MAIN_SOURCE).exists() {
        eprintln!("Error: {} not found.", MAIN_SOURCE);
        exit(1);
    }

    if let Err(e) = create_bundle() {
        eprintln!("Packaging failed: {:#}", e);
        exit(1);
    }
}
