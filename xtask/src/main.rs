//! Equality workspace tasks
//!
//! Usage:
//!   cargo xtask test            - Run all tests
//!   cargo xtask test --core     - Run eq-core tests only
//!   cargo xtask bench           - Run criterion benchmarks
//!   cargo xtask compete         - Check strategy ratios (release build)
//!   cargo xtask docs            - Generate documentation
//!   cargo xtask check           - Clippy + format check

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Equality workspace tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all tests
    Test {
        /// Run only eq-core tests
        #[arg(long)]
        core: bool,
    },
    /// Run criterion benchmarks
    Bench {
        /// Only this bench target (e.g. `word_equality`)
        #[arg(long)]
        only: Option<String>,
    },
    /// Run the ratio competition in release mode
    Compete {
        /// Restrict to `bytes` or `words`
        #[arg(short, long)]
        width: Option<String>,

        /// Widen every band by this factor
        #[arg(long)]
        relaxed: Option<f64>,
    },
    /// Generate documentation
    Docs {
        /// Open in browser
        #[arg(short, long)]
        open: bool,
    },
    /// Check code quality
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let project_root = project_root()?;

    match cli.command {
        Commands::Test { core } => run_tests(&project_root, core),
        Commands::Bench { only } => run_benchmarks(&project_root, only.as_deref()),
        Commands::Compete { width, relaxed } => run_competition(&project_root, width, relaxed),
        Commands::Docs { open } => generate_docs(&project_root, open),
        Commands::Check => check_quality(&project_root),
    }
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .context("CARGO_MANIFEST_DIR not set")?;

    Ok(Path::new(&manifest_dir)
        .parent()
        .context("Failed to get parent directory")?
        .to_path_buf())
}

/// Run `cargo <args>` in `root`; `what` names the step in errors
fn cargo(root: &Path, args: &[&str], what: &str) -> Result<bool> {
    let status = Command::new("cargo")
        .current_dir(root)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {what}"))?;
    Ok(status.success())
}

fn run_tests(root: &Path, core_only: bool) -> Result<()> {
    println!("🧪 Running tests...\n");

    let mut args = vec!["test"];
    if core_only {
        args.extend(["--package", "eq-core"]);
    } else {
        args.push("--workspace");
    }

    if !cargo(root, &args, "tests")? {
        bail!("Tests failed");
    }

    println!("\n✅ All tests passed!");
    Ok(())
}

fn run_benchmarks(root: &Path, only: Option<&str>) -> Result<()> {
    println!("⏱️  Running benchmarks...\n");

    let mut args = vec!["bench", "--package", "eq-bench"];
    if let Some(name) = only {
        args.extend(["--bench", name]);
    }

    if !cargo(root, &args, "benchmarks")? {
        bail!("Benchmarks failed");
    }

    Ok(())
}

fn run_competition(root: &Path, width: Option<String>, relaxed: Option<f64>) -> Result<()> {
    println!("🏁 Running equality competition...\n");

    let factor = relaxed.map(|f| f.to_string());
    let mut args = vec!["run", "--release", "--package", "eq-bench", "--bin", "eq-compete", "--"];
    if let Some(ref w) = width {
        args.extend(["--width", w.as_str()]);
    }
    if let Some(ref f) = factor {
        args.extend(["--relaxed", f.as_str()]);
    }

    if !cargo(root, &args, "competition")? {
        bail!("Competition limits violated");
    }

    println!("\n✅ All competitors within their bands!");
    Ok(())
}

fn generate_docs(root: &Path, open: bool) -> Result<()> {
    println!("📚 Generating documentation...\n");

    let mut args = vec!["doc", "--workspace", "--no-deps"];
    if open {
        args.push("--open");
    }

    if !cargo(root, &args, "rustdoc")? {
        bail!("Documentation generation failed");
    }

    println!("\n✅ Documentation generated!");
    Ok(())
}

fn check_quality(root: &Path) -> Result<()> {
    println!("🔍 Checking code quality...\n");

    println!("Running clippy...");
    if !cargo(root, &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"], "clippy")? {
        bail!("Clippy found issues");
    }

    println!("\nChecking formatting...");
    if !cargo(root, &["fmt", "--all", "--check"], "rustfmt")? {
        println!("⚠️  Formatting issues found. Run 'cargo fmt' to fix.");
    }

    println!("\n✅ Code quality check complete!");
    Ok(())
}
