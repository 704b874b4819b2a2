// Allow dead code: demo library exposes helpers that may not all be used in every binary
#![allow(dead_code)]

//! QSVT Demo Suite
//!
//! Demonstrations of the quantum singular value transformation engine:
//!
//! - **Scalar & matrix pipeline**: solve phase angles, block-encode,
//!   compose, and verify against classical spectral evaluation
//! - **Linear system**: polynomial approximation of `A⁻¹b` compared
//!   against the exact LU solution by cosine similarity
//! - **Matrix functions**: powers and roots of Hermitian matrices via
//!   spectral application and Chebyshev fitting

pub mod linear_system;
pub mod matrix_functions;

use console::style;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for demo binaries; `RUST_LOG` controls the filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a failure message.
pub fn print_failure(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
