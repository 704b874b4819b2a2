//! Matrix powers and roots demo.

use clap::Parser;

use qsvt_demos::matrix_functions::{matrix_sqrt, power_deviation, rotation_mixed};
use qsvt_demos::{init_tracing, print_header, print_result, print_section, print_success};

#[derive(Parser, Debug)]
#[command(name = "demo-matrix-functions")]
#[command(about = "Matrix powers and square roots via spectral application")]
struct Args {
    /// Mixing angle for the operator basis
    #[arg(short, long, default_value = "0.5")]
    theta: f64,

    /// Integer power to evaluate
    #[arg(short, long, default_value = "3")]
    power: u32,

    /// Degree of the Chebyshev fit for √x
    #[arg(long, default_value = "24")]
    sqrt_degree: usize,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    print_header("Matrix Functions Demo — powers and roots");

    let eigenvalues = [0.81, 0.25];
    let a = rotation_mixed(args.theta, &eigenvalues);

    print_section("Test Operator");
    print_result("Mixing angle θ", args.theta);
    print_result("Eigenvalues", format!("{eigenvalues:?}"));

    print_section("Integer Power");
    match power_deviation(&a, args.power) {
        Ok(deviation) => {
            print_result("Power", format!("A^{}", args.power));
            print_result(
                "Repeated-multiply vs spectral deviation",
                format!("{deviation:.3e}"),
            );
        }
        Err(e) => {
            eprintln!("Error computing power: {e}");
            std::process::exit(1);
        }
    }

    print_section("Square Root");
    // Fit √x on [lo, 1] with lo safely below the smallest eigenvalue.
    let lo = 0.04;
    match matrix_sqrt(&a, lo, args.sqrt_degree) {
        Ok(root) => {
            let squared = &root * &root;
            let deviation = (squared - &a).iter().map(|e| e.norm()).fold(0.0, f64::max);
            print_result("Fit interval", format!("[{lo}, 1]"));
            print_result("Fit degree", args.sqrt_degree);
            print_result("‖(√A)² − A‖ (max entry)", format!("{deviation:.3e}"));
        }
        Err(e) => {
            eprintln!("Error computing square root: {e}");
            std::process::exit(1);
        }
    }

    println!();
    print_success("Matrix functions demo complete!");
}
