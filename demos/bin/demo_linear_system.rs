//! Linear-system direction demo.
//!
//! Applies an odd Chebyshev polynomial to a mixed-basis Hermitian
//! operator and compares the direction of `P(A)b` with the exact `A⁻¹b`.

use clap::Parser;
use nalgebra::DVector;
use num_complex::Complex64;

use qsvt_demos::linear_system::LinearSystemDemo;
use qsvt_demos::matrix_functions::rotation_mixed;
use qsvt_demos::{init_tracing, print_failure, print_header, print_result, print_section, print_success};
use qsvt_poly::PolynomialSpec;

#[derive(Parser, Debug)]
#[command(name = "demo-linear-system")]
#[command(about = "Compare P(A)b against the exact solution of Ax = b")]
struct Args {
    /// Mixing angle for the operator basis
    #[arg(short, long, default_value = "0.6")]
    theta: f64,

    /// Degree of the odd Chebyshev polynomial standing in for 1/x
    #[arg(short, long, default_value = "3")]
    degree: usize,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    print_header("Linear System Demo — direction of P(A)b");

    if args.degree % 2 == 0 {
        eprintln!("Error: inversion polynomials must be odd, got degree {}", args.degree);
        std::process::exit(1);
    }

    // Eigenvalues ±0.5: the spectrum is symmetric, so every odd
    // polynomial sends b to a multiple of A·b, parallel to A⁻¹b.
    let a = rotation_mixed(args.theta, &[0.5, -0.5]);
    let b = DVector::from_element(2, Complex64::new(1.0, 0.0));
    let poly = PolynomialSpec::chebyshev(args.degree);

    print_section("Problem Setup");
    print_result("Mixing angle θ", args.theta);
    print_result("Eigenvalues", "+0.5, -0.5");
    print_result("Polynomial", format!("T_{}", args.degree));

    let report = match LinearSystemDemo::new(a, b, poly).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    print_section("Results");
    print_result("Cosine similarity", format!("{:.9}", report.cosine_similarity));
    print_result("Threshold", report.threshold);
    print_result("‖P(A)b‖", format!("{:.6}", report.approx_norm));
    print_result("‖A⁻¹b‖", format!("{:.6}", report.exact_norm));

    if args.json {
        print_section("Report (JSON)");
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing report: {e}"),
        }
    }

    println!();
    if report.passed {
        print_success("Directions agree — linear-system demo complete!");
    } else {
        print_failure("Directions disagree beyond the threshold");
        std::process::exit(1);
    }
}
