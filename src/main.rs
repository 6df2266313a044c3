use std::process::ExitCode;

use numlab::differentiation::{compare_schemes, hessian, Scheme};
use numlab::optimization::{quadratic_fit, rmsprop, QuadraticFitCfg, RmsPropCfg};
use numlab::plotting::{export_csv, Series};
use numlab::root_finding::{locate_critical_point, SecantCfg};
use numlab::sampling::{arange, linspace};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("NUMLAB_LOG", "info"))
        .format_timestamp(None)
        .init();
}

type DemoResult = Result<(), Box<dyn std::error::Error>>;

/// Critical point of x³ − 2x − 2 via the secant method on 3x² − 2.
fn secant_demo() -> DemoResult {
    let g  = |x: f64| x.powi(3) - 2.0 * x - 2.0;
    let dg = |x: f64| 3.0 * x.powi(2) - 2.0;

    let cfg = SecantCfg::new();
    let cp  = locate_critical_point(g, dg, 1.0, 2.0, &cfg);

    println!(
        "Approximate root of the derivative: x = {} after {} iterations ({})",
        cp.location(), cp.outcome.iterations(), cp.outcome.termination()
    );
    println!("Computed minimum: {}", cp.value);

    let grid    = linspace(-1.0, 2.5, 400);
    let history = cp.outcome.history();
    let series  = [
        Series::sample("f'(x) = 3x^2 - 2", &grid, dg),
        Series::sample("f(x) = x^3 - 2x - 2", &grid, g),
        Series::sample("f' at iterates", history, dg),
        Series::sample("f at iterates", history, g),
    ];
    print!("{}", export_csv(&series)?);
    Ok(())
}

/// RMSProp on (x − 1)² + 2(y − 2)² from (5, 5).
fn rmsprop_demo() -> DemoResult {
    let objective = |p: &[f64; 2]| (p[0] - 1.0).powi(2) + 2.0 * (p[1] - 2.0).powi(2);
    let gradient  = |p: &[f64; 2]| [2.0 * (p[0] - 1.0), 4.0 * (p[1] - 2.0)];

    let cfg    = RmsPropCfg::new();
    let report = rmsprop(objective, gradient, [5.0, 5.0], &cfg);

    println!(
        "RMSProp finished at ({}, {}) with f = {} after {} iterations",
        report.point[0], report.point[1], report.value, report.iterations
    );

    let (xs, ys) = report.path.iter().map(|p| (p[0], p[1])).unzip();
    print!("{}", export_csv(&[Series::new("RMSProp path", xs, ys)])?);
    Ok(())
}

/// Forward, backward and central differences of sin against cos.
fn finite_diff_demo() -> DemoResult {
    let h    = 0.1;
    let grid = arange(-2.0, 4.0, h)?;
    let cmp  = compare_schemes(f64::sin, f64::cos, &grid, h)?;

    for scheme in Scheme::ALL {
        println!("{scheme} difference: max |error| = {:e}", cmp.max_error(scheme));
    }

    let mut series = vec![
        Series::sample("sin(t)", &grid, f64::sin),
        Series::new("exact derivative cos(t)", grid.clone(), cmp.exact.clone()),
    ];
    for scheme in Scheme::ALL {
        series.push(Series::new(
            format!("{scheme} difference"),
            grid.clone(),
            cmp.estimates(scheme).to_vec(),
        ));
    }
    print!("{}", export_csv(&series)?);

    let f  = |x: f64| x.powi(3);
    let df = |x: f64| 3.0 * x * x;
    for scheme in Scheme::ALL {
        let p = scheme.error_at(f, df, 1.0, 0.01)?;
        println!("{scheme} at x = {}: estimate {}, exact {}, error {}", p.x, p.estimate, p.exact, p.error);
    }
    Ok(())
}

/// Hessian of x² + 3xy + 2y² and a quadratic fit search on cosh(x − 0.7).
fn second_order_demo() -> DemoResult {
    let f = |p: &[f64; 2]| p[0] * p[0] + 3.0 * p[0] * p[1] + 2.0 * p[1] * p[1];
    let h = hessian(f, [1.0, 1.0], 0.01)?;
    println!("Hessian at (1, 1): {h:?}");

    let report = quadratic_fit(|x: f64| (x - 0.7).cosh(), [-1.0, 0.0, 2.0], &QuadraticFitCfg::new())?;
    println!(
        "Quadratic fit search: x = {} with f = {} after {} iterations ({:?})",
        report.point, report.value, report.iterations, report.termination
    );

    let (xs, ys) = report.steps.iter().map(|s| (s.x, s.fx)).unzip();
    print!("{}", export_csv(&[Series::new("quadratic fit vertices", xs, ys)])?);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let demo = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let result = match demo.as_str() {
        "secant"      => secant_demo(),
        "rmsprop"     => rmsprop_demo(),
        "finite-diff" => finite_diff_demo(),
        "second-order" => second_order_demo(),
        "all"         => secant_demo()
            .and_then(|_| rmsprop_demo())
            .and_then(|_| finite_diff_demo())
            .and_then(|_| second_order_demo()),
        other => {
            eprintln!("unknown demo `{other}`; expected secant, rmsprop, finite-diff, second-order or all");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
