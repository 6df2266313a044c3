//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use numlab::root_finding::{
    secant, DegeneracyGuard, ScalarFunction, SecantCfg, SecantError, SecantOutcome, Termination,
};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-10)?;

    let out = secant(f, 1.0, 2.0, &cfg);

    assert_eq!(out.termination(), Termination::ToleranceReached);
    assert!(f(out.estimate()).abs() < 1e-10);
    assert_abs_diff_eq!(out.estimate(), 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn converged_residual_is_below_tolerance() -> TestResult {
    let cases: [(fn(f64) -> f64, f64, f64); 3] = [
        (|x: f64| x.powi(3) - 27.0, 2.0, 4.0),
        (f64::sin, 3.0, 3.5),
        (|x: f64| x.exp() - 2.0, 0.0, 1.0),
    ];
    let cfg = SecantCfg::new().set_tol(1e-9)?;

    for (f, x0, x1) in cases {
        let out = secant(f, x0, x1, &cfg);
        assert!(out.converged());
        assert!(f(out.estimate()).abs() < cfg.tol());
    }
    Ok(())
}

#[test]
fn linear_function_converges_in_one_iteration() {
    let f   = |x: f64| 2.0 * x - 6.0;
    let out = secant(f, 0.0, 10.0, &SecantCfg::new());

    assert_eq!(
        out,
        SecantOutcome::Converged { 
            estimate    : 3.0, 
            iterations  : 1, 
            evaluations : 3, 
            history     : vec![0.0, 10.0, 3.0] 
        }
    );
}

#[test]
fn equal_function_values_abort_immediately() {
    let f   = |x: f64| x * x - 1.0;
    let out = secant(f, -2.0, 2.0, &SecantCfg::new());

    assert_eq!(out.termination(), Termination::DegenerateStep);
    assert!(!out.converged());
    assert_eq!(out.iterations(), 0);
    assert_eq!(out.history(), &[-2.0, 2.0]);
    assert_eq!(out.estimate(), 2.0);
}

#[test]
fn equal_seeds_are_degenerate() {
    let out = secant(|x: f64| x, 1.0, 1.0, &SecantCfg::new());

    assert_eq!(out.termination(), Termination::DegenerateStep);
    assert_eq!(out.iterations(), 0);
    assert_eq!(out.history(), &[1.0, 1.0]);
}

#[test]
fn degenerate_step_mid_run_keeps_partial_history() {
    // x2 = -1 and f(-1) == f(1), so the second step has no intercept
    let f   = |x: f64| x * x + 1.0;
    let out = secant(f, 0.0, 1.0, &SecantCfg::new());

    match out {
        SecantOutcome::DegenerateStep { last_estimate, iterations, history, .. } => {
            assert_eq!(last_estimate, -1.0);
            assert_eq!(iterations, 1);
            assert_eq!(history, vec![0.0, 1.0, -1.0]);
        }
        other => panic!("expected DegenerateStep, got {other:?}"),
    }
}

#[test]
fn zero_budget_runs_no_iteration() {
    let cfg = SecantCfg::new().set_max_iter(0);
    let out = secant(|x: f64| x - 0.5, 0.0, 1.0, &cfg);

    assert_eq!(out.termination(), Termination::IterationLimit);
    assert_eq!(out.iterations(), 0);
    assert_eq!(out.history(), &[0.0, 1.0]);
    assert_eq!(out.estimate(), 1.0);
}

#[test]
fn budget_is_a_hard_ceiling() {
    let f   = |x: f64| x.powi(3) - x - 1.0;
    let cfg = SecantCfg::new().set_max_iter(3);
    let out = secant(f, 1.0, 2.0, &cfg);

    match out {
        SecantOutcome::ExhaustedBudget { last_estimate, iterations, history, .. } => {
            assert_eq!(iterations, 3);
            assert_eq!(history.len(), 5);
            assert_eq!(last_estimate, history[4]);
            assert_abs_diff_eq!(last_estimate, 1.3372064458416566, epsilon = 1e-12);
        }
        other => panic!("expected ExhaustedBudget, got {other:?}"),
    }
}

#[test]
fn nan_values_exhaust_the_budget() {
    let cfg = SecantCfg::new().set_max_iter(4);
    let out = secant(|_x: f64| f64::NAN, 0.0, 1.0, &cfg);

    assert_eq!(out.termination(), Termination::IterationLimit);
    assert_eq!(out.iterations(), 4);
    assert_eq!(out.history().len(), 6);
}

#[test]
fn history_length_tracks_iterations_on_every_path() -> TestResult {
    let runs = [
        secant(|x: f64| x * x - 2.0, 1.0, 2.0, &SecantCfg::new()),
        secant(|x: f64| x * x + 1.0, 0.0, 1.0, &SecantCfg::new()),
        secant(|x: f64| x * x + 1.0, 3.0, 4.0, &SecantCfg::new().set_max_iter(7)),
        secant(|x: f64| x.cos() - x, 0.0, 1.0, &SecantCfg::new().set_tol(0.0)?),
    ];

    for out in &runs {
        assert_eq!(out.history().len(), out.iterations() + 2);
        assert_eq!(*out.history().last().unwrap(), out.estimate());
    }
    Ok(())
}

#[test]
fn each_iteration_costs_one_evaluation() {
    let out = secant(|x: f64| x * x - 2.0, 1.0, 2.0, &SecantCfg::new());
    assert_eq!(out.evaluations(), out.iterations() + 2);
}

#[test]
fn identical_inputs_give_identical_outcomes() {
    let f   = |x: f64| x.exp() - 3.0 * x;
    let cfg = SecantCfg::new();

    assert_eq!(secant(f, 0.0, 1.0, &cfg), secant(f, 0.0, 1.0, &cfg));
}

#[test]
fn tighter_tolerance_never_needs_fewer_iterations() -> TestResult {
    let dg   = |x: f64| 3.0 * x * x - 2.0;
    let tols = [1e-2, 1e-4, 1e-6, 1e-8, 1e-10, 1e-12, 1e-14, 1e-16, 0.0];

    let mut prev = 0;
    for tol in tols {
        let iters = secant(dg, 1.0, 2.0, &SecantCfg::new().set_tol(tol)?).iterations();
        assert!(iters >= prev, "tol {tol}: {iters} < {prev}");
        prev = iters;
    }
    Ok(())
}

#[test]
fn scaled_guard_stops_on_near_equal_values() -> TestResult {
    // the two values differ by one ulp: exact guard steps, scaled guard aborts
    let f  = |x: f64| if x < 0.5 { 1.0 } else { 1.0 + f64::EPSILON };
    let base = SecantCfg::new().set_max_iter(1).set_tol(0.0)?;

    let exact  = secant(f, 0.0, 1.0, &base);
    let scaled = secant(f, 0.0, 1.0, &base.set_guard(DegeneracyGuard::Scaled));

    assert_eq!(exact.termination(), Termination::IterationLimit);
    assert_eq!(exact.iterations(), 1);
    assert_eq!(scaled.termination(), Termination::DegenerateStep);
    assert_eq!(scaled.iterations(), 0);
    Ok(())
}

#[test]
fn named_types_implement_scalar_function() {
    struct Shifted { c: f64 }
    impl ScalarFunction for Shifted {
        fn eval(&self, x: f64) -> f64 { x - self.c }
    }

    let out = secant(Shifted { c: 4.25 }, 0.0, 1.0, &SecantCfg::new());
    assert!(out.converged());
    assert_abs_diff_eq!(out.estimate(), 4.25, epsilon = 1e-12);
}

#[test]
fn into_parts_yields_the_plain_triple() {
    let (est, iters, hist) = secant(|x: f64| x - 2.0, 0.0, 1.0, &SecantCfg::new()).into_parts();

    assert_eq!(est, 2.0);
    assert_eq!(iters, 1);
    assert_eq!(hist, vec![0.0, 1.0, 2.0]);
}

#[test]
fn invalid_tolerance_is_rejected() {
    assert_eq!(
        SecantCfg::new().set_tol(-1e-6).unwrap_err(),
        SecantError::InvalidTolerance { got: -1e-6 }
    );
    assert!(SecantCfg::new().set_tol(f64::INFINITY).is_err());
}

#[test]
fn defaults_match_documented_values() {
    let cfg = SecantCfg::default();
    assert_eq!(cfg.tol(), 1e-6);
    assert_eq!(cfg.max_iter(), 100);
    assert_eq!(cfg.guard(), DegeneracyGuard::Exact);
}
