//! tests for the RMSProp optimizer
use approx::assert_abs_diff_eq;
use numlab::optimization::{rmsprop, RmsPropCfg, RmsPropError};

fn objective(p: &[f64; 2]) -> f64 { (p[0] - 1.0).powi(2) + 2.0 * (p[1] - 2.0).powi(2) }
fn gradient(p: &[f64; 2]) -> [f64; 2] { [2.0 * (p[0] - 1.0), 4.0 * (p[1] - 2.0)] }

#[test]
fn reaches_quadratic_minimum() {
    let report = rmsprop(objective, gradient, [5.0, 5.0], &RmsPropCfg::new());

    assert_eq!(report.iterations, 100);
    assert_abs_diff_eq!(report.point[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(report.point[1], 2.0, epsilon = 1e-3);
    assert!(report.value < 1e-5);
}

#[test]
fn path_has_start_plus_one_point_per_iteration() -> Result<(), RmsPropError> {
    let cfg    = RmsPropCfg::new().set_learning_rate(0.05)?.set_max_iter(25);
    let report = rmsprop(objective, gradient, [5.0, 5.0], &cfg);

    assert_eq!(report.path.len(), 26);
    assert_eq!(report.steps.len(), 25);
    assert_eq!(report.path[0], [5.0, 5.0]);
    assert_eq!(*report.path.last().unwrap(), report.point);
    assert_eq!(report.steps[24].point, report.point);
    Ok(())
}

#[test]
fn runs_every_iteration_even_at_the_minimum() {
    let cfg    = RmsPropCfg::new().set_max_iter(10);
    let report = rmsprop(objective, gradient, [1.0, 2.0], &cfg);

    assert_eq!(report.iterations, 10);
    assert_eq!(report.path.len(), 11);
    assert!(report.path.iter().all(|p| *p == [1.0, 2.0]));
    assert_eq!(report.value, 0.0);
}

#[test]
fn step_records_gradient_norm_and_mean_square() {
    let cfg    = RmsPropCfg::new().set_max_iter(1);
    let report = rmsprop(objective, gradient, [5.0, 5.0], &cfg);
    let step   = report.steps[0];

    // g = (8, 12) at the start
    assert_abs_diff_eq!(step.grad_norm, (64.0_f64 + 144.0).sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(step.s[0], 0.1 * 64.0, epsilon = 1e-12);
    assert_abs_diff_eq!(step.s[1], 0.1 * 144.0, epsilon = 1e-12);
    assert_abs_diff_eq!(step.value, objective(&step.point), epsilon = 1e-15);
}

#[test]
fn zero_iterations_returns_start() {
    let cfg    = RmsPropCfg::new().set_max_iter(0);
    let report = rmsprop(objective, gradient, [5.0, 5.0], &cfg);

    assert_eq!(report.point, [5.0, 5.0]);
    assert_eq!(report.path, vec![[5.0, 5.0]]);
    assert!(report.steps.is_empty());
    assert_eq!(report.value, objective(&[5.0, 5.0]));
}

#[test]
fn works_in_three_dimensions() {
    let f  = |p: &[f64; 3]| p.iter().map(|v| v * v).sum::<f64>();
    let df = |p: &[f64; 3]| [2.0 * p[0], 2.0 * p[1], 2.0 * p[2]];

    // the fixed learning rate leaves it hovering within ~α of the origin
    let report = rmsprop(f, df, [1.0, -2.0, 3.0], &RmsPropCfg::new().set_max_iter(200));
    assert!(report.value < 1e-2);
    assert!(report.point.iter().all(|v| v.abs() < 0.1));
}

#[test]
fn invalid_settings_are_rejected() {
    assert_eq!(
        RmsPropCfg::new().set_learning_rate(-0.1).unwrap_err(),
        RmsPropError::InvalidLearningRate { got: -0.1 }
    );
    assert!(matches!(
        RmsPropCfg::new().set_decay(-0.5), 
        Err(RmsPropError::InvalidDecay { .. })
    ));
    assert!(matches!(
        RmsPropCfg::new().set_epsilon(0.0), 
        Err(RmsPropError::InvalidEpsilon { .. })
    ));
}
