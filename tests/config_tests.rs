use std::time::Duration;

use ludus::{Error, MctsConfig};

#[test]
fn default_configuration_is_valid() {
    let config = MctsConfig::default();
    assert_eq!(config.iterations, 10_000);
    assert_eq!(config.exploration_constant, std::f64::consts::SQRT_2);
    assert_eq!(config.max_time, None);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn builders_set_every_field() {
    let config = MctsConfig::default()
        .with_iterations(250)
        .with_exploration_constant(0.7)
        .with_max_time(Duration::from_millis(50))
        .with_seed(99);

    assert_eq!(config.iterations, 250);
    assert_eq!(config.exploration_constant, 0.7);
    assert_eq!(config.max_time, Some(Duration::from_millis(50)));
    assert_eq!(config.seed, Some(99));
    assert!(config.validate().is_ok());
}

#[test]
fn zero_iterations_fail_validation() {
    let config = MctsConfig::default().with_iterations(0);
    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn negative_exploration_constant_fails_validation() {
    let config = MctsConfig::default().with_exploration_constant(-0.1);
    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn non_finite_exploration_constant_fails_validation() {
    for bad in [f64::NAN, f64::INFINITY] {
        let config = MctsConfig::default().with_exploration_constant(bad);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}

#[test]
fn zero_exploration_is_allowed() {
    // Pure exploitation is a legitimate, if greedy, configuration.
    let config = MctsConfig::default().with_exploration_constant(0.0);
    assert!(config.validate().is_ok());
}
