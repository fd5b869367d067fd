use approx::assert_relative_eq;
use integration_tests::{Bench, standard_temperatures, standard_voltages};
use ohmic_core::{LinearRange, Reading};
use ohmic_fit::{format, linear};
use ohmic_plot::{CurveRecorder, IvFigure, RtFigure};
use ohmic_sim::{Component, Instrument, NoiseConfig, Resistor, Thermistor};
use ohmic_sweep::{
    aggregate::Cause,
    executor::{self, SensorRole},
    sweep_temperatures,
};
use uom::si::{
    electrical_resistance::ohm, f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin,
};

#[test]
fn noiseless_resistor_yields_exact_fit() {
    let mut bench = Bench::new(Resistor::default(), NoiseConfig::noiseless());
    let setpoints = LinearRange::new(-5.0, 5.0, 1.0).unwrap().values();

    let sweep = bench.executor.run_sweep_unobserved(&setpoints).unwrap();
    assert_eq!(sweep.len(), 11);
    assert_eq!(sweep.readings()[10], Reading::new(5.0, 0.05));

    let fit = ohmic_fit::fit(&sweep).unwrap();
    assert_relative_eq!(fit.slope, 100.0, max_relative = 1e-9);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-9);
    assert!(fit.slope_stderr < 1e-9);

    let formatted = format(fit.slope, fit.slope_stderr).unwrap();
    assert_eq!(formatted.mantissa, "1.00");
    assert_eq!(formatted.exponent, "2");
    assert_eq!(formatted.error, "0.00");

    let figure = IvFigure::with_fit(&sweep, &fit, 0.0, 0.0).unwrap();
    assert_eq!(
        figure.title,
        "I-V curve of the resistor (R = 1.00 +/- 0.00 x 10^2)"
    );
}

#[test]
fn noisy_resistor_fit_lands_near_truth() {
    let mut bench = Bench::new(Resistor::default(), NoiseConfig::default().with_seed(42));

    let sweep = bench.executor.run_sweep_unobserved(&standard_voltages()).unwrap();
    let fit = ohmic_fit::fit(&sweep).unwrap();

    assert!(fit.slope_stderr > 0.1 && fit.slope_stderr < 5.0);
    assert!(
        (fit.slope - 100.0).abs() < 10.0,
        "fitted {} ± {}",
        fit.slope,
        fit.slope_stderr
    );
    assert_relative_eq!(bench.executor.stimulus_uncertainty(), 0.1);
    assert_relative_eq!(bench.executor.response_uncertainty(), 5e-4);
}

#[test]
fn meter_fault_aborts_sweep_without_fit() {
    let mut bench = Bench::new(Resistor::default(), NoiseConfig::noiseless());
    bench.circuit.schedule_fault(Instrument::Voltmeter, 3);

    let err = bench
        .executor
        .run_sweep_unobserved(&standard_voltages())
        .unwrap_err();

    match err {
        executor::Error::Acquisition {
            index,
            setpoint,
            sensor,
            ..
        } => {
            assert_eq!(index, 3);
            assert_eq!(setpoint, -2.0);
            assert_eq!(sensor, SensorRole::Stimulus);
        }
        other => panic!("expected an acquisition error, got {other:?}"),
    }
    // The generator stays where the failed step left it.
    assert_relative_eq!(
        bench.circuit.applied_voltage().get::<uom::si::electric_potential::volt>(),
        -2.0
    );
}

#[test]
fn out_of_range_setpoint_is_an_actuation_error() {
    let mut bench = Bench::new(Resistor::default(), NoiseConfig::noiseless());

    let err = bench
        .executor
        .run_sweep_unobserved(&[0.0, 5.0, 15.0])
        .unwrap_err();

    assert!(matches!(
        err,
        executor::Error::Actuation { index: 2, .. }
    ));
}

#[test]
fn thermistor_curve_follows_beta_model() {
    let thermistor = Thermistor::default();
    let mut bench = Bench::new(thermistor, NoiseConfig::noiseless());
    let temperatures = standard_temperatures();

    let curve = ohmic_sweep::aggregate::sweep_temperatures_unobserved(
        &mut bench.chamber,
        &mut bench.executor,
        &temperatures,
        &standard_voltages(),
    )
    .unwrap();

    assert_eq!(curve.len(), 6);
    for point in &curve {
        let expected = thermistor
            .resistance(ThermodynamicTemperature::new::<kelvin>(point.condition))
            .get::<ohm>();
        assert_relative_eq!(point.parameter(), expected, max_relative = 1e-9);
    }
}

#[test]
fn noisy_thermistor_resistance_falls_with_temperature() {
    let mut bench = Bench::new(Thermistor::default(), NoiseConfig::default().with_seed(7));
    let mut recorder = CurveRecorder::new();

    let curve = sweep_temperatures(
        &mut bench.chamber,
        &mut bench.executor,
        &standard_temperatures(),
        &standard_voltages(),
        &mut recorder,
    )
    .unwrap();

    let resistances: Vec<f64> = curve.iter().map(|point| point.parameter()).collect();
    assert!(
        resistances.windows(2).all(|pair| pair[0] > pair[1]),
        "resistances should decrease: {resistances:?}"
    );

    assert_eq!(recorder.sweeps().len(), 6);
    assert!(recorder.sweeps()[0].label().starts_with("T = 270 K, R = "));

    let iv = recorder.iv_figure(0.1, 5e-4).unwrap();
    assert_eq!(iv.series.len(), 6);

    let rt = RtFigure::new(&curve).unwrap();
    assert_eq!(rt.points.len(), 6);
    assert_relative_eq!(rt.x_limits.min, 267.5);
    assert_relative_eq!(rt.x_limits.max, 297.5);
}

#[test]
fn unreachable_temperature_keeps_partial_curve() {
    let mut bench = Bench::new(Thermistor::default(), NoiseConfig::noiseless());

    let err = ohmic_sweep::aggregate::sweep_temperatures_unobserved(
        &mut bench.chamber,
        &mut bench.executor,
        &[300.0, 350.0, 450.0, 300.0],
        &standard_voltages(),
    )
    .unwrap_err();

    assert_eq!(err.index, 2);
    assert!(matches!(err.cause, Cause::Actuation(_)));
    assert_eq!(err.into_partial().len(), 2);
}

#[test]
fn too_few_setpoints_cannot_be_fitted() {
    let mut bench = Bench::new(Resistor::default(), NoiseConfig::noiseless());

    let sweep = bench.executor.run_sweep_unobserved(&[1.0, 2.0]).unwrap();

    assert_eq!(
        ohmic_fit::fit(&sweep),
        Err(linear::Error::InsufficientData { samples: 2 })
    );
}
