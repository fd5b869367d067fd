use std::{cell::Cell, rc::Rc};

use approx::assert_relative_eq;
use thiserror::Error;

use ohmic_core::{Reading, Sensor, StimulusActuator};

use super::{Error, Event, SensorRole, SweepExecutor, run_sweep};

#[derive(Debug, Error)]
#[error("setpoint {0} is out of range")]
struct OutOfRange(f64);

#[derive(Debug, Error)]
#[error("transient read fault")]
struct ReadFault;

/// A source that shares its level with the meters and logs every command.
struct Source {
    level: Rc<Cell<f64>>,
    limit: f64,
    commands: Vec<f64>,
}

impl StimulusActuator for Source {
    type Error = OutOfRange;

    fn set(&mut self, value: f64) -> Result<(), Self::Error> {
        self.commands.push(value);
        if value.abs() > self.limit {
            return Err(OutOfRange(value));
        }
        self.level.set(value);
        Ok(())
    }
}

/// A noiseless meter reading `gain · level`, optionally failing on one read.
struct Meter {
    level: Rc<Cell<f64>>,
    gain: f64,
    fail_on_read: Option<usize>,
    reads: usize,
    sigma: f64,
}

impl Sensor for Meter {
    type Error = ReadFault;

    fn read(&mut self) -> Result<f64, Self::Error> {
        let read = self.reads;
        self.reads += 1;
        if self.fail_on_read == Some(read) {
            return Err(ReadFault);
        }
        Ok(self.gain * self.level.get())
    }

    fn uncertainty(&self) -> f64 {
        self.sigma
    }
}

/// A 100 Ω bench: voltmeter reads the source, ammeter reads source / 100.
fn bench() -> (Source, Meter, Meter) {
    let level = Rc::new(Cell::new(0.0));
    let source = Source {
        level: Rc::clone(&level),
        limit: 10.0,
        commands: Vec::new(),
    };
    let voltmeter = Meter {
        level: Rc::clone(&level),
        gain: 1.0,
        fail_on_read: None,
        reads: 0,
        sigma: 0.1,
    };
    let ammeter = Meter {
        level,
        gain: 0.01,
        fail_on_read: None,
        reads: 0,
        sigma: 5e-4,
    };
    (source, voltmeter, ammeter)
}

#[test]
fn readings_follow_setpoint_order() {
    let (source, voltmeter, ammeter) = bench();
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);
    let setpoints = [3.0, -1.0, 2.0, 0.0];

    let sweep = executor.run_sweep_unobserved(&setpoints).expect("sweep should succeed");

    assert_eq!(sweep.len(), setpoints.len());
    assert_eq!(sweep.setpoints(), setpoints);
    for (reading, setpoint) in sweep.readings().iter().zip(setpoints) {
        assert_relative_eq!(reading.stimulus, setpoint);
        assert_relative_eq!(reading.response, setpoint * 0.01);
    }

    let (source, voltmeter, ammeter) = executor.into_parts();
    assert_eq!(source.commands, setpoints);
    assert_eq!(voltmeter.reads, 4);
    assert_eq!(ammeter.reads, 4);
}

#[test]
fn single_setpoint_is_a_valid_sweep() {
    let (mut source, mut voltmeter, mut ammeter) = bench();

    let sweep = run_sweep(&mut source, &mut voltmeter, &mut ammeter, &[2.0]).unwrap();

    assert_eq!(sweep.readings(), [Reading::new(2.0, 0.02)]);
    assert_eq!(source.commands, [2.0]);
}

#[test]
fn observer_sees_each_reading_in_order() {
    let (source, voltmeter, ammeter) = bench();
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);

    let mut events = Vec::new();
    let sweep = executor
        .run_sweep(&[-2.0, 0.0, 2.0], |event: &Event| {
            events.push(*event);
            None
        })
        .unwrap();

    assert_eq!(events.len(), 3);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.index, i);
        assert_eq!(event.setpoint, sweep.setpoints()[i]);
        assert_eq!(event.reading, sweep.readings()[i]);
    }
}

#[test]
fn failed_read_aborts_without_result() {
    let (source, voltmeter, mut ammeter) = bench();
    ammeter.fail_on_read = Some(3);
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);
    let setpoints: Vec<f64> = (-5..=5).map(f64::from).collect();

    let mut observed = 0;
    let result = executor.run_sweep(&setpoints, |_: &Event| {
        observed += 1;
        None
    });

    assert!(matches!(
        result,
        Err(Error::Acquisition {
            index: 3,
            sensor: SensorRole::Response,
            ..
        })
    ));
    assert_eq!(observed, 3);

    // No retry and nothing after the failure.
    let (source, voltmeter, ammeter) = executor.into_parts();
    assert_eq!(source.commands, [-5.0, -4.0, -3.0, -2.0]);
    assert_eq!(voltmeter.reads, 4);
    assert_eq!(ammeter.reads, 4);
}

#[test]
fn stimulus_sensor_failure_is_reported_with_its_role() {
    let (source, mut voltmeter, ammeter) = bench();
    voltmeter.fail_on_read = Some(0);
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);

    let result = executor.run_sweep_unobserved(&[1.0, 2.0, 3.0]);

    assert!(matches!(
        result,
        Err(Error::Acquisition {
            index: 0,
            sensor: SensorRole::Stimulus,
            ..
        })
    ));
    let (_, _, ammeter) = executor.into_parts();
    assert_eq!(ammeter.reads, 0);
}

#[test]
fn rejected_setpoint_aborts_before_reading() {
    let (source, voltmeter, ammeter) = bench();
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);

    let result = executor.run_sweep_unobserved(&[1.0, 20.0, 3.0]);

    let Err(Error::Actuation {
        index, setpoint, ..
    }) = result
    else {
        panic!("expected an actuation error, got {result:?}");
    };
    assert_eq!(index, 1);
    assert_relative_eq!(setpoint, 20.0);

    let (source, voltmeter, _) = executor.into_parts();
    assert_eq!(source.commands, [1.0, 20.0]);
    assert_eq!(voltmeter.reads, 1);
}

#[test]
fn rejects_empty_setpoints() {
    let (source, voltmeter, ammeter) = bench();
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);

    assert!(matches!(
        executor.run_sweep_unobserved(&[]),
        Err(Error::NoSetpoints)
    ));
}

#[test]
fn exposes_sensor_uncertainties() {
    let (source, voltmeter, ammeter) = bench();
    let executor = SweepExecutor::new(source, voltmeter, ammeter);

    assert_relative_eq!(executor.stimulus_uncertainty(), 0.1);
    assert_relative_eq!(executor.response_uncertainty(), 5e-4);
}

#[test]
fn error_chain_keeps_instrument_cause() {
    let (source, voltmeter, ammeter) = bench();
    let mut executor = SweepExecutor::new(source, voltmeter, ammeter);

    let err = executor.run_sweep_unobserved(&[11.0]).unwrap_err();

    let source = std::error::Error::source(&err).expect("cause should be attached");
    assert_eq!(source.to_string(), "setpoint 11 is out of range");
}
