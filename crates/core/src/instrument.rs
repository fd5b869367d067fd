/// An instrument that applies a controllable stimulus, such as a voltage source.
///
/// The actuator remembers the last commanded value; each call to
/// [`set`](StimulusActuator::set) replaces it. Implementations must not clamp
/// out-of-range values silently, they reject them with an error instead.
pub trait StimulusActuator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Commands the actuator to the given stimulus level.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the device rejects the value, typically
    /// because it lies outside the device range.
    fn set(&mut self, value: f64) -> Result<(), Self::Error>;
}

/// An instrument that reports a single real-valued measurement.
pub trait Sensor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Takes one reading.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] on a transient acquisition fault.
    fn read(&mut self) -> Result<f64, Self::Error>;

    /// Returns the fixed nominal standard deviation of this instrument.
    ///
    /// This is a property of the instrument, not of any individual reading.
    fn uncertainty(&self) -> f64;
}

/// An instrument that controls an ambient condition, such as a temperature chamber.
///
/// Settling, if the physical system needs it, is the implementation's concern:
/// callers assume the condition holds once [`set`](AmbientActuator::set) returns.
pub trait AmbientActuator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Commands the ambient condition.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the device rejects the condition.
    fn set(&mut self, condition: f64) -> Result<(), Self::Error>;
}

impl<T: StimulusActuator + ?Sized> StimulusActuator for &mut T {
    type Error = T::Error;

    fn set(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).set(value)
    }
}

impl<T: Sensor + ?Sized> Sensor for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<f64, Self::Error> {
        (**self).read()
    }

    fn uncertainty(&self) -> f64 {
        (**self).uncertainty()
    }
}

impl<T: AmbientActuator + ?Sized> AmbientActuator for &mut T {
    type Error = T::Error;

    fn set(&mut self, condition: f64) -> Result<(), Self::Error> {
        (**self).set(condition)
    }
}
