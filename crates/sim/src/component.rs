use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval, thermodynamic_temperature::kelvin,
};

/// A two-terminal component with a temperature-dependent resistance.
pub trait Component {
    /// Returns the component's resistance at the given temperature.
    fn resistance(&self, temperature: ThermodynamicTemperature) -> ElectricalResistance;
}

/// An ideal resistor whose resistance ignores temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistor {
    pub resistance: ElectricalResistance,
}

impl Resistor {
    /// Creates a resistor of the given resistance.
    #[must_use]
    pub fn new(resistance: ElectricalResistance) -> Self {
        Self { resistance }
    }
}

/// A 100 Ω resistor.
impl Default for Resistor {
    fn default() -> Self {
        Self::new(ElectricalResistance::new::<ohm>(100.0))
    }
}

impl Component for Resistor {
    fn resistance(&self, _temperature: ThermodynamicTemperature) -> ElectricalResistance {
        self.resistance
    }
}

/// An NTC thermistor following the beta model.
///
/// ```text
/// R(T) = R₀ · exp(β · (1/T − 1/T₀))
/// ```
///
/// Resistance falls as temperature rises.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thermistor {
    /// Resistance at the reference temperature.
    pub reference_resistance: ElectricalResistance,
    /// Reference temperature `T₀`.
    pub reference_temperature: ThermodynamicTemperature,
    /// Beta coefficient, in kelvin.
    pub beta: TemperatureInterval,
}

/// 100 Ω at 25 °C with β = 3950 K.
impl Default for Thermistor {
    fn default() -> Self {
        Self {
            reference_resistance: ElectricalResistance::new::<ohm>(100.0),
            reference_temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
            beta: TemperatureInterval::new::<temperature_interval::kelvin>(3950.0),
        }
    }
}

impl Component for Thermistor {
    fn resistance(&self, temperature: ThermodynamicTemperature) -> ElectricalResistance {
        let t = temperature.get::<kelvin>();
        let t0 = self.reference_temperature.get::<kelvin>();
        let beta = self.beta.get::<temperature_interval::kelvin>();

        self.reference_resistance * (beta * (1.0 / t - 1.0 / t0)).exp()
    }
}
