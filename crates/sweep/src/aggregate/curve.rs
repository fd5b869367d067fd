use ohmic_fit::LinearFit;

/// One ambient condition and the fit measured there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub condition: f64,
    pub fit: LinearFit,
}

impl CurvePoint {
    /// The derived parameter at this condition: the fitted slope.
    ///
    /// For a voltage sweep this is the resistance in ohms.
    #[must_use]
    pub fn parameter(&self) -> f64 {
        self.fit.slope
    }
}

/// Fitted parameters by ambient condition, in visitation order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureCurve {
    points: Vec<CurvePoint>,
}

impl TemperatureCurve {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: CurvePoint) {
        self.points.push(point);
    }

    /// Returns the points in visitation order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of conditions visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no condition completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `(condition, parameter)` pairs, ready for an R(T) plot.
    #[must_use]
    pub fn pairs(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|point| [point.condition, point.parameter()])
            .collect()
    }

    /// Iterates over the points in visitation order.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TemperatureCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
