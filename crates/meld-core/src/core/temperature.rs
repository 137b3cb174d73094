use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ScalerError {
    #[error("Invalid temperature scaler configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Alpha must lie within [0, 1], got {0}")]
    InvalidAlpha(f64),
}

/// Maps a normalized ladder position `alpha` in `[0, 1]` to a temperature.
///
/// The three schedules are a closed set. Every variant is validated when it
/// is constructed, so a scaler that exists can only fail on an out-of-range
/// `alpha` at call time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParams", into = "ScalerParams")]
pub enum TemperatureScaler {
    /// The same temperature for every rung.
    Constant(ConstantTemperature),
    /// Linear interpolation between `temp_min` and `temp_max`.
    Linear(ScalerRange),
    /// Interpolation in log-temperature space between `temp_min` and `temp_max`.
    Geometric(ScalerRange),
}

/// Validated temperature of the constant schedule: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTemperature(f64);

impl ConstantTemperature {
    fn new(temperature: f64) -> Result<Self, ScalerError> {
        if !temperature.is_finite() || temperature < 0.0 {
            return Err(ScalerError::InvalidConfiguration(format!(
                "temperature must be finite and non-negative, got {temperature}"
            )));
        }
        Ok(Self(temperature))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Validated interpolation window shared by the linear and geometric schedules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalerRange {
    alpha_min: f64,
    alpha_max: f64,
    temp_min: f64,
    temp_max: f64,
}

impl ScalerRange {
    fn new(
        alpha_min: f64,
        alpha_max: f64,
        temp_min: f64,
        temp_max: f64,
    ) -> Result<Self, ScalerError> {
        let params = [
            ("alpha_min", alpha_min),
            ("alpha_max", alpha_max),
            ("temp_min", temp_min),
            ("temp_max", temp_max),
        ];
        if let Some((name, value)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScalerError::InvalidConfiguration(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !(0.0..=1.0).contains(&alpha_min) {
            return Err(ScalerError::InvalidConfiguration(format!(
                "alpha_min must lie within [0, 1], got {alpha_min}"
            )));
        }
        if !(0.0..=1.0).contains(&alpha_max) {
            return Err(ScalerError::InvalidConfiguration(format!(
                "alpha_max must lie within [0, 1], got {alpha_max}"
            )));
        }
        if alpha_min > alpha_max {
            return Err(ScalerError::InvalidConfiguration(format!(
                "alpha_min ({alpha_min}) must not exceed alpha_max ({alpha_max})"
            )));
        }
        if temp_min < 0.0 {
            return Err(ScalerError::InvalidConfiguration(format!(
                "temp_min must be non-negative, got {temp_min}"
            )));
        }
        if temp_max < 0.0 {
            return Err(ScalerError::InvalidConfiguration(format!(
                "temp_max must be non-negative, got {temp_max}"
            )));
        }
        Ok(Self {
            alpha_min,
            alpha_max,
            temp_min,
            temp_max,
        })
    }

    pub fn alpha_min(&self) -> f64 {
        self.alpha_min
    }

    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    pub fn temp_min(&self) -> f64 {
        self.temp_min
    }

    pub fn temp_max(&self) -> f64 {
        self.temp_max
    }

    /// Clamps `alpha` to the window. Returns `Err` with the boundary
    /// temperature when `alpha` falls outside, or `Ok(u)` with the
    /// fractional position inside it.
    fn locate(&self, alpha: f64) -> Result<f64, f64> {
        if alpha <= self.alpha_min {
            Err(self.temp_min)
        } else if alpha >= self.alpha_max {
            Err(self.temp_max)
        } else {
            Ok((alpha - self.alpha_min) / (self.alpha_max - self.alpha_min))
        }
    }
}

impl TemperatureScaler {
    pub fn constant(temperature: f64) -> Result<Self, ScalerError> {
        ConstantTemperature::new(temperature).map(Self::Constant)
    }

    pub fn linear(
        alpha_min: f64,
        alpha_max: f64,
        temp_min: f64,
        temp_max: f64,
    ) -> Result<Self, ScalerError> {
        ScalerRange::new(alpha_min, alpha_max, temp_min, temp_max).map(Self::Linear)
    }

    /// Creates a geometric schedule.
    ///
    /// Both temperatures must be strictly positive since the interpolation
    /// happens on `ln(temperature)`.
    pub fn geometric(
        alpha_min: f64,
        alpha_max: f64,
        temp_min: f64,
        temp_max: f64,
    ) -> Result<Self, ScalerError> {
        let range = ScalerRange::new(alpha_min, alpha_max, temp_min, temp_max)?;
        if temp_min == 0.0 || temp_max == 0.0 {
            return Err(ScalerError::InvalidConfiguration(format!(
                "geometric schedule requires positive temperatures, got temp_min={temp_min}, temp_max={temp_max}"
            )));
        }
        Ok(Self::Geometric(range))
    }

    /// Evaluates the schedule at `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalerError::InvalidAlpha`] when `alpha` is outside `[0, 1]`
    /// or NaN, regardless of the variant.
    pub fn scale(&self, alpha: f64) -> Result<f64, ScalerError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ScalerError::InvalidAlpha(alpha));
        }

        let temperature = match self {
            Self::Constant(temperature) => temperature.get(),
            Self::Linear(range) => match range.locate(alpha) {
                Ok(u) => range.temp_min + (range.temp_max - range.temp_min) * u,
                Err(boundary) => boundary,
            },
            Self::Geometric(range) => match range.locate(alpha) {
                Ok(u) => range.temp_min * (range.temp_max / range.temp_min).powf(u),
                Err(boundary) => boundary,
            },
        };
        Ok(temperature)
    }

    /// Temperatures for `n_rungs` evenly spaced ladder positions, bottom rung first.
    ///
    /// Rung `r` sits at `alpha = r / (n_rungs - 1)`; a single rung sits at `alpha = 0`.
    pub fn rung_temperatures(&self, n_rungs: usize) -> Result<Vec<f64>, ScalerError> {
        let last = n_rungs.saturating_sub(1).max(1) as f64;
        (0..n_rungs)
            .map(|rung| self.scale(rung as f64 / last))
            .collect()
    }
}

/// Flat serde shape for [`TemperatureScaler`].
///
/// Deserialization is routed through the validating constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
enum ScalerParams {
    Constant {
        temperature: f64,
    },
    #[serde(rename_all = "kebab-case")]
    Linear {
        alpha_min: f64,
        alpha_max: f64,
        temp_min: f64,
        temp_max: f64,
    },
    #[serde(rename_all = "kebab-case")]
    Geometric {
        alpha_min: f64,
        alpha_max: f64,
        temp_min: f64,
        temp_max: f64,
    },
}

impl TryFrom<ScalerParams> for TemperatureScaler {
    type Error = ScalerError;

    fn try_from(params: ScalerParams) -> Result<Self, Self::Error> {
        match params {
            ScalerParams::Constant { temperature } => Self::constant(temperature),
            ScalerParams::Linear {
                alpha_min,
                alpha_max,
                temp_min,
                temp_max,
            } => Self::linear(alpha_min, alpha_max, temp_min, temp_max),
            ScalerParams::Geometric {
                alpha_min,
                alpha_max,
                temp_min,
                temp_max,
            } => Self::geometric(alpha_min, alpha_max, temp_min, temp_max),
        }
    }
}

impl From<TemperatureScaler> for ScalerParams {
    fn from(scaler: TemperatureScaler) -> Self {
        match scaler {
            TemperatureScaler::Constant(temperature) => Self::Constant {
                temperature: temperature.get(),
            },
            TemperatureScaler::Linear(r) => Self::Linear {
                alpha_min: r.alpha_min,
                alpha_max: r.alpha_max,
                temp_min: r.temp_min,
                temp_max: r.temp_max,
            },
            TemperatureScaler::Geometric(r) => Self::Geometric {
                alpha_min: r.alpha_min,
                alpha_max: r.alpha_max,
                temp_min: r.temp_min,
                temp_max: r.temp_max,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn constant_returns_same_temperature_everywhere() {
        let s = TemperatureScaler::constant(300.0).unwrap();
        for alpha in [0.0, 0.25, 0.5, 1.0] {
            assert_close(s.scale(alpha).unwrap(), 300.0);
        }
    }

    #[test]
    fn constant_rejects_alpha_outside_unit_interval() {
        let s = TemperatureScaler::constant(300.0).unwrap();
        assert_eq!(s.scale(-1.0), Err(ScalerError::InvalidAlpha(-1.0)));
        assert_eq!(s.scale(2.0), Err(ScalerError::InvalidAlpha(2.0)));
    }

    #[test]
    fn constant_rejects_negative_temperature() {
        assert!(matches!(
            TemperatureScaler::constant(-1.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn constant_rejects_non_finite_temperature() {
        for bad in [f64::NAN, f64::INFINITY, -5.0] {
            assert!(matches!(
                TemperatureScaler::constant(bad),
                Err(ScalerError::InvalidConfiguration(_))
            ));
        }
        let bad = toml::from_str::<TemperatureScaler>("type = \"constant\"\ntemperature = -5.0\n");
        assert!(bad.is_err());
    }

    #[test]
    fn constant_exposes_validated_temperature() {
        let s = TemperatureScaler::constant(310.0).unwrap();
        let TemperatureScaler::Constant(temperature) = s else {
            panic!("expected a constant schedule, got {s:?}");
        };
        assert_eq!(temperature.get(), 310.0);
    }

    #[test]
    fn linear_clamps_below_and_above_window() {
        let s = TemperatureScaler::linear(0.2, 0.8, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.0).unwrap(), 300.0);
        assert_close(s.scale(0.1).unwrap(), 300.0);
        assert_close(s.scale(0.9).unwrap(), 500.0);
        assert_close(s.scale(1.0).unwrap(), 500.0);
    }

    #[test]
    fn linear_hits_boundaries_exactly() {
        let s = TemperatureScaler::linear(0.2, 0.8, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.2).unwrap(), 300.0);
        assert_close(s.scale(0.8).unwrap(), 500.0);
    }

    #[test]
    fn linear_midpoint_is_arithmetic_mean() {
        let s = TemperatureScaler::linear(0.2, 0.8, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.5).unwrap(), 400.0);
    }

    #[test]
    fn geometric_midpoint_is_geometric_mean() {
        let s = TemperatureScaler::geometric(0.2, 0.8, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.5).unwrap(), 387.298334621);
        assert_close(s.scale(0.5).unwrap(), (300.0f64 * 500.0).sqrt());
    }

    #[test]
    fn geometric_clamps_and_hits_boundaries() {
        let s = TemperatureScaler::geometric(0.2, 0.8, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.0).unwrap(), 300.0);
        assert_close(s.scale(0.2).unwrap(), 300.0);
        assert_close(s.scale(0.8).unwrap(), 500.0);
        assert_close(s.scale(1.0).unwrap(), 500.0);
    }

    #[test]
    fn range_variants_reject_alpha_outside_unit_interval() {
        let linear = TemperatureScaler::linear(0.2, 0.8, 300.0, 500.0).unwrap();
        let geometric = TemperatureScaler::geometric(0.2, 0.8, 300.0, 500.0).unwrap();
        for s in [linear, geometric] {
            assert_eq!(s.scale(-0.5), Err(ScalerError::InvalidAlpha(-0.5)));
            assert_eq!(s.scale(1.5), Err(ScalerError::InvalidAlpha(1.5)));
            assert!(matches!(s.scale(f64::NAN), Err(ScalerError::InvalidAlpha(_))));
        }
    }

    #[test]
    fn construction_rejects_bad_alpha_window() {
        let bad = [
            (-0.1, 0.8),
            (1.1, 1.0),
            (0.2, -0.3),
            (0.2, 1.2),
            (0.8, 0.2),
        ];
        for (alpha_min, alpha_max) in bad {
            assert!(matches!(
                TemperatureScaler::linear(alpha_min, alpha_max, 300.0, 500.0),
                Err(ScalerError::InvalidConfiguration(_))
            ));
            assert!(matches!(
                TemperatureScaler::geometric(alpha_min, alpha_max, 300.0, 500.0),
                Err(ScalerError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn construction_rejects_negative_temperatures() {
        assert!(matches!(
            TemperatureScaler::linear(0.0, 1.0, -300.0, 500.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TemperatureScaler::linear(0.0, 1.0, 300.0, -500.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TemperatureScaler::geometric(0.0, 1.0, -300.0, 500.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TemperatureScaler::geometric(0.0, 1.0, 300.0, -500.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn geometric_rejects_zero_temperature() {
        assert!(matches!(
            TemperatureScaler::geometric(0.0, 1.0, 0.0, 500.0),
            Err(ScalerError::InvalidConfiguration(_))
        ));
        assert!(TemperatureScaler::linear(0.0, 1.0, 0.0, 500.0).is_ok());
    }

    #[test]
    fn degenerate_window_returns_temp_min_at_its_point() {
        let s = TemperatureScaler::linear(0.5, 0.5, 300.0, 500.0).unwrap();
        assert_close(s.scale(0.5).unwrap(), 300.0);
        assert_close(s.scale(0.6).unwrap(), 500.0);
    }

    #[test]
    fn rung_temperatures_span_full_schedule() {
        let s = TemperatureScaler::geometric(0.0, 1.0, 300.0, 450.0).unwrap();
        let temps = s.rung_temperatures(4).unwrap();
        assert_eq!(temps.len(), 4);
        assert_close(temps[0], 300.0);
        assert_close(temps[3], 450.0);
        assert!(temps.windows(2).all(|w| w[0] < w[1]));
        let ratio = temps[1] / temps[0];
        assert_close(temps[2] / temps[1], ratio);
    }

    #[test]
    fn rung_temperatures_handles_single_rung() {
        let s = TemperatureScaler::linear(0.0, 1.0, 300.0, 500.0).unwrap();
        assert_eq!(s.rung_temperatures(1).unwrap(), vec![300.0]);
        assert!(s.rung_temperatures(0).unwrap().is_empty());
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: TemperatureScaler = toml::from_str(
            "type = \"linear\"\nalpha-min = 0.2\nalpha-max = 0.8\ntemp-min = 300.0\ntemp-max = 500.0\n",
        )
        .unwrap();
        assert_eq!(ok, TemperatureScaler::linear(0.2, 0.8, 300.0, 500.0).unwrap());

        let bad = toml::from_str::<TemperatureScaler>(
            "type = \"geometric\"\nalpha-min = 0.9\nalpha-max = 0.1\ntemp-min = 300.0\ntemp-max = 500.0\n",
        );
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_with_type_tag() {
        let s = TemperatureScaler::constant(310.0).unwrap();
        let text = toml::to_string(&s).unwrap();
        assert!(text.contains("type = \"constant\""));
        assert!(text.contains("temperature = 310.0"));
    }
}
