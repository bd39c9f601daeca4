use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Probability '{name}' must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error(
        "Move probabilities must leave room for local moves: global jump {global_jump} + valley move {valley_move} exceeds 1"
    )]
    ProbabilityMassExceeded { global_jump: f64, valley_move: f64 },
    #[error("local_step_max must be at least 1")]
    ZeroLocalStep,
    #[error("Tolerance parameter '{name}' must be non-negative, got {value}")]
    NegativeTolerance { name: &'static str, value: f64 },
}

/// Tunable parameters of the inner engine's random walk and of its private
/// stability belief.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineParams {
    /// Largest per-axis displacement of a local move.
    pub local_step_max: u32,
    /// Probability per step of a valley-seeking move.
    pub valley_move_prob: f64,
    /// Probability per step of a global jump.
    pub global_jump_prob: f64,
    /// Base half-width of the engine's self-claimed stability band.
    pub base_tolerance: f64,
    /// Additional band half-width per unit of proton count.
    pub tolerance_slope: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            local_step_max: 2,
            valley_move_prob: 0.15,
            global_jump_prob: 0.05,
            base_tolerance: 2.0,
            tolerance_slope: 0.10,
        }
    }
}

impl EngineParams {
    pub fn builder() -> EngineParamsBuilder {
        EngineParamsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("valley_move_prob", self.valley_move_prob),
            ("global_jump_prob", self.global_jump_prob),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.global_jump_prob + self.valley_move_prob > 1.0 {
            return Err(ConfigError::ProbabilityMassExceeded {
                global_jump: self.global_jump_prob,
                valley_move: self.valley_move_prob,
            });
        }
        if self.local_step_max == 0 {
            return Err(ConfigError::ZeroLocalStep);
        }
        for (name, value) in [
            ("base_tolerance", self.base_tolerance),
            ("tolerance_slope", self.tolerance_slope),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeTolerance { name, value });
            }
        }
        Ok(())
    }
}

/// Builder for [`EngineParams`]; unset fields fall back to the defaults.
#[derive(Debug, Default)]
pub struct EngineParamsBuilder {
    local_step_max: Option<u32>,
    valley_move_prob: Option<f64>,
    global_jump_prob: Option<f64>,
    base_tolerance: Option<f64>,
    tolerance_slope: Option<f64>,
}

impl EngineParamsBuilder {
    pub fn local_step_max(mut self, magnitude: u32) -> Self {
        self.local_step_max = Some(magnitude);
        self
    }
    pub fn valley_move_prob(mut self, probability: f64) -> Self {
        self.valley_move_prob = Some(probability);
        self
    }
    pub fn global_jump_prob(mut self, probability: f64) -> Self {
        self.global_jump_prob = Some(probability);
        self
    }
    pub fn base_tolerance(mut self, tolerance: f64) -> Self {
        self.base_tolerance = Some(tolerance);
        self
    }
    pub fn tolerance_slope(mut self, slope: f64) -> Self {
        self.tolerance_slope = Some(slope);
        self
    }

    pub fn build(self) -> Result<EngineParams, ConfigError> {
        let defaults = EngineParams::default();
        let params = EngineParams {
            local_step_max: self.local_step_max.unwrap_or(defaults.local_step_max),
            valley_move_prob: self.valley_move_prob.unwrap_or(defaults.valley_move_prob),
            global_jump_prob: self.global_jump_prob.unwrap_or(defaults.global_jump_prob),
            base_tolerance: self.base_tolerance.unwrap_or(defaults.base_tolerance),
            tolerance_slope: self.tolerance_slope.unwrap_or(defaults.tolerance_slope),
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_tuning() {
        let params = EngineParams::default();
        assert_eq!(params.local_step_max, 2);
        assert_eq!(params.valley_move_prob, 0.15);
        assert_eq!(params.global_jump_prob, 0.05);
        assert_eq!(params.base_tolerance, 2.0);
        assert_eq!(params.tolerance_slope, 0.10);
    }

    #[test]
    fn builder_with_no_overrides_yields_defaults() {
        let params = EngineParams::builder().build().unwrap();
        assert_eq!(params, EngineParams::default());
    }

    #[test]
    fn builder_applies_overrides() {
        let params = EngineParams::builder()
            .local_step_max(3)
            .global_jump_prob(0.2)
            .build()
            .unwrap();
        assert_eq!(params.local_step_max, 3);
        assert_eq!(params.global_jump_prob, 0.2);
        assert_eq!(params.valley_move_prob, 0.15);
    }

    #[test]
    fn builder_rejects_out_of_range_probability() {
        let err = EngineParams::builder()
            .valley_move_prob(1.5)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ProbabilityOutOfRange {
                name: "valley_move_prob",
                value: 1.5
            }
        );
    }

    #[test]
    fn builder_rejects_probability_mass_over_one() {
        let err = EngineParams::builder()
            .valley_move_prob(0.7)
            .global_jump_prob(0.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ProbabilityMassExceeded { .. }));
    }

    #[test]
    fn builder_rejects_zero_local_step() {
        let err = EngineParams::builder().local_step_max(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroLocalStep);
    }

    #[test]
    fn builder_rejects_negative_tolerance() {
        let err = EngineParams::builder()
            .tolerance_slope(-0.1)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeTolerance { .. }));
    }

    #[test]
    fn params_deserialize_from_partial_toml() {
        let params: EngineParams =
            toml::from_str("valley_move_prob = 0.25\nlocal_step_max = 4\n").unwrap();
        assert_eq!(params.valley_move_prob, 0.25);
        assert_eq!(params.local_step_max, 4);
        assert_eq!(params.global_jump_prob, 0.05);
    }
}
