//! Simulated stacking ensemble: three fixed base models and a weighted-average
//! meta-learner.
//!
//! Everything here is a pure function over `Copy` values. Callers own range
//! enforcement for samples and weights; the only rejected input is a weight
//! triple whose sum is zero or not finite, which would make the weighted
//! average undefined.

use thiserror::Error;

/// Number of simulated base models feeding the meta-learner.
pub const BASE_MODEL_COUNT: usize = 3;

/// Affine description of a simulated base model: `sample * slope + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseModel {
    /// Display name used by the UI and CLI.
    pub name: &'static str,
    pub slope: f64,
    pub intercept: f64,
}

impl BaseModel {
    /// Apply the model to a single sample.
    pub fn predict(&self, sample: f64) -> f64 {
        sample * self.slope + self.intercept
    }
}

/// The three fixed base models, in weight order.
pub const BASE_MODELS: [BaseModel; BASE_MODEL_COUNT] = [
    BaseModel {
        name: "Base 1",
        slope: 0.7,
        intercept: 0.2,
    },
    BaseModel {
        name: "Base 2",
        slope: 0.5,
        intercept: 0.4,
    },
    BaseModel {
        name: "Base 3",
        slope: 0.9,
        intercept: -0.1,
    },
];

/// Relative trust given to each base model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightVector(pub [f64; BASE_MODEL_COUNT]);

impl WeightVector {
    pub const fn new(w0: f64, w1: f64, w2: f64) -> Self {
        Self([w0, w1, w2])
    }

    /// Equal trust in every base model.
    pub const fn uniform() -> Self {
        Self([1.0; BASE_MODEL_COUNT])
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Return a copy with one weight replaced; out-of-range indices leave it unchanged.
    pub fn with(self, index: usize, value: f64) -> Self {
        let mut weights = self.0;
        if let Some(slot) = weights.get_mut(index) {
            *slot = value;
        }
        Self(weights)
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Outputs of the three base models for one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasePredictions(pub [f64; BASE_MODEL_COUNT]);

impl BasePredictions {
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Errors raised by the meta-learner combination step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StackingError {
    /// The weights sum to zero or a non-finite value, so the weighted average is undefined.
    ///
    /// Finite weights whose sum overflows to infinity land here too; `sum` then
    /// carries the overflowed value.
    #[error("meta-learner weights sum to {sum}; weighted average is undefined")]
    InvalidWeightSum { sum: f64 },
}

/// Run every base model on `sample`. Total over the reals.
pub fn compute_base_predictions(sample: f64) -> BasePredictions {
    BasePredictions(BASE_MODELS.map(|model| model.predict(sample)))
}

/// Combine base predictions as a weighted arithmetic mean.
pub fn compute_meta_prediction(
    base: BasePredictions,
    weights: WeightVector,
) -> Result<f64, StackingError> {
    let sum = weights.sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(StackingError::InvalidWeightSum { sum });
    }
    let weighted: f64 = base
        .0
        .iter()
        .zip(weights.0.iter())
        .map(|(prediction, weight)| prediction * weight)
        .sum();
    Ok(weighted / sum)
}

/// Base predictions plus the meta step result for one sample/weight pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackingOutcome {
    pub base: BasePredictions,
    pub meta: Result<f64, StackingError>,
}

/// Run both steps, keeping the base predictions even when the meta step fails.
pub fn evaluate(sample: f64, weights: WeightVector) -> StackingOutcome {
    let base = compute_base_predictions(sample);
    StackingOutcome {
        base,
        meta: compute_meta_prediction(base, weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn midpoint_with_uniform_weights() {
        let base = compute_base_predictions(0.5);
        assert_close(base.0[0], 0.55);
        assert_close(base.0[1], 0.65);
        assert_close(base.0[2], 0.35);
        let meta = compute_meta_prediction(base, WeightVector::uniform()).unwrap();
        assert_close(meta, 0.516_666_666_666_666_7);
    }

    #[test]
    fn zero_sample_with_uniform_weights() {
        let base = compute_base_predictions(0.0);
        assert_close(base.0[0], 0.2);
        assert_close(base.0[1], 0.4);
        assert_close(base.0[2], -0.1);
        let meta = compute_meta_prediction(base, WeightVector::uniform()).unwrap();
        assert_close(meta, 0.166_666_666_666_666_7);
    }

    #[test]
    fn skewed_weights_ignore_zero_weighted_model() {
        let base = compute_base_predictions(1.0);
        assert_close(base.0[0], 0.9);
        assert_close(base.0[1], 0.9);
        assert_close(base.0[2], 0.8);
        let meta = compute_meta_prediction(base, WeightVector::new(2.0, 0.0, 1.0)).unwrap();
        assert_close(meta, 2.6 / 3.0);
    }

    #[test]
    fn zero_weight_sum_is_rejected() {
        let base = compute_base_predictions(0.5);
        let err = compute_meta_prediction(base, WeightVector::new(0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, StackingError::InvalidWeightSum { sum: 0.0 });
    }

    #[test]
    fn cancelling_weights_are_rejected() {
        let base = compute_base_predictions(0.5);
        let result = compute_meta_prediction(base, WeightVector::new(1.0, -1.0, 0.0));
        assert!(matches!(result, Err(StackingError::InvalidWeightSum { .. })));
    }

    #[test]
    fn nan_weight_is_rejected() {
        let base = compute_base_predictions(0.5);
        let result = compute_meta_prediction(base, WeightVector::new(f64::NAN, 1.0, 1.0));
        assert!(matches!(result, Err(StackingError::InvalidWeightSum { .. })));
    }

    #[test]
    fn overflowing_weight_sum_is_rejected() {
        let base = compute_base_predictions(0.5);
        let err = compute_meta_prediction(base, WeightVector::new(f64::MAX, f64::MAX, 0.0))
            .unwrap_err();
        assert_eq!(err, StackingError::InvalidWeightSum { sum: f64::INFINITY });
    }

    #[test]
    fn evaluate_keeps_base_rows_when_meta_fails() {
        let outcome = evaluate(0.5, WeightVector::new(0.0, 0.0, 0.0));
        assert_eq!(outcome.base, compute_base_predictions(0.5));
        assert!(outcome.meta.is_err());
    }

    #[test]
    fn weight_replacement_ignores_out_of_range_index() {
        let weights = WeightVector::uniform();
        assert_eq!(weights.with(1, 0.5), WeightVector::new(1.0, 0.5, 1.0));
        assert_eq!(weights.with(3, 0.5), weights);
    }

    fn within(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= EPS * (1.0 + expected.abs())
    }

    proptest! {
        #[test]
        fn base_predictions_follow_affine_formulas(sample in -1.0e6f64..1.0e6) {
            let base = compute_base_predictions(sample);
            prop_assert!(within(base.0[0], sample * 0.7 + 0.2));
            prop_assert!(within(base.0[1], sample * 0.5 + 0.4));
            prop_assert!(within(base.0[2], sample * 0.9 - 0.1));
        }

        #[test]
        fn meta_stays_within_base_bounds_for_positive_weights(
            sample in -1.0e6f64..1.0e6,
            w0 in 0.0f64..=2.0,
            w1 in 0.0f64..=2.0,
            w2 in 0.0f64..=2.0,
        ) {
            let weights = WeightVector::new(w0, w1, w2);
            prop_assume!(weights.sum() > 1e-6);
            let base = compute_base_predictions(sample);
            let meta = compute_meta_prediction(base, weights).unwrap();
            let slack = EPS * (1.0 + base.min().abs().max(base.max().abs()));
            prop_assert!(meta >= base.min() - slack && meta <= base.max() + slack);
        }

        #[test]
        fn repeated_evaluation_is_identical(
            sample in -1.0e6f64..1.0e6,
            w0 in -2.0f64..=2.0,
            w1 in -2.0f64..=2.0,
            w2 in -2.0f64..=2.0,
        ) {
            let weights = WeightVector::new(w0, w1, w2);
            prop_assert_eq!(evaluate(sample, weights), evaluate(sample, weights));
        }
    }
}
