use anyhow::Result;

/// Interface to a trained personality model.
///
/// The shipped questionnaire is scored by the rule-based engine in
/// [`scoring`](crate::scoring), which operates on raw answers and never
/// consults a model. This trait is the seam for wiring one in: implement
/// it over a feature vector derived from answers and call it from your
/// own code.
pub trait Predictor {
    type Output;

    /// Predict a label or score set from a numeric feature vector.
    fn predict(&self, features: &[f64]) -> Result<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Toy model: positive mean reads as "extravert".
    struct MeanSign;

    impl Predictor for MeanSign {
        type Output = &'static str;

        fn predict(&self, features: &[f64]) -> Result<Self::Output> {
            if features.is_empty() {
                anyhow::bail!("empty feature vector");
            }
            let mean: f64 = features.iter().sum::<f64>() / features.len() as f64;
            Ok(if mean > 0.0 { "extravert" } else { "introvert" })
        }
    }

    #[test]
    fn test_predictor_impl() {
        let model = MeanSign;
        assert_eq!(model.predict(&[1.0, 2.0]).unwrap(), "extravert");
        assert_eq!(model.predict(&[-1.0, 0.0]).unwrap(), "introvert");
    }

    #[test]
    fn test_predictor_error_path() {
        let model = MeanSign;
        assert!(model.predict(&[]).is_err());
    }
}
