//! Multinomial Naive Bayes restricted to classes 0 and 1.
//!
//! Word likelihoods use add-one smoothing over the vocabulary size, applied
//! per class:
//!
//! ```text
//! log P(w | c) = log((count(w, c) + 1) / (count(c) + |V|))
//! ```
//!
//! and a row `d` is scored as `log P(c) + d . log P(. | c)`.

use corpus_data_clean::{FeatureMatrix, LabelVector};
use log::debug;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;

use crate::error::{ClassifierError, Result};
use crate::Classifier;

/// Class priors and per-class log word likelihoods, one per vocabulary index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesParameters {
    pub p0: f64,
    pub p1: f64,
    pub wc0: Vec<f64>,
    pub wc1: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    parameters: Option<NaiveBayesParameters>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.parameters.is_some()
    }

    pub fn parameters(&self) -> Option<&NaiveBayesParameters> {
        self.parameters.as_ref()
    }

    /// `[score for class 0, score for class 1]` for every row of `x`.
    pub fn predict_log_scores(&self, x: &FeatureMatrix) -> Result<Vec<[f64; 2]>> {
        let parameters = self.parameters.as_ref().ok_or_else(|| {
            ClassifierError::InvalidInput("predict called before fit".to_string())
        })?;

        let (nrows, ncols) = x.shape();
        if ncols != parameters.wc0.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "model was fitted on {} columns but got {ncols}",
                parameters.wc0.len()
            )));
        }

        let log_p0 = parameters.p0.ln();
        let log_p1 = parameters.p1.ln();

        Ok((0..nrows)
            .map(|row| {
                let (dot0, dot1) = (0..ncols).fold((0., 0.), |(dot0, dot1), col| {
                    let count = *x.get((row, col));
                    (
                        dot0 + count * parameters.wc0[col],
                        dot1 + count * parameters.wc1[col],
                    )
                });
                [log_p0 + dot0, log_p1 + dot1]
            })
            .collect())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn log_likelihoods(x: &FeatureMatrix, y: &[u8], class: u8) -> Vec<f64> {
    let ncols = x.shape().1;
    let mut column_totals = vec![0.; ncols];

    for (row, _) in y.iter().enumerate().filter(|(_, label)| **label == class) {
        for (col, total) in column_totals.iter_mut().enumerate() {
            *total += *x.get((row, col));
        }
    }

    let word_count = column_totals.iter().sum::<f64>();
    let denominator = word_count + ncols as f64;

    column_totals
        .into_iter()
        .map(|count| ((count + 1.) / denominator).ln())
        .collect()
}

impl Classifier for NaiveBayes {
    fn fit(&mut self, x: &FeatureMatrix, y: &[u8]) -> Result<()> {
        let nrows = x.shape().0;
        if nrows != y.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "{nrows} rows but {} labels",
                y.len()
            )));
        }
        if y.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "cannot fit on zero documents".to_string(),
            ));
        }
        if let Some(label) = y.iter().find(|label| **label > 1) {
            return Err(ClassifierError::InvalidInput(format!(
                "labels must be 0 or 1, found {label}"
            )));
        }

        let positives = y.iter().filter(|label| **label == 1).count();
        let p1 = positives as f64 / y.len() as f64;
        let p0 = 1. - p1;

        let parameters = NaiveBayesParameters {
            p0,
            p1,
            wc0: log_likelihoods(x, y, 0),
            wc1: log_likelihoods(x, y, 1),
        };
        debug!(
            "fitted naive bayes on {} documents, P(0)={p0:.4} P(1)={p1:.4}",
            y.len()
        );
        self.parameters = Some(parameters);
        Ok(())
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<LabelVector> {
        Ok(self
            .predict_log_scores(x)?
            .into_iter()
            // ties go to class 0
            .map(|[score0, score1]| u8::from(score1 > score0))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_cmp::approx_eq;
    use smartcore::linalg::basic::matrix::DenseMatrix;

    fn matrix(rows: &[&[f64]]) -> FeatureMatrix {
        DenseMatrix::from_2d_vec(&rows.iter().map(|row| row.to_vec()).collect())
    }

    /// Columns: unknown, alpha, beta.
    fn separable() -> (FeatureMatrix, Vec<u8>) {
        let x = matrix(&[
            &[0., 3., 0.],
            &[0., 1., 0.],
            &[0., 0., 2.],
            &[0., 0., 5.],
        ]);
        (x, vec![0, 0, 1, 1])
    }

    #[test]
    fn test_separable_training_set() {
        let (x, y) = separable();
        let mut model = NaiveBayes::new();
        model.fit(&x, &y).expect("fit");
        assert_eq!(model.predict(&x).expect("predict"), y);
    }

    #[test]
    fn test_parameters() {
        let (x, y) = separable();
        let mut model = NaiveBayes::new();
        model.fit(&x, &y).expect("fit");
        let parameters = model.parameters().expect("fitted");

        assert!(approx_eq!(f64, parameters.p0, 0.5));
        assert!(approx_eq!(f64, parameters.p1, 0.5));
        assert!(approx_eq!(f64, parameters.p0 + parameters.p1, 1.));
        // class 0 holds 4 words: alpha 4 times
        assert!(approx_eq!(f64, parameters.wc0[0], (1f64 / 7.).ln()));
        assert!(approx_eq!(f64, parameters.wc0[1], (5f64 / 7.).ln()));
        assert!(approx_eq!(f64, parameters.wc0[2], (1f64 / 7.).ln()));
        // class 1 holds 7 words: beta 7 times
        assert!(approx_eq!(f64, parameters.wc1[1], (1f64 / 10.).ln()));
        assert!(approx_eq!(f64, parameters.wc1[2], (8f64 / 10.).ln()));
    }

    #[test]
    fn test_single_class() {
        let x = matrix(&[&[0., 2., 1.], &[1., 0., 1.]]);
        let mut model = NaiveBayes::new();
        model.fit(&x, &[0, 0]).expect("fit");
        let parameters = model.parameters().expect("fitted");

        assert_eq!(parameters.p1, 0.);
        assert_eq!(parameters.p0, 1.);
        let uniform = (1f64 / 3.).ln();
        assert!(parameters.wc1.iter().all(|w| approx_eq!(f64, *w, uniform)));
        assert_eq!(model.predict(&x).expect("predict"), vec![0, 0]);
    }

    #[test]
    fn test_tie_goes_to_class_zero() {
        let x = matrix(&[&[0., 1., 0.], &[0., 0., 1.]]);
        let mut model = NaiveBayes::new();
        model.fit(&x, &[0, 1]).expect("fit");
        // equal priors and a row with no words scores the same for both classes
        assert_eq!(model.predict(&matrix(&[&[0., 0., 0.]])).expect("predict"), vec![0]);
    }

    #[test]
    fn test_refit_replaces_parameters() {
        let (x, y) = separable();
        let mut model = NaiveBayes::new();
        model.fit(&x, &y).expect("fit");
        let first = model.parameters().cloned().expect("fitted");

        model.fit(&x, &[1, 1, 0, 0]).expect("refit");
        let second = model.parameters().expect("fitted");
        assert_eq!(first.wc0, second.wc1);
        assert_eq!(first.wc1, second.wc0);
        assert_eq!(model.predict(&x).expect("predict"), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_predict_before_fit() {
        let (x, _) = separable();
        let err = NaiveBayes::new().predict(&x).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_fit_input() {
        let (x, _) = separable();
        let mut model = NaiveBayes::new();
        assert!(matches!(
            model.fit(&x, &[0, 1]),
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(matches!(
            model.fit(&x, &[0, 1, 2, 1]),
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_column_mismatch() {
        let (x, y) = separable();
        let mut model = NaiveBayes::new();
        model.fit(&x, &y).expect("fit");
        let err = model.predict(&matrix(&[&[0., 1.]])).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let (x, y) = separable();
        let mut model = NaiveBayes::new();
        model.fit(&x, &y).expect("fit");

        let restored = NaiveBayes::from_json(&model.to_json().expect("serialize")).expect("deserialize");
        assert_eq!(restored.predict(&x).expect("predict"), y);
        assert!(NaiveBayes::from_json("{\"parameters\": 3}").is_err());
    }
}
