use super::*;

use std::collections::HashMap;
use std::path::PathBuf;

use candle_core::{Device, Tensor};

/// Writes a linear artifact deciding purely on the rating feature:
/// decision = rating - 3.5, so rating >= 4 classifies as Fake.
fn write_rating_threshold_weights(dir: &std::path::Path, input_dim: usize) -> PathBuf {
    let device = Device::Cpu;
    let mut weight = vec![0.0_f32; input_dim];
    weight[0] = 1.0;

    let mut tensors = HashMap::new();
    tensors.insert(
        "classifier.weight".to_string(),
        Tensor::from_vec(weight, (1, input_dim), &device).unwrap(),
    );
    tensors.insert(
        "classifier.bias".to_string(),
        Tensor::from_vec(vec![-3.5_f32], (1,), &device).unwrap(),
    );

    let path = dir.join("classifier.safetensors");
    candle_core::safetensors::save(&tensors, &path).unwrap();
    path
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.input_dim, DEFAULT_INPUT_DIM);
        assert!(!config.testing_stub);
        assert!(config.weights_path.as_os_str().is_empty());
    }

    #[test]
    fn test_stub_config_validates() {
        let config = ClassifierConfig::stub(4);
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_without_stub_rejected() {
        let config = ClassifierConfig {
            testing_stub: false,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_missing_weights_file_rejected() {
        let config = ClassifierConfig::new("/nonexistent/classifier.safetensors", 4);
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::WeightsNotFound { .. })
        ));
    }

    #[test]
    fn test_input_dim_too_small_rejected() {
        let config = ClassifierConfig::stub(2);
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::InvalidConfig { .. })
        ));
    }
}

mod predict_tests {
    use super::*;
    use crate::review::Label;

    #[test]
    fn test_model_backend_decision_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rating_threshold_weights(dir.path(), 4);

        let classifier = ReviewClassifier::load(ClassifierConfig::new(path, 4)).unwrap();
        assert!(!classifier.is_stub());

        // rating 4 -> decision 0.5 -> Fake
        let fake = classifier.predict(&[4.0, 5.0, 0.1, 0.2]).unwrap();
        assert_eq!(fake, Label::Fake);

        // rating 3 -> decision -0.5 -> Real
        let real = classifier.predict(&[3.0, 5.0, 0.1, 0.2]).unwrap();
        assert_eq!(real, Label::Real);
    }

    #[test]
    fn test_model_backend_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_rating_threshold_weights(dir.path(), 4);
        let classifier = ReviewClassifier::load(ClassifierConfig::new(path, 4)).unwrap();

        let features = [4.5, 12.0, -0.3, 0.7];
        let first = classifier.predict(&features).unwrap();
        let second = classifier.predict(&features).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stub_backend_deterministic() {
        let classifier = ReviewClassifier::load(ClassifierConfig::stub(4)).unwrap();
        assert!(classifier.is_stub());

        let features = [3.0, 2.0, 0.5, -0.5];
        let first = classifier.predict(&features).unwrap();
        let second = classifier.predict(&features).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let classifier = ReviewClassifier::load(ClassifierConfig::stub(4)).unwrap();
        let result = classifier.predict(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ClassifierError::DimensionMismatch {
                expected: 4,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_input_dim_accessor() {
        let classifier = ReviewClassifier::load(ClassifierConfig::stub(10)).unwrap();
        assert_eq!(classifier.input_dim(), 10);
    }
}
