//! Single-prediction controller tests against a backend double.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pneumoscope::{
    ClassProbabilities, ImageFile, Label, ModelMetrics, Notice, Notifier, Pneumoscope,
    PneumoscopeError, PredictionBackend, PredictionResult, Result,
};

// ============================================================================
// Test doubles
// ============================================================================

struct FixedBackend {
    response: PredictionResult,
    fail: bool,
}

impl FixedBackend {
    fn succeeding() -> Self {
        Self {
            response: PredictionResult {
                predicted_class: Label::Pneumonia,
                predicted_confidence: 0.87,
                class_probabilities: ClassProbabilities {
                    normal: 0.13,
                    pneumonia: 0.87,
                },
            },
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }
}

#[async_trait]
impl PredictionBackend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn classify(&self, _image: &ImageFile) -> Result<PredictionResult> {
        if self.fail {
            return Err(PneumoscopeError::Http("connection refused".to_string()));
        }
        Ok(self.response.clone())
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics> {
        Err(PneumoscopeError::Http("not available".to_string()))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

fn xray() -> ImageFile {
    ImageFile::new("chest.png", "image/png", b"fake png bytes".to_vec())
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn predict_stores_the_backend_result_field_for_field() {
    let notifier = Arc::new(RecordingNotifier::default());
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::succeeding()))
        .notifier(notifier.clone())
        .build();
    let mut single = workbench.single();

    single.select_file(xray()).unwrap();
    single.predict().await.unwrap();

    let result = single.result().expect("result should be stored");
    assert_eq!(result.predicted_class, Label::Pneumonia);
    assert!((result.predicted_confidence - 0.87).abs() < 1e-6);
    assert!((result.class_probabilities.normal - 0.13).abs() < 1e-6);
    assert!((result.class_probabilities.pneumonia - 0.87).abs() < 1e-6);

    assert_eq!(
        notifier.notices(),
        vec![Notice::AnalysisComplete(Label::Pneumonia)]
    );
    assert!(!single.is_loading());
}

#[tokio::test]
async fn predict_without_a_file_fails_fast() {
    let notifier = Arc::new(RecordingNotifier::default());
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::succeeding()))
        .notifier(notifier.clone())
        .build();
    let mut single = workbench.single();

    let result = single.predict().await;

    assert!(matches!(result, Err(PneumoscopeError::NoFileSelected)));
    assert_eq!(notifier.notices(), vec![Notice::NoFileSelected]);
}

#[tokio::test]
async fn failed_prediction_clears_the_result_and_notifies() {
    let notifier = Arc::new(RecordingNotifier::default());
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::failing()))
        .notifier(notifier.clone())
        .build();
    let mut single = workbench.single();

    single.select_file(xray()).unwrap();
    let result = single.predict().await;

    assert!(result.is_err());
    assert!(single.result().is_none());
    assert!(notifier.notices().contains(&Notice::AnalysisFailed));
    assert!(!single.is_loading());
}

#[tokio::test]
async fn selecting_a_non_image_is_rejected() {
    let notifier = Arc::new(RecordingNotifier::default());
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::succeeding()))
        .notifier(notifier.clone())
        .build();
    let mut single = workbench.single();

    let result = single.select_file(ImageFile::new("notes.txt", "text/plain", vec![1]));

    assert!(matches!(result, Err(PneumoscopeError::InvalidInput(_))));
    assert!(single.selected_file().is_none());
    assert_eq!(notifier.notices(), vec![Notice::NoValidImages]);
}

#[tokio::test]
async fn selecting_a_new_file_discards_the_prior_result() {
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::succeeding()))
        .notifier(Arc::new(RecordingNotifier::default()))
        .build();
    let mut single = workbench.single();

    single.select_file(xray()).unwrap();
    single.predict().await.unwrap();
    assert!(single.result().is_some());

    single
        .select_file(ImageFile::new("other.png", "image/png", vec![2]))
        .unwrap();
    assert!(single.result().is_none());
    assert_eq!(single.selected_file().unwrap().name, "other.png");
    assert_eq!(single.preview().unwrap().data(), &[2]);
}

#[tokio::test]
async fn reset_clears_file_preview_and_result() {
    let workbench = Pneumoscope::builder()
        .backend(Arc::new(FixedBackend::succeeding()))
        .notifier(Arc::new(RecordingNotifier::default()))
        .build();
    let mut single = workbench.single();

    single.select_file(xray()).unwrap();
    single.predict().await.unwrap();

    single.reset();

    assert!(single.selected_file().is_none());
    assert!(single.preview().is_none());
    assert!(single.result().is_none());
}
