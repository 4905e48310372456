//! Sequential execution of the transformation table against one upload.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::editor::{EditError, ImageEditor};
use crate::steps::{TRANSFORMATION_STEPS, TransformationStep};

/// MIME type assumed for everything the edit service returns.
///
/// Fixed policy rather than an observed fact: the service is not asked what
/// format it produced. PNG is assumed because the green screen step can
/// introduce transparency, and every later request and result URI reuses
/// this constant instead of the upload's original MIME type.
pub const GENERATED_MIME_TYPE: &str = "image/png";

/// One completed step, ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `data:<mime>;base64,<payload>` URI, usable directly as an `src`.
    pub src: String,
}

impl GeneratedImage {
    fn from_step(step: &TransformationStep, payload: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: step.name.to_string(),
            description: step.description.to_string(),
            src: format!("data:{GENERATED_MIME_TYPE};base64,{payload}"),
        }
    }
}

/// A single step failed; everything already delivered stands.
#[derive(Debug, Error)]
#[error("step \"{step}\" failed: {source}")]
pub struct PipelineError {
    pub step: &'static str,
    #[source]
    pub source: EditError,
}

/// Runs all seven steps in table order against `payload`.
///
/// The green screen step runs against the original payload and MIME type.
/// Its output is kept for the whole run as the base for every T-pose step,
/// and also seeds the chain cursor that the directional-view steps advance.
/// Each completed step is handed to `on_image` immediately, so partial
/// results survive a mid-run failure. The first failing step aborts the
/// run.
pub async fn run_pipeline<E, F>(
    editor: &E,
    payload: &str,
    mime_type: &str,
    mut on_image: F,
) -> Result<(), PipelineError>
where
    E: ImageEditor,
    F: FnMut(GeneratedImage),
{
    let base_step = &TRANSFORMATION_STEPS[0];
    let green_base = editor
        .edit(payload, mime_type, base_step.prompt)
        .await
        .map_err(|source| PipelineError {
            step: base_step.name,
            source,
        })?;
    on_image(GeneratedImage::from_step(base_step, &green_base));

    let mut cursor = green_base.clone();
    for step in &TRANSFORMATION_STEPS[1..] {
        // T-pose steps reset to the green screen base; only non-T-pose
        // outputs move the cursor forward.
        let input = if step.tpose { &green_base } else { &cursor };
        let output = editor
            .edit(input, GENERATED_MIME_TYPE, step.prompt)
            .await
            .map_err(|source| PipelineError {
                step: step.name,
                source,
            })?;
        on_image(GeneratedImage::from_step(step, &output));
        if !step.tpose {
            cursor = output;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every call and answers with `edited-<n>`, optionally
    /// failing at one call index.
    struct ScriptedEditor {
        calls: RefCell<Vec<(String, String, String)>>,
        fail_at: Option<usize>,
    }

    impl ScriptedEditor {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_at,
            }
        }

        fn inputs(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.0.clone()).collect()
        }
    }

    impl ImageEditor for ScriptedEditor {
        async fn edit(
            &self,
            data: &str,
            mime_type: &str,
            instruction: &str,
        ) -> Result<String, EditError> {
            let mut calls = self.calls.borrow_mut();
            let index = calls.len();
            calls.push((data.to_string(), mime_type.to_string(), instruction.to_string()));
            if self.fail_at == Some(index) {
                Err(EditError::NoImage)
            } else {
                Ok(format!("edited-{index}"))
            }
        }
    }

    async fn collect(editor: &ScriptedEditor) -> Result<Vec<GeneratedImage>, PipelineError> {
        let mut images = Vec::new();
        run_pipeline(editor, "uploaded", "image/jpeg", |image| images.push(image))
            .await
            .map(|()| images)
    }

    #[tokio::test]
    async fn produces_seven_images_in_table_order() {
        let editor = ScriptedEditor::new(None);
        let images = collect(&editor).await.unwrap();

        assert_eq!(images.len(), 7);
        for (image, step) in images.iter().zip(TRANSFORMATION_STEPS.iter()) {
            assert_eq!(image.name, step.name);
            assert_eq!(image.description, step.description);
            assert!(image.src.starts_with("data:image/png;base64,edited-"));
        }

        let ids: Vec<&String> = images.iter().map(|i| &i.id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn first_call_uses_original_payload_and_mime_type() {
        let editor = ScriptedEditor::new(None);
        collect(&editor).await.unwrap();

        let calls = editor.calls.borrow();
        assert_eq!(calls[0].0, "uploaded");
        assert_eq!(calls[0].1, "image/jpeg");
        assert_eq!(calls[0].2, TRANSFORMATION_STEPS[0].prompt);
        for call in calls.iter().skip(1) {
            assert_eq!(call.1, GENERATED_MIME_TYPE);
        }
    }

    #[tokio::test]
    async fn view_steps_chain_and_tpose_steps_reset_to_green_base() {
        let editor = ScriptedEditor::new(None);
        collect(&editor).await.unwrap();

        let inputs = editor.inputs();
        // Directional views compound off the latest view output.
        assert_eq!(inputs[1], "edited-0");
        assert_eq!(inputs[2], "edited-1");
        assert_eq!(inputs[3], "edited-2");
        // All three T-pose steps start over from the green screen base.
        assert_eq!(inputs[4], "edited-0");
        assert_eq!(inputs[5], "edited-0");
        assert_eq!(inputs[6], "edited-0");
    }

    #[tokio::test]
    async fn failure_keeps_earlier_results_and_names_the_step() {
        let editor = ScriptedEditor::new(Some(3));
        let mut images = Vec::new();
        let err = run_pipeline(&editor, "uploaded", "image/jpeg", |image| images.push(image))
            .await
            .unwrap_err();

        assert_eq!(images.len(), 3);
        assert_eq!(err.step, TRANSFORMATION_STEPS[3].name);
        assert_eq!(err.source, EditError::NoImage);
        // Nothing after the failing step was attempted.
        assert_eq!(editor.calls.borrow().len(), 4);
    }

    #[tokio::test]
    async fn configuration_failure_aborts_before_any_result() {
        let editor = ScriptedEditor {
            calls: RefCell::new(Vec::new()),
            fail_at: Some(0),
        };
        let mut images = Vec::new();
        let err = run_pipeline(&editor, "uploaded", "image/jpeg", |image| images.push(image))
            .await
            .unwrap_err();

        assert!(images.is_empty());
        assert_eq!(err.step, TRANSFORMATION_STEPS[0].name);
    }
}
