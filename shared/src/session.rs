//! State for one upload and the run driven from it.

use thiserror::Error;

use crate::pipeline::GeneratedImage;

/// User-correctable reasons a run cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No image selected. Upload an image before generating.")]
    NoImageSelected,
    #[error("A generation run is already in progress.")]
    RunInProgress,
}

/// Holds the single active upload, the ordered results of the current run
/// and the observable run state the view renders from.
///
/// Generic over the upload handle `S` so the browser stores a `gloo` file
/// while tests store plain values. All mutation happens on the one logical
/// thread, in the order steps complete.
#[derive(Debug)]
pub struct GenerationSession<S> {
    source: Option<S>,
    results: Vec<GeneratedImage>,
    in_progress: bool,
    current_step: Option<String>,
    error: Option<String>,
}

impl<S> GenerationSession<S> {
    pub fn new() -> Self {
        Self {
            source: None,
            results: Vec::new(),
            in_progress: false,
            current_step: None,
            error: None,
        }
    }

    /// Replaces the active upload. Prior results and error are dropped
    /// immediately, before any processing starts.
    pub fn select(&mut self, source: S) {
        self.source = Some(source);
        self.results.clear();
        self.error = None;
    }

    /// Drops the upload along with everything derived from it.
    pub fn clear(&mut self) {
        self.source = None;
        self.results.clear();
        self.current_step = None;
        self.error = None;
    }

    /// Starts a run, handing back the upload to decode. Rejected while a
    /// run is active and when nothing is selected; neither rejection
    /// mutates the session.
    pub fn begin(&mut self) -> Result<S, SessionError>
    where
        S: Clone,
    {
        if self.in_progress {
            return Err(SessionError::RunInProgress);
        }
        let source = self
            .source
            .clone()
            .ok_or(SessionError::NoImageSelected)?;
        self.results.clear();
        self.error = None;
        self.current_step = None;
        self.in_progress = true;
        Ok(source)
    }

    /// Appends a completed step's image. Results arrive one at a time but
    /// stay in step order because steps run strictly sequentially.
    pub fn push(&mut self, image: GeneratedImage) {
        self.results.push(image);
    }

    pub fn set_current_step(&mut self, label: impl Into<String>) {
        self.current_step = Some(label.into());
    }

    /// Ends the run. The in-progress flag and step label are cleared on
    /// every exit path so the view can never get stuck loading.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        self.in_progress = false;
        self.current_step = None;
        if let Err(message) = outcome {
            self.error = Some(message);
        }
    }

    /// Records an error that did not come from a run (e.g. a rejected
    /// file selection).
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn results(&self) -> &[GeneratedImage] {
        &self.results
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn current_step(&self) -> Option<&str> {
        self.current_step.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<S> Default for GenerationSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> GeneratedImage {
        GeneratedImage {
            id: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            src: String::new(),
        }
    }

    #[test]
    fn begin_without_upload_is_rejected() {
        let mut session: GenerationSession<&str> = GenerationSession::new();
        assert_eq!(session.begin(), Err(SessionError::NoImageSelected));
        assert!(!session.in_progress());
    }

    #[test]
    fn begin_while_running_is_rejected() {
        let mut session = GenerationSession::new();
        session.select("upload");
        assert_eq!(session.begin(), Ok("upload"));
        assert_eq!(session.begin(), Err(SessionError::RunInProgress));
        assert!(session.in_progress());
    }

    #[test]
    fn select_clears_prior_results_and_error() {
        let mut session = GenerationSession::new();
        session.select("first");
        session.push(image("Green Screen"));
        session.set_error("step \"Back View\" failed");

        session.select("second");
        assert!(session.results().is_empty());
        assert!(session.error().is_none());
        assert_eq!(session.source(), Some(&"second"));
    }

    #[test]
    fn rerun_starts_from_an_empty_collection() {
        let mut session = GenerationSession::new();
        session.select("upload");

        session.begin().unwrap();
        for i in 0..7 {
            session.push(image(&format!("step-{i}")));
        }
        session.finish(Ok(()));
        assert_eq!(session.results().len(), 7);

        session.begin().unwrap();
        assert!(session.results().is_empty());
        session.push(image("fresh"));
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn finish_always_clears_progress_state() {
        let mut session = GenerationSession::new();
        session.select("upload");

        session.begin().unwrap();
        session.set_current_step("Side View");
        session.finish(Err("step \"Side View\" failed: transport".to_string()));

        assert!(!session.in_progress());
        assert!(session.current_step().is_none());
        assert_eq!(
            session.error(),
            Some("step \"Side View\" failed: transport")
        );

        // A failed run does not block the next one.
        assert!(session.begin().is_ok());
        assert!(session.error().is_none());
    }
}
