pub mod editor;
pub mod pipeline;
pub mod session;
pub mod steps;

pub use editor::{EditError, ImageEditor};
pub use pipeline::{GENERATED_MIME_TYPE, GeneratedImage, PipelineError, run_pipeline};
pub use session::{GenerationSession, SessionError};
pub use steps::{TRANSFORMATION_STEPS, TransformationStep};
