//! Seams to the external collaborators of the pipeline.

pub mod completion;
pub mod renderer;
pub mod store;

pub use completion::{CompletionRequest, ICompletionService, ResponseFormat};
pub use renderer::IChartRenderer;
pub use store::IQueryStore;
