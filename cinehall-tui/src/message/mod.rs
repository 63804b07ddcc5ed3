//! Message layer: the bridge between events and state updates.
//!
//! Every user action and every async completion is expressed as a message;
//! the update layer consumes messages to mutate the model. Keyboard events
//! are translated by the event layer, backend completions arrive through
//! the main loop's channel as [`DataMessage`]s.

mod app;
mod content;
mod data;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use data::{DataMessage, SaveMode};
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
