//! Gallery core: pure client-side state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{GalleryState, ImageSlot, LoadPhase, DEFAULT_BATCH_SIZE};
pub use update::update;
pub use view_model::{GalleryViewModel, ImageRowView};
