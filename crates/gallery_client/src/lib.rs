//! Gallery client: headless runtime that executes `gallery_core` effects
//! against abstracted browser boundaries (DOM container, local order store,
//! scroll debouncer and batch timer).
mod debounce;
mod dom;
mod runtime;
mod storage;

pub use debounce::{near_bottom, ScrollDebouncer, NEAR_BOTTOM_PX, SCROLL_DEBOUNCE};
pub use dom::{DomImage, GalleryDom, HeadlessDom};
pub use runtime::{BatchTimer, GalleryRuntime, BATCH_LATENCY};
pub use storage::{FileOrderStore, MemoryOrderStore, OrderStore, StoreError, ORDER_STORAGE_KEY};
