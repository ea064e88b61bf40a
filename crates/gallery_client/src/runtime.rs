use std::time::{Duration, Instant};

use gallery_core::{update, Effect, GalleryState, GalleryViewModel, Msg};
use gallery_logging::gallery_warn;

use crate::debounce::{near_bottom, ScrollDebouncer, SCROLL_DEBOUNCE};
use crate::dom::GalleryDom;
use crate::storage::OrderStore;

/// Simulated network latency between scheduling a batch and appending it.
pub const BATCH_LATENCY: Duration = Duration::from_millis(500);

/// One-shot timer for the simulated batch latency. The `LoadingBatch` phase
/// gate guarantees at most one pending schedule at a time.
#[derive(Debug)]
pub struct BatchTimer {
    latency: Duration,
    due: Option<Instant>,
}

impl BatchTimer {
    pub fn new(latency: Duration) -> Self {
        Self { latency, due: None }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.latency);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Event-driven client runtime: owns the session state and executes core
/// effects against the DOM container and the order store. All entry points
/// take an injected `Instant` so the cooperative timing (debounce window,
/// batch latency) stays deterministic under test.
pub struct GalleryRuntime<D: GalleryDom, S: OrderStore> {
    state: GalleryState,
    dom: D,
    store: S,
    debouncer: ScrollDebouncer,
    timer: BatchTimer,
}

impl<D: GalleryDom, S: OrderStore> GalleryRuntime<D, S> {
    pub fn new(source: Vec<String>, batch_size: usize, dom: D, store: S) -> Self {
        Self {
            state: GalleryState::new(source, batch_size),
            dom,
            store,
            debouncer: ScrollDebouncer::new(SCROLL_DEBOUNCE),
            timer: BatchTimer::new(BATCH_LATENCY),
        }
    }

    /// Replaces the batch latency; tests shorten it to keep tick sequences
    /// readable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.timer = BatchTimer::new(latency);
        self
    }

    /// Page-ready entry point: consults the order store before the first
    /// default batch.
    pub fn boot(&mut self, now: Instant) {
        self.dispatch(now, Msg::PageReady);
    }

    /// Raw scroll notification; coalesced by the debouncer and evaluated on
    /// the next `tick` past the window.
    pub fn on_scroll(&mut self, now: Instant, distance_to_bottom: f64) {
        self.debouncer.observe(now, distance_to_bottom);
    }

    /// End-of-drag notification from the reorder capability. The committed
    /// order comes from rescanning the container, not from state.
    pub fn on_drag_end(&mut self, now: Instant) {
        let order = self.dom.scan_order();
        self.dispatch(now, Msg::ReorderCommitted(order));
    }

    /// Broken-image notification for the element at `index`.
    pub fn on_image_error(&mut self, now: Instant, index: usize) {
        self.dispatch(now, Msg::ImageLoadFailed { index });
    }

    /// Cooperative scheduler step: fires the debounced scroll evaluation and
    /// any due batch append.
    pub fn tick(&mut self, now: Instant) {
        if let Some(distance) = self.debouncer.poll(now) {
            if near_bottom(distance) {
                self.dispatch(now, Msg::ScrollNearBottom);
            }
        }
        if self.timer.poll(now) {
            self.dispatch(now, Msg::BatchDelayElapsed);
        }
    }

    pub fn dispatch(&mut self, now: Instant, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(now, effect);
        }
    }

    fn run_effect(&mut self, now: Instant, effect: Effect) {
        match effect {
            Effect::ReadSavedOrder => {
                let saved = self.load_saved_order();
                self.dispatch(now, Msg::SavedOrderLoaded(saved));
            }
            Effect::ShowLoadingIndicator => self.dom.set_loading_indicator(true),
            Effect::HideLoadingIndicator => self.dom.set_loading_indicator(false),
            Effect::ScheduleBatchAppend => self.timer.schedule(now),
            Effect::AppendImages { urls } => self.dom.append_images(&urls),
            Effect::RebuildGallery { urls } => self.dom.rebuild(&urls),
            Effect::RelabelPositions => self.dom.renumber(),
            Effect::HideImage { index } => self.dom.hide_image(index),
            Effect::WriteSavedOrder { order } => {
                if let Err(err) = self.store.save(&order) {
                    gallery_warn!("Failed to persist gallery order: {err}");
                }
            }
        }
    }

    /// Corrupt or unreadable persisted state is treated as absent; the
    /// standard batch path proceeds.
    fn load_saved_order(&mut self) -> Option<Vec<String>> {
        match self.store.load() {
            Ok(saved) => saved,
            Err(err) => {
                gallery_warn!("Ignoring persisted order: {err}");
                None
            }
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> GalleryViewModel {
        self.state.view()
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
