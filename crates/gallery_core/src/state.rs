use crate::view_model::{GalleryViewModel, ImageRowView};

/// Number of images realized per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Loader phase. `LoadingBatch` gates overlapping batch loads; `Done` makes
/// further scroll triggers no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    LoadingBatch,
    Done,
}

/// One realized gallery entry. `hidden` is set when the image failed to load;
/// the slot keeps its display position so labels stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub url: String,
    pub hidden: bool,
}

impl ImageSlot {
    fn new(url: String) -> Self {
        Self { url, hidden: false }
    }
}

/// Session-scoped client state: the immutable server-computed list plus the
/// realized display order and the batch cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    source: Vec<String>,
    displayed: Vec<ImageSlot>,
    current_batch: usize,
    batch_size: usize,
    phase: LoadPhase,
    dirty: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_BATCH_SIZE)
    }
}

impl GalleryState {
    pub fn new(source: Vec<String>, batch_size: usize) -> Self {
        Self {
            source,
            displayed: Vec::new(),
            current_batch: 0,
            // A zero batch size would never make progress.
            batch_size: batch_size.max(1),
            phase: LoadPhase::Idle,
            dirty: false,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn current_batch(&self) -> usize {
        self.current_batch
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn displayed(&self) -> &[ImageSlot] {
        &self.displayed
    }

    /// Current display order, the sequence the reorder capability would scan
    /// out of the container.
    pub fn displayed_urls(&self) -> Vec<String> {
        self.displayed.iter().map(|slot| slot.url.clone()).collect()
    }

    /// True once the batch cursor covers the whole source list.
    pub fn exhausted(&self) -> bool {
        self.current_batch * self.batch_size >= self.source.len()
    }

    pub(crate) fn begin_batch(&mut self) {
        self.phase = LoadPhase::LoadingBatch;
        self.mark_dirty();
    }

    /// Appends the next source slice and advances the cursor. Returns the
    /// appended URLs for the DOM effect.
    pub(crate) fn commit_batch(&mut self) -> Vec<String> {
        let start = self.current_batch * self.batch_size;
        let end = self.source.len().min(start + self.batch_size);
        let appended: Vec<String> = self.source[start..end].to_vec();
        self.displayed
            .extend(appended.iter().cloned().map(ImageSlot::new));
        self.current_batch += 1;
        self.settle_phase();
        self.mark_dirty();
        appended
    }

    /// Rebuilds the display from a persisted order in one pass and positions
    /// the batch cursor so later loads resume from the source list.
    pub(crate) fn restore_order(&mut self, order: Vec<String>) {
        self.current_batch = order.len().div_ceil(self.batch_size);
        self.displayed = order.into_iter().map(ImageSlot::new).collect();
        self.settle_phase();
        self.mark_dirty();
    }

    /// Replaces the display order after a drag. Hidden flags follow their
    /// URLs; with duplicates the first unclaimed slot wins.
    pub(crate) fn apply_reorder(&mut self, order: Vec<String>) {
        let mut previous = std::mem::take(&mut self.displayed);
        self.displayed = order
            .into_iter()
            .map(|url| {
                match previous.iter().position(|slot| slot.url == url) {
                    Some(idx) => previous.swap_remove(idx),
                    None => ImageSlot::new(url),
                }
            })
            .collect();
        self.mark_dirty();
    }

    /// Marks a slot hidden after an image load failure. Returns false for an
    /// out-of-range index (stale notification).
    pub(crate) fn hide_slot(&mut self, index: usize) -> bool {
        match self.displayed.get_mut(index) {
            Some(slot) => {
                slot.hidden = true;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn settle_phase(&mut self) {
        self.phase = if self.exhausted() {
            LoadPhase::Done
        } else {
            LoadPhase::Idle
        };
    }

    pub fn view(&self) -> GalleryViewModel {
        GalleryViewModel {
            phase: self.phase,
            total_images: self.source.len(),
            loaded_count: self.displayed.len(),
            current_batch: self.current_batch,
            images: self
                .displayed
                .iter()
                .enumerate()
                .map(|(idx, slot)| ImageRowView {
                    // Positional label is derived from display position,
                    // never cached; hidden slots keep their number.
                    position: idx + 1,
                    url: slot.url.clone(),
                    hidden: slot.hidden,
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
