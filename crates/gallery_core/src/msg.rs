#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page finished loading; look up a persisted order before the first
    /// default batch.
    PageReady,
    /// Result of the saved-order lookup. `None` covers both absent and
    /// unparseable storage.
    SavedOrderLoaded(Option<Vec<String>>),
    /// Debounced scroll landed within the bottom-proximity threshold.
    ScrollNearBottom,
    /// Simulated batch latency elapsed; the pending batch may be appended.
    BatchDelayElapsed,
    /// End-of-drag notification carrying the container's current child order.
    ReorderCommitted(Vec<String>),
    /// An image failed to load and should be hidden in place.
    ImageLoadFailed { index: usize },
    /// Fallback for placeholder wiring.
    NoOp,
}
