/// Side effects requested by `update`, executed by the runtime against the
/// DOM, the order store and the batch timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the order store for a previously persisted arrangement.
    ReadSavedOrder,
    ShowLoadingIndicator,
    HideLoadingIndicator,
    /// Start the simulated-latency wait before the pending batch is appended.
    ScheduleBatchAppend,
    /// Append realized image elements to the gallery container.
    AppendImages { urls: Vec<String> },
    /// Clear the container and realize the given order in one pass.
    RebuildGallery { urls: Vec<String> },
    /// Recompute 1-based positional labels from display order.
    RelabelPositions,
    /// Hide the element at the given display index (broken image tolerance).
    HideImage { index: usize },
    /// Overwrite the persisted order with the latest arrangement.
    WriteSavedOrder { order: Vec<String> },
}
