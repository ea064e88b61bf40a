use crate::LoadPhase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryViewModel {
    pub phase: LoadPhase,
    pub total_images: usize,
    pub loaded_count: usize,
    pub current_batch: usize,
    pub images: Vec<ImageRowView>,
    pub dirty: bool,
}

/// One gallery entry as rendered: its 1-based positional label, URL, and
/// whether the broken-image handler has hidden it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRowView {
    pub position: usize,
    pub url: String,
    pub hidden: bool,
}
