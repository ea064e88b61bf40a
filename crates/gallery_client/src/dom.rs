/// Browser DOM boundary: the gallery container plus the loading indicator.
pub trait GalleryDom {
    /// Append realized image elements at the end of the container.
    fn append_images(&mut self, urls: &[String]);
    /// Clear the container and realize the given order in one pass.
    fn rebuild(&mut self, urls: &[String]);
    /// Hide the element at the given display index without removing it.
    fn hide_image(&mut self, index: usize);
    fn set_loading_indicator(&mut self, visible: bool);
    /// Renumber positional labels 1..n in display order.
    fn renumber(&mut self);
    /// Current child order, the way the drag-end handler scans it.
    fn scan_order(&self) -> Vec<String>;
}

/// One element in the headless container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomImage {
    pub url: String,
    pub label: usize,
    pub visible: bool,
}

/// In-memory DOM stand-in used by the headless harness and the tests.
#[derive(Debug, Default)]
pub struct HeadlessDom {
    images: Vec<DomImage>,
    loading_indicator: bool,
}

impl HeadlessDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[DomImage] {
        &self.images
    }

    pub fn loading_indicator(&self) -> bool {
        self.loading_indicator
    }

    /// Simulates the user dragging the element at `from` to position `to`.
    /// The caller still has to report drag end to the runtime.
    pub fn drag(&mut self, from: usize, to: usize) {
        let image = self.images.remove(from);
        self.images.insert(to, image);
    }
}

impl GalleryDom for HeadlessDom {
    fn append_images(&mut self, urls: &[String]) {
        self.images.extend(urls.iter().map(|url| DomImage {
            url: url.clone(),
            // Labels are assigned by the renumber pass that follows.
            label: 0,
            visible: true,
        }));
    }

    fn rebuild(&mut self, urls: &[String]) {
        self.images.clear();
        self.append_images(urls);
    }

    fn hide_image(&mut self, index: usize) {
        if let Some(image) = self.images.get_mut(index) {
            image.visible = false;
        }
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        self.loading_indicator = visible;
    }

    fn renumber(&mut self) {
        for (idx, image) in self.images.iter_mut().enumerate() {
            image.label = idx + 1;
        }
    }

    fn scan_order(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }
}
