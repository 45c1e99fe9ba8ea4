/// Where a click on the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The dimmed backdrop itself.
    Background,
    /// The image or anything else inside the overlay.
    Content,
}

/// The modal image viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    visible: bool,
    image: Option<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A thumbnail with source `src` was clicked.
    pub fn show(&mut self, src: impl Into<String>) {
        self.image = Some(src.into());
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Handle a click on the overlay. Returns whether visibility changed.
    pub fn click_overlay(&mut self, target: OverlayClick) -> bool {
        if target == OverlayClick::Background && self.visible {
            self.hide();
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last image shown; kept while hidden.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
