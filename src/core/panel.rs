/// Where a document-level click started, relative to the settings widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Trigger,
    Panel,
    Outside,
}

/// Visibility of the settings overlay. Memory only; starts closed on every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelToggle {
    visible: bool,
}

impl PanelToggle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Trigger button pressed: flip.
    pub fn on_trigger_click(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// A click bubbled up to the document. Only clicks outside both the
    /// trigger and the panel close it; the trigger's own click was already
    /// handled by `on_trigger_click`.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> bool {
        if origin == ClickOrigin::Outside {
            self.visible = false;
        }
        self.visible
    }
}
