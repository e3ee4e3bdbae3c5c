use crate::PageId;

/// One physical frame slot with residency metadata.
///
/// A slot is either fully empty (no page, dirty clear) or holds exactly one
/// resident page whose dirty flag tracks writes since the load.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub(crate) page_id: Option<PageId>,
    pub(crate) dirty: bool,
}

impl Frame {
    /// Returns whether a page is resident in this slot.
    pub fn is_occupied(&self) -> bool {
        self.page_id.is_some()
    }

    /// Returns the resident page, if any.
    pub fn page_id(&self) -> Option<PageId> {
        self.page_id
    }

    /// Returns whether the resident page has been written since loading.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Fills the slot with a freshly loaded page, dirty cleared.
    pub(crate) fn load(&mut self, page_id: PageId) {
        self.page_id = Some(page_id);
        self.dirty = false;
    }

    /// Returns the slot to the fully empty state.
    pub(crate) fn reset(&mut self) {
        self.page_id = None;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lifecycle() {
        let mut frame = Frame::default();
        assert!(!frame.is_occupied());
        assert!(!frame.is_dirty());

        frame.load(7);
        assert_eq!(frame.page_id(), Some(7));
        assert!(!frame.is_dirty(), "fresh load must start clean");

        frame.dirty = true;
        frame.reset();
        assert!(!frame.is_occupied());
        assert!(!frame.is_dirty(), "reset must clear the dirty flag");
    }

    #[test]
    fn test_reload_clears_dirty() {
        let mut frame = Frame::default();
        frame.load(1);
        frame.dirty = true;
        frame.load(2);
        assert_eq!(frame.page_id(), Some(2));
        assert!(!frame.is_dirty());
    }
}
