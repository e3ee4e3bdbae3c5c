use std::collections::HashMap;

use crate::frame::Frame;
use crate::{FrameId, PageId, PagingError, PagingResult};

/// Fixed pool of frame slots plus the page-to-frame residency index.
///
/// Every mutation updates the slot and the index together, so the index is
/// a bijection over occupied frames at all times: no page in two frames, no
/// frame claimed by two pages.
#[derive(Debug)]
pub struct FrameTable {
    frames: Vec<Frame>,
    resident: HashMap<PageId, FrameId>,
}

impl FrameTable {
    /// Creates a pool of `num_frames` empty slots.
    pub fn new(num_frames: usize) -> PagingResult<Self> {
        if num_frames < 1 {
            return Err(PagingError::InvalidFrameCount(num_frames));
        }
        Ok(Self {
            frames: vec![Frame::default(); num_frames],
            resident: HashMap::new(),
        })
    }

    /// Returns the fixed pool size.
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Returns how many slots currently hold a page.
    pub fn occupied_count(&self) -> usize {
        self.resident.len()
    }

    /// Returns whether every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.resident.len() == self.frames.len()
    }

    /// Returns the first empty slot in index order, if any. No side effects.
    pub fn find_free(&self) -> Option<FrameId> {
        self.frames.iter().position(|frame| !frame.is_occupied())
    }

    /// Returns the frame holding `page_id`, if the page is resident.
    pub fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.resident.get(&page_id).copied()
    }

    /// Borrows a slot for inspection.
    pub fn frame(&self, frame_id: FrameId) -> &Frame {
        &self.frames[frame_id]
    }

    /// Loads `page_id` into the empty slot `frame_id`.
    pub fn allocate(&mut self, frame_id: FrameId, page_id: PageId) -> PagingResult<()> {
        if let Some(held) = self.frames[frame_id].page_id() {
            return Err(PagingError::FrameOccupied {
                frame_id,
                page_id: held,
            });
        }
        if let Some(other) = self.resident.get(&page_id) {
            return Err(PagingError::PolicyInvariant(format!(
                "page {page_id} is already resident in frame {other}"
            )));
        }
        self.frames[frame_id].load(page_id);
        self.resident.insert(page_id, frame_id);
        Ok(())
    }

    /// Marks the page resident in `frame_id` as written.
    pub fn mark_dirty(&mut self, frame_id: FrameId) -> PagingResult<()> {
        if !self.frames[frame_id].is_occupied() {
            return Err(PagingError::FrameEmpty(frame_id));
        }
        self.frames[frame_id].dirty = true;
        Ok(())
    }

    /// Empties `frame_id`, returning the page it held and whether that page
    /// was dirty. The only operation that frees an occupied slot.
    pub fn evict(&mut self, frame_id: FrameId) -> PagingResult<(PageId, bool)> {
        let frame = &mut self.frames[frame_id];
        let page_id = frame.page_id().ok_or(PagingError::FrameEmpty(frame_id))?;
        let was_dirty = frame.is_dirty();
        frame.reset();
        self.resident.remove(&page_id);
        Ok((page_id, was_dirty))
    }
}
