// SPDX-License-Identifier: MPL-2.0
//! Stacked vertical layout of page sections.
//!
//! Sections are rendered as fixed-height blocks one below the other. The
//! layout computes each block's extent from the viewport height and writes it
//! into a shared [`LayoutSlot`], which is the handle the tracker reads.

use super::{Bounds, SectionHandle, SectionId};
use std::cell::Cell;
use std::rc::Rc;

/// Shared cell holding a section's latest extent.
#[derive(Debug, Default)]
pub struct LayoutSlot(Cell<Option<Bounds>>);

impl LayoutSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, bounds: Bounds) {
        self.0.set(Some(bounds));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }
}

impl SectionHandle for LayoutSlot {
    fn bounds(&self) -> Option<Bounds> {
        self.0.get()
    }
}

#[derive(Debug)]
struct Block {
    id: SectionId,
    min_height: f32,
    slot: Rc<LayoutSlot>,
}

/// Ordered blocks, each at least one viewport tall.
#[derive(Debug, Default)]
pub struct SectionLayout {
    blocks: Vec<Block>,
    document_height: f32,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block and returns the slot to register with the tracker.
    pub fn push(&mut self, id: SectionId, min_height: f32) -> Rc<LayoutSlot> {
        let slot = Rc::new(LayoutSlot::new());
        self.blocks.push(Block {
            id,
            min_height: min_height.max(0.0),
            slot: Rc::clone(&slot),
        });
        slot
    }

    /// Recomputes every block for `viewport_height` and returns the document
    /// height.
    pub fn relayout(&mut self, viewport_height: f32) -> f32 {
        let viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };

        let mut top = 0.0;
        for block in &self.blocks {
            let height = block.min_height.max(viewport_height);
            block.slot.set(Bounds::new(top, top + height));
            top += height;
        }
        self.document_height = top;
        top
    }

    #[must_use]
    pub fn document_height(&self) -> f32 {
        self.document_height
    }

    /// Current height of the block for `id`.
    #[must_use]
    pub fn height_of(&self, id: &SectionId) -> Option<f32> {
        self.blocks
            .iter()
            .find(|block| block.id == *id)
            .and_then(|block| block.slot.bounds())
            .map(|bounds| bounds.height())
    }
}
