//! Panel stack: z-order of the overlapping panels.
//!
//! All panels share one rectangle, so the frontmost one is the only one the
//! user can see or click.

use crate::engine::widgets::Stacking;
use crate::types::{PanelId, Visibility};

/// Back-to-front stacking order. The last element is topmost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelStack {
    order: Vec<PanelId>,
}

impl PanelStack {
    /// Builds the stack from construction order; the panel constructed last
    /// ends up on top. Duplicates keep their last position.
    pub fn new(construction_order: &[PanelId]) -> Self {
        let mut stack = Self {
            order: Vec::with_capacity(construction_order.len()),
        };
        for &id in construction_order {
            stack.push_front(id);
        }
        stack
    }

    fn push_front(&mut self, id: PanelId) {
        self.order.retain(|&p| p != id);
        self.order.push(id);
    }

    /// The panel currently visible, if any panels exist.
    pub fn topmost(&self) -> Option<PanelId> {
        self.order.last().copied()
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.topmost().map(Visibility::from)
    }

    /// Panels from back to front, the order they must be painted in.
    pub fn back_to_front(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.order.iter().copied()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.order.contains(&id)
    }
}

impl Stacking for PanelStack {
    fn raise(&mut self, panel: PanelId) {
        if !self.contains(panel) {
            log::warn!("raise: {panel} is not part of the stack");
            return;
        }
        if self.topmost() == Some(panel) {
            return;
        }
        self.push_front(panel);
        log::debug!("raised {panel}");
    }
}
