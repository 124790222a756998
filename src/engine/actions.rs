//! Button dispatch: maps a bound [`ButtonAction`] onto the widget interface.

use rand::Rng;

use crate::engine::panels::PanelStack;
use crate::engine::title::randomize_title;
use crate::engine::widgets::{LabelState, LabelWidget, Stacking};
use crate::layout::DemoLayout;
use crate::types::{ButtonAction, Visibility};

/// Runs one button action. `ShuffleTitle` only touches the label,
/// `ShowPanel` only touches the stack.
pub fn perform<L, S, R>(action: ButtonAction, label: &mut L, stack: &mut S, rng: &mut R)
where
    L: LabelWidget + ?Sized,
    S: Stacking + ?Sized,
    R: Rng + ?Sized,
{
    match action {
        ButtonAction::ShuffleTitle => randomize_title(label, rng),
        ButtonAction::ShowPanel(panel) => stack.raise(panel),
    }
}

/// All mutable application state, owned in one place and handed to the
/// renderer by reference each frame.
#[derive(Clone, Debug)]
pub struct DemoState {
    pub label: LabelState,
    pub stack: PanelStack,
}

impl DemoState {
    pub fn from_layout(layout: &DemoLayout) -> Self {
        let label = &layout.label;
        Self {
            label: LabelState::new(label.text, label.background, label.foreground, label.font_size),
            stack: PanelStack::new(&layout.construction_order()),
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: ButtonAction, rng: &mut R) {
        log::debug!("button action {action:?}");
        perform(action, &mut self.label, &mut self.stack, rng);
        log::debug!("{:?}, label {:?}", self.visibility(), self.label.text);
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.stack.visibility()
    }
}
