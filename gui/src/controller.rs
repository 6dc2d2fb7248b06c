use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use plotters_dioxus::HoverData;

#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    PointerEnter(HoverData),
    PointerLeave,
}

/// Which sample, by position in the table, the pointer rests on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverSelection {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverSelection {
    pub fn position(&self) -> Option<usize> {
        match self {
            HoverSelection::Idle => None,
            HoverSelection::Hovering(position) => Some(*position),
        }
    }

    /// Next state after `event`. Only the nearest hovered point counts.
    pub fn apply(self, event: &HoverEvent) -> Self {
        match event {
            HoverEvent::PointerEnter(data) => data
                .first()
                .map(|p| HoverSelection::Hovering(p.point_index))
                .unwrap_or(HoverSelection::Idle),
            HoverEvent::PointerLeave => HoverSelection::Idle,
        }
    }
}

/// Owns the hover state. Subscribers read [`HoverController::selection`]
/// inside their own memos and recompute independently on every dispatch.
#[derive(Clone, Copy, PartialEq)]
pub struct HoverController {
    selection: Signal<HoverSelection>,
}

impl HoverController {
    pub fn selection(&self) -> HoverSelection {
        *self.selection.read()
    }

    pub fn dispatch(&mut self, event: HoverEvent) {
        let current = *self.selection.peek();
        let next = current.apply(&event);
        debug!("hover {current:?} -> {next:?}");
        self.selection.set(next);
    }
}

pub fn use_hover_controller() -> HoverController {
    let selection = use_signal(HoverSelection::default);
    HoverController { selection }
}
