//! Open/closed state of the mobile navigation panel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TogglePressed,
    LinkClicked,
    OutsideClick,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an input; returns the transition, or `None` if nothing changed.
    pub fn apply(&mut self, event: MenuEvent) -> Option<MenuTransition> {
        let next = match event {
            MenuEvent::TogglePressed => !self.open,
            MenuEvent::LinkClicked | MenuEvent::OutsideClick | MenuEvent::Escape => false,
        };
        if next == self.open {
            return None;
        }
        self.open = next;
        Some(if next {
            MenuTransition::Opened
        } else {
            MenuTransition::Closed
        })
    }
}
