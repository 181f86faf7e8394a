//! Which feature card, if any, is currently active.
//!
//! A single-slot register over `{none} ∪ ids`. Toggling the selected id
//! clears it, toggling anything else replaces it. Ids are not checked against
//! the catalog: an unknown id is stored like any other and simply never
//! matches a rendered card.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::catalog::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<ItemId>,
}

pub enum SelectionAction {
    Toggle(ItemId),
}

impl Selection {
    pub fn toggle(&mut self, id: ItemId) {
        self.active = if self.active == Some(id) { None } else { Some(id) };
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.active == Some(id)
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.active
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Toggle(id) => {
                let mut next = *self;
                next.toggle(id);
                debug!("card {} toggled, active card now {:?}", id, next.selected());
                Rc::new(next)
            }
        }
    }
}
