//! Dynamic submenus, rebuilt from player state every time the menu opens.

use crate::menu::{Menu, MenuHandle, MenuId};
use crate::projector::Provider;
use crate::state::PlayerState;

/// A submenu whose rows are regenerated on every open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSlot {
    /// The submenu container.
    pub menu: MenuHandle,
    /// Identifier of the submenu entry in its parent.
    pub id: MenuId,
    /// The source of the rows.
    pub provider: Provider,
}

/// The dynamic submenus of a loaded [`Menu`], in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: Vec<DynamicSlot>,
}

impl Registry {
    /// Creates an empty [`Registry`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a submenu under the provider named by `keyword`.
    ///
    /// The submenu entry is disabled until the first rebuild adds rows.
    /// Unknown keywords register nothing and return `false`, leaving the
    /// entry disabled for good.
    pub fn register(&mut self, menu: &mut Menu, handle: MenuHandle, id: MenuId, keyword: &str) -> bool {
        let _ = menu.set_enabled(id, false);

        let Some(provider) = Provider::from_keyword(keyword) else {
            log::debug!("Unknown dynamic menu keyword: {keyword:?}");
            return false;
        };

        self.slots.push(DynamicSlot {
            menu: handle,
            id,
            provider,
        });

        true
    }

    /// Returns the registered slots.
    #[must_use]
    pub fn slots(&self) -> &[DynamicSlot] {
        &self.slots
    }

    /// Returns the number of registered slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Rebuilds every dynamic submenu from the given state.
    ///
    /// Each submenu is cleared, refilled by its provider and its entry
    /// enabled only if at least one row was added.
    pub fn rebuild(&self, menu: &mut Menu, state: &PlayerState) {
        for slot in &self.slots {
            menu.clear(slot.menu);

            let projection = slot.provider.project(state);
            let count = projection.rows.len();

            for row in projection.rows {
                let _ = menu.append_item_with_state(slot.menu, row.title, Some(row.command), row.state);
            }

            if let Some(position) = projection.radio {
                let _ = menu.check_radio(slot.menu, position);
            }

            let _ = menu.set_enabled(slot.id, count > 0);

            log::debug!("Rebuilt dynamic menu {}: {count} rows", slot.provider);
        }
    }
}
