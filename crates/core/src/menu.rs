//! Popup menu model.
//!
//! This module defines a platform-agnostic representation of the popup menu.
//! Backends render it as a native menu (e.g. a Win32 `HMENU`), and report the
//! [`MenuId`] of the activated item back to the controller.
//!
//! Containers live in an arena owned by [`Menu`] and are addressed by
//! [`MenuHandle`]. The root container is always [`MenuHandle::ROOT`].
//!
//! ```
//! use mpv_menu_core::menu::{Menu, MenuHandle};
//!
//! let mut menu = Menu::new();
//! let (video, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Video");
//! let id = menu.append_item(video, "Fullscreen\tf", Some("cycle fullscreen".into()));
//!
//! assert_eq!(menu.command(id), Some("cycle fullscreen"));
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

/// The first identifier handed out by a [`Menu`].
///
/// Identifiers start above `WM_USER + 100` so they never collide with
/// commands reserved by the host window.
pub const ID_BASE: u32 = 0x0400 + 100;

/// Identifier of a menu item.
///
/// Identifiers are unique within one [`Menu`] and never reused while it is
/// alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u32);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw value.
    #[must_use]
    pub const fn from_u32(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle of a menu container inside a [`Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuHandle(usize);

impl MenuHandle {
    /// The root container of every [`Menu`].
    pub const ROOT: Self = Self(0);
}

bitflags::bitflags! {
    /// Display state of a menu item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemState: u8 {
        /// The item shows a check mark.
        const CHECKED = 1 << 0;
        /// The check mark is drawn as a radio bullet.
        const RADIO = 1 << 1;
        /// The item is grayed out and cannot be activated.
        const DISABLED = 1 << 2;
    }
}

/// An entry of a menu container.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Identifier of the entry; separators have none.
    pub id: Option<MenuId>,
    /// Display state.
    pub state: ItemState,
    /// Entry contents.
    pub kind: EntryKind,
}

impl Entry {
    /// Returns the display title, if the entry has one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Item { title, .. } | EntryKind::Submenu { title, .. } => Some(title),
            EntryKind::Separator => None,
        }
    }

    /// Returns `true` if the entry can be activated or opened.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.state.contains(ItemState::DISABLED)
    }

    /// Returns `true` if the entry shows a check mark.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.state.contains(ItemState::CHECKED)
    }
}

/// The concrete type of a menu entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// A clickable item.
    Item {
        /// Escaped display text.
        title: String,
        /// Command dispatched when the item is activated.
        command: Option<String>,
    },

    /// A nested container.
    Submenu {
        /// Escaped display text.
        title: String,
        /// The nested container.
        menu: MenuHandle,
    },

    /// A separator/divider.
    Separator,
}

/// A popup menu tree.
#[derive(Debug, Clone)]
pub struct Menu {
    containers: Vec<Vec<Entry>>,
    owners: FxHashMap<MenuId, MenuHandle>,
    next_id: u32,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Creates an empty [`Menu`] with only a root container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: vec![Vec::new()],
            owners: FxHashMap::default(),
            next_id: ID_BASE,
        }
    }

    fn allocate(&mut self, owner: MenuHandle) -> MenuId {
        let id = MenuId(self.next_id);
        self.next_id += 1;
        let _ = self.owners.insert(id, owner);
        id
    }

    /// Appends a separator to the container.
    pub fn append_separator(&mut self, menu: MenuHandle) {
        self.containers[menu.0].push(Entry {
            id: None,
            state: ItemState::empty(),
            kind: EntryKind::Separator,
        });
    }

    /// Appends a clickable item to the container and returns its identifier.
    pub fn append_item(
        &mut self,
        menu: MenuHandle,
        title: impl Into<String>,
        command: Option<String>,
    ) -> MenuId {
        self.append_item_with_state(menu, title, command, ItemState::empty())
    }

    /// Appends a clickable item with the given state.
    pub fn append_item_with_state(
        &mut self,
        menu: MenuHandle,
        title: impl Into<String>,
        command: Option<String>,
        state: ItemState,
    ) -> MenuId {
        let id = self.allocate(menu);

        self.containers[menu.0].push(Entry {
            id: Some(id),
            state,
            kind: EntryKind::Item {
                title: title.into(),
                command,
            },
        });

        id
    }

    /// Returns the submenu titled `title` in the container, creating it if
    /// needed.
    ///
    /// The last element is `true` when the submenu was created by this call.
    pub fn append_or_get_submenu(
        &mut self,
        menu: MenuHandle,
        title: &str,
    ) -> (MenuHandle, MenuId, bool) {
        if let Some((handle, id)) = self.find_submenu(menu, title) {
            return (handle, id, false);
        }

        let handle = MenuHandle(self.containers.len());
        self.containers.push(Vec::new());

        let id = self.allocate(menu);
        self.containers[menu.0].push(Entry {
            id: Some(id),
            state: ItemState::empty(),
            kind: EntryKind::Submenu {
                title: title.to_owned(),
                menu: handle,
            },
        });

        (handle, id, true)
    }

    /// Finds a direct child submenu by its exact (escaped) title.
    #[must_use]
    pub fn find_submenu(&self, menu: MenuHandle, title: &str) -> Option<(MenuHandle, MenuId)> {
        self.containers[menu.0].iter().find_map(|entry| match &entry.kind {
            EntryKind::Submenu { title: t, menu } if t == title => {
                entry.id.map(|id| (*menu, id))
            }
            _ => None,
        })
    }

    /// Removes every entry of the container.
    ///
    /// Titles and commands owned by the removed entries are dropped at once.
    /// Nested containers stay allocated, but are no longer reachable.
    pub fn clear(&mut self, menu: MenuHandle) {
        for entry in self.containers[menu.0].drain(..) {
            if let Some(id) = entry.id {
                let _ = self.owners.remove(&id);
            }
        }
    }

    /// Returns the entries of the container in display order.
    #[must_use]
    pub fn entries(&self, menu: MenuHandle) -> &[Entry] {
        &self.containers[menu.0]
    }

    /// Returns the number of entries in the container.
    #[must_use]
    pub fn len(&self, menu: MenuHandle) -> usize {
        self.containers[menu.0].len()
    }

    /// Returns `true` if the container has no entries.
    #[must_use]
    pub fn is_empty(&self, menu: MenuHandle) -> bool {
        self.containers[menu.0].is_empty()
    }

    /// Returns the entry with the given identifier.
    #[must_use]
    pub fn entry(&self, id: MenuId) -> Option<&Entry> {
        let owner = self.owners.get(&id)?;

        self.containers[owner.0]
            .iter()
            .find(|entry| entry.id == Some(id))
    }

    fn entry_mut(&mut self, id: MenuId) -> Option<&mut Entry> {
        let owner = *self.owners.get(&id)?;

        self.containers[owner.0]
            .iter_mut()
            .find(|entry| entry.id == Some(id))
    }

    /// Returns the command bound to the item, if any.
    #[must_use]
    pub fn command(&self, id: MenuId) -> Option<&str> {
        match &self.entry(id)?.kind {
            EntryKind::Item { command, .. } => command.as_deref(),
            _ => None,
        }
    }

    /// Enables or disables the entry with the given identifier.
    ///
    /// Returns `false` if there is no such entry.
    pub fn set_enabled(&mut self, id: MenuId, enabled: bool) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.state.set(ItemState::DISABLED, !enabled);
                true
            }
            None => false,
        }
    }

    /// Checks the entry at `position` as a radio item and unchecks every
    /// other entry of the container.
    ///
    /// Returns `false` and leaves the container untouched when `position` is
    /// out of range.
    pub fn check_radio(&mut self, menu: MenuHandle, position: usize) -> bool {
        let entries = &mut self.containers[menu.0];

        if position >= entries.len() {
            return false;
        }

        for (i, entry) in entries.iter_mut().enumerate() {
            if i == position {
                entry.state.insert(ItemState::CHECKED | ItemState::RADIO);
            } else {
                entry.state.remove(ItemState::CHECKED);
            }
        }

        true
    }

    /// Computes a hash of the visible structure of the menu.
    ///
    /// Backends compare signatures to skip rebuilding unchanged native menus.
    /// Identifiers are part of the signature, so refilling a container with
    /// identical rows still changes it.
    #[must_use]
    pub fn signature(&self) -> u64 {
        use std::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash_container(MenuHandle::ROOT, &mut hasher);
        self.next_id.hash(&mut hasher);
        hasher.finish()
    }

    fn hash_container(&self, menu: MenuHandle, hasher: &mut impl std::hash::Hasher) {
        use std::hash::Hash;

        for entry in self.entries(menu) {
            entry.id.hash(hasher);
            entry.state.hash(hasher);

            match &entry.kind {
                EntryKind::Separator => 0u8.hash(hasher),
                EntryKind::Item { title, command } => {
                    1u8.hash(hasher);
                    title.hash(hasher);
                    command.is_some().hash(hasher);
                }
                EntryKind::Submenu { title, menu } => {
                    2u8.hash(hasher);
                    title.hash(hasher);
                    self.hash_container(*menu, hasher);
                    3u8.hash(hasher);
                }
            }
        }
    }

    fn write_container(
        &self,
        f: &mut fmt::Formatter<'_>,
        menu: MenuHandle,
        depth: usize,
    ) -> fmt::Result {
        for entry in self.entries(menu) {
            let indent = depth * 2;
            let mark = match (entry.is_checked(), entry.state.contains(ItemState::RADIO)) {
                (true, true) => "(*) ",
                (true, false) => "[x] ",
                _ => "",
            };
            let disabled = if entry.is_enabled() { "" } else { " (disabled)" };

            match &entry.kind {
                EntryKind::Separator => writeln!(f, "{:indent$}---", "")?,
                EntryKind::Item { title, command } => writeln!(
                    f,
                    "{:indent$}{mark}{}{disabled} => {}",
                    "",
                    title.escape_debug(),
                    command.as_deref().unwrap_or("-"),
                )?,
                EntryKind::Submenu { title, menu } => {
                    writeln!(f, "{:indent$}{}{disabled} >", "", title.escape_debug())?;
                    self.write_container(f, *menu, depth + 1)?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_container(f, MenuHandle::ROOT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_base_and_increase() {
        let mut menu = Menu::new();
        let a = menu.append_item(MenuHandle::ROOT, "A", None);
        menu.append_separator(MenuHandle::ROOT);
        let (_, b, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "B");

        assert_eq!(a, MenuId(ID_BASE));
        assert_eq!(b, MenuId(ID_BASE + 1));
        assert_eq!(menu.entries(MenuHandle::ROOT)[1].id, None);
    }

    #[test]
    fn test_submenu_is_reused_by_title() {
        let mut menu = Menu::new();
        let (first, first_id, created) = menu.append_or_get_submenu(MenuHandle::ROOT, "Audio");
        assert!(created);

        let (second, second_id, created) = menu.append_or_get_submenu(MenuHandle::ROOT, "Audio");
        assert!(!created);
        assert_eq!(first, second);
        assert_eq!(first_id, second_id);
        assert_eq!(menu.len(MenuHandle::ROOT), 1);
    }

    #[test]
    fn test_submenu_lookup_is_per_container() {
        let mut menu = Menu::new();
        let (video, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Video");
        let (nested, _, created) = menu.append_or_get_submenu(video, "Video");

        assert!(created);
        assert_ne!(video, nested);
    }

    #[test]
    fn test_clear_forgets_commands() {
        let mut menu = Menu::new();
        let (sub, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Sub");
        let id = menu.append_item(sub, "A", Some("a".into()));
        menu.append_separator(sub);

        menu.clear(sub);

        assert!(menu.is_empty(sub));
        assert_eq!(menu.command(id), None);
        assert!(menu.entry(id).is_none());
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut menu = Menu::new();
        let (sub, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Sub");
        let first = menu.append_item(sub, "A", None);
        menu.clear(sub);
        let second = menu.append_item(sub, "A", None);

        assert!(second > first);
    }

    #[test]
    fn test_set_enabled() {
        let mut menu = Menu::new();
        let id = menu.append_item(MenuHandle::ROOT, "A", None);

        assert!(menu.set_enabled(id, false));
        assert!(!menu.entry(id).map_or(true, Entry::is_enabled));
        assert!(menu.set_enabled(id, true));
        assert!(menu.entry(id).is_some_and(Entry::is_enabled));
        assert!(!menu.set_enabled(MenuId(1), true));
    }

    #[test]
    fn test_check_radio() {
        let mut menu = Menu::new();
        for title in ["A", "B", "C"] {
            let _ = menu.append_item_with_state(MenuHandle::ROOT, title, None, ItemState::CHECKED);
        }

        assert!(menu.check_radio(MenuHandle::ROOT, 1));
        let checked: Vec<_> = menu
            .entries(MenuHandle::ROOT)
            .iter()
            .map(Entry::is_checked)
            .collect();
        assert_eq!(checked, [false, true, false]);
        assert!(menu.entries(MenuHandle::ROOT)[1].state.contains(ItemState::RADIO));

        assert!(!menu.check_radio(MenuHandle::ROOT, 3));
    }

    #[test]
    fn test_signature_tracks_changes() {
        let mut menu = Menu::new();
        let id = menu.append_item(MenuHandle::ROOT, "A", None);
        let before = menu.signature();

        assert_eq!(before, menu.signature());
        let _ = menu.set_enabled(id, false);
        assert_ne!(before, menu.signature());
    }

    #[test]
    fn test_signature_changes_when_rows_are_refilled() {
        let mut menu = Menu::new();
        let (sub, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Tracks");

        // Clearing an empty container allocates nothing.
        let empty = menu.signature();
        menu.clear(sub);
        assert_eq!(empty, menu.signature());

        let _ = menu.append_item(sub, "English", Some("set aid 1".into()));
        let filled = menu.signature();

        menu.clear(sub);
        let _ = menu.append_item(sub, "English", Some("set aid 1".into()));
        assert_ne!(filled, menu.signature());
    }

    #[test]
    fn test_display() {
        let mut menu = Menu::new();
        let (sub, _, _) = menu.append_or_get_submenu(MenuHandle::ROOT, "Sub");
        let _ = menu.append_item(sub, "Quit\tq", Some("quit".into()));
        menu.append_separator(MenuHandle::ROOT);

        assert_eq!(menu.to_string(), "Sub >\n  Quit\\tq => quit\n---\n");
    }
}
