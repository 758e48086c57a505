//! The `input.conf` menu grammar.
//!
//! A binding becomes a menu entry when its command carries an annotation:
//!
//! ```text
//! Ctrl+o  script-binding open    #menu: File > Open...
//! _       ignore                 #menu: -
//! _       ignore                 #menu: Audio > Tracks #@ tracks/audio
//! ```
//!
//! The annotation is a `>` separated path. Every segment but the last names a
//! submenu, created on first use and shared by later lines. The last segment
//! is a separator (`-`), a dynamic submenu (trailing `#@ keyword`) or a
//! clickable item bound to the whole command.

use crate::dynamic::Registry;
use crate::menu::{Menu, MenuHandle};
use crate::text::{
    self, MENU_PREFIX_DYN, escape_title, format_title, is_separator, split_field,
    split_menu_annotation,
};

/// Builds a [`Menu`] and its [`Registry`] from configuration lines.
#[derive(Debug)]
pub struct Parser<'a> {
    menu: &'a mut Menu,
    registry: &'a mut Registry,
    uosc: bool,
}

impl<'a> Parser<'a> {
    /// Creates a [`Parser`] appending to the given menu and registry.
    pub fn new(menu: &'a mut Menu, registry: &'a mut Registry, uosc: bool) -> Self {
        Self {
            menu,
            registry,
            uosc,
        }
    }

    /// Parses every line of `source` into the root container.
    pub fn parse(&mut self, source: &str) {
        for line in source.lines() {
            self.parse_line(line);
        }
    }

    /// Parses a single configuration line into the root container.
    ///
    /// Lines without a usable annotation are skipped.
    pub fn parse_line(&mut self, line: &str) {
        let Some((key, command)) = split_field(line, self.uosc) else {
            return;
        };

        match split_menu_annotation(command, self.uosc) {
            Some((_, annotation)) => {
                self.parse_entry(MenuHandle::ROOT, key, command, annotation);
            }
            None => log::trace!("Skipping line without menu annotation: {line:?}"),
        }
    }

    /// Interprets an annotation inside the given container.
    ///
    /// `key` is the key hint shown next to leaf titles and `command` the
    /// command bound to them.
    pub fn parse_entry(&mut self, container: MenuHandle, key: &str, command: &str, annotation: &str) {
        let (segment, rest) = text::split_path(annotation);
        let (name, comment) = match segment.find('#') {
            Some(index) => segment.split_at(index),
            None => (segment, ""),
        };
        let name = name.trim();

        if name.is_empty() {
            log::debug!("Skipping menu entry without a name: {annotation:?}");
            return;
        }

        let title = text::unescape_segment(name);

        let Some(rest) = rest else {
            self.parse_leaf(container, key, command, &title, comment);
            return;
        };

        let (submenu, _, _) = self.menu.append_or_get_submenu(container, &escape_title(&title));

        // A comment on a branch ends the path.
        if comment.trim().is_empty() {
            self.parse_entry(submenu, key, command, rest);
        }
    }

    fn parse_leaf(&mut self, container: MenuHandle, key: &str, command: &str, name: &str, comment: &str) {
        if is_separator(name, self.uosc) {
            self.menu.append_separator(container);
            return;
        }

        if let Some(keyword) = comment.trim_start().strip_prefix(MENU_PREFIX_DYN) {
            let (submenu, id, created) = self.menu.append_or_get_submenu(container, &escape_title(name));
            let keyword = keyword.split('#').next().unwrap_or_default().trim();

            if created && !keyword.is_empty() {
                let _ = self.registry.register(self.menu, submenu, id, keyword);
            }
            return;
        }

        let id = self
            .menu
            .append_item(container, format_title(name, key), Some(command.to_owned()));

        if command.is_empty() || command.starts_with('#') {
            let _ = self.menu.set_enabled(id, false);
        }
    }
}

/// Parses a whole configuration file into a new [`Menu`] and [`Registry`].
pub fn parse(source: &str, uosc: bool) -> (Menu, Registry) {
    let mut menu = Menu::new();
    let mut registry = Registry::new();

    Parser::new(&mut menu, &mut registry, uosc).parse(source);

    (menu, registry)
}
