//! The menu controller, tying the parsed menu to host events.

use crate::config::Config;
use crate::dynamic::Registry;
use crate::error::Error;
use crate::host::{DEFAULT_INPUT_CONF, Dispatch, Host};
use crate::menu::{Menu, MenuId};
use crate::parser;
use crate::state::PlayerState;

/// A point in window client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new [`Point`].
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle with an exclusive right and bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge, exclusive.
    pub right: i32,
    /// Bottom edge, exclusive.
    pub bottom: i32,
}

impl Rect {
    /// Returns `true` if the point lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Owns a loaded menu and its dynamic submenus.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    config: Config,
    menu: Menu,
    registry: Registry,
}

impl MenuController {
    /// Builds a controller from configuration text.
    #[must_use]
    pub fn from_source(source: &str, config: Config) -> Self {
        let (menu, registry) = parser::parse(source, config.uosc);

        log::debug!(
            "Loaded menu with {} top-level entries and {} dynamic menus",
            menu.len(crate::menu::MenuHandle::ROOT),
            registry.len()
        );

        Self {
            config,
            menu,
            registry,
        }
    }

    /// Loads the `input.conf` named by the host.
    ///
    /// An unreadable file yields an empty menu.
    pub fn load(host: &impl Host, config: Config) -> Self {
        match read_input_conf(host) {
            Ok(source) => Self::from_source(&source, config),
            Err(error) => {
                log::warn!("Menu not loaded: {error}");
                Self::from_source("", config)
            }
        }
    }

    /// Reloads the menu from the host, dropping every identifier handed out
    /// so far.
    pub fn reload(&mut self, host: &impl Host) {
        *self = Self::load(host, self.config.clone());
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the menu.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Returns the dynamic submenus.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Rebuilds every dynamic submenu from the given state.
    pub fn rebuild(&mut self, state: &PlayerState) {
        self.registry.rebuild(&mut self.menu, state);
    }

    /// Prepares the menu for display at `point`.
    ///
    /// Returns `false` without touching the menu if `point` is outside the
    /// client area. Otherwise the dynamic submenus are rebuilt and the
    /// caller shows the menu.
    pub fn open(&mut self, point: Point, client: Rect, state: &PlayerState) -> bool {
        if !client.contains(point) {
            return false;
        }

        self.rebuild(state);
        true
    }

    /// Dispatches the command bound to an activated item.
    ///
    /// Returns `false` if the item has no command.
    pub fn activate(&self, id: MenuId, dispatch: &impl Dispatch) -> bool {
        match self.menu.command(id) {
            Some(command) => {
                log::debug!("Menu item {id} activated: {command}");
                dispatch.command_async(command);
                true
            }
            None => false,
        }
    }
}

fn read_input_conf(host: &impl Host) -> Result<String, Error> {
    let path = host
        .input_conf()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_INPUT_CONF.to_owned());

    host.read_file(&path)
        .map_err(|source| Error::Io { path, source })
}
