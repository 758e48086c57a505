//! mpv_menu is a right-click popup menu for mpv, configured from `input.conf`.
//!
//! Any key binding can show up in the menu by annotating its command:
//!
//! ```text
//! Ctrl+o  script-binding open    #menu: File > Open...
//! _       ignore                 #menu: -
//! _       ignore                 #menu: Audio > Tracks #@ tracks/audio
//! ```
//!
//! The annotation is a `>` separated path of submenus. A trailing `#@`
//! keyword turns the last submenu into a dynamic one, filled from the
//! player state every time the menu opens.
//!
//! # Usage
//!
//! ```
//! use mpv_menu::{CommandSender, Config, MenuController, MenuHandle, PlayerState, Point, Rect};
//!
//! let mut controller = MenuController::from_source(
//!     "Ctrl+s  async screenshot  #menu: Tools > Screenshot",
//!     Config::default(),
//! );
//!
//! let client = Rect { left: 0, top: 0, right: 1280, bottom: 720 };
//! assert!(controller.open(Point::new(20, 20), client, &PlayerState::default()));
//!
//! let (tools, _) = controller.menu().find_submenu(MenuHandle::ROOT, "Tools").unwrap();
//! let id = controller.menu().entries(tools)[0].id.unwrap();
//!
//! let (sender, commands) = CommandSender::channel();
//! assert!(controller.activate(id, &sender));
//! assert_eq!(commands.try_recv().unwrap(), "async screenshot  #menu: Tools > Screenshot");
//! ```
//!
//! On Windows the `shell` module shows the menu natively with
//! `shell::PopupMenu`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use mpv_menu_core as core;

#[cfg(target_os = "windows")]
pub use mpv_menu_windows as shell;

pub use crate::core::config;
pub use crate::core::menu;
pub use crate::core::projector;
pub use crate::core::state;
pub use crate::core::{
    CommandSender, Config, Dispatch, Error, Host, ItemState, Menu, MenuController, MenuHandle,
    MenuId, PlayerState, Point, Provider, Rect,
};
