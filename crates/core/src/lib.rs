//! The core of `mpv_menu`: a context menu described in mpv's `input.conf`.
//!
//! Bindings annotated with `#menu:` become menu entries:
//!
//! ```text
//! SPACE  cycle pause              #menu: Play/Pause
//! _      ignore                   #menu: -
//! _      ignore                   #menu: Audio > Tracks #@ tracks/audio
//! ```
//!
//! Parsing produces a platform-agnostic [`Menu`] plus a [`Registry`] of
//! dynamic submenus. Every time the menu opens, the registry refills those
//! submenus from a [`PlayerState`] snapshot. Shells render the [`Menu`]
//! natively and hand activated [`MenuId`]s back to the [`MenuController`].
//!
//! ```
//! use mpv_menu_core::{Config, MenuController, PlayerState, Point, Rect};
//!
//! let mut controller = MenuController::from_source(
//!     "q quit #menu: Quit",
//!     Config::default(),
//! );
//!
//! let client = Rect { left: 0, top: 0, right: 640, bottom: 480 };
//! assert!(controller.open(Point::new(10, 10), client, &PlayerState::default()));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod controller;
pub mod dynamic;
pub mod error;
pub mod host;
pub mod menu;
pub mod parser;
pub mod projector;
pub mod state;
pub mod text;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use controller::{MenuController, Point, Rect};
pub use dynamic::{DynamicSlot, Registry};
pub use error::Error;
pub use host::{CommandSender, DEFAULT_INPUT_CONF, Dispatch, Host};
pub use menu::{Entry, EntryKind, ItemState, Menu, MenuHandle, MenuId};
pub use parser::{Parser, parse};
pub use projector::{Projection, Provider, Row};
pub use state::{AudioDevice, Chapter, Edition, PlayerState, Track, TrackKind};
