//! Windows platform integration for mpv_menu.
//!
//! This crate shows the menu of a [`MenuController`] as a native Win32 popup
//! menu:
//!
//! - **Popup Menus**: Building an `HMENU` from the menu tree and tracking it
//!   at the cursor
//!
//! # Usage
//!
//! ```rust,ignore
//! use mpv_menu_windows::PopupMenu;
//!
//! let mut popup = PopupMenu::new();
//! if let Some(id) = popup.show(hwnd, x, y, &mut controller, &state)? {
//!     let _ = controller.activate(id, &sender);
//! }
//! ```
//!
//! # Platform Support
//!
//! This crate only does something on Windows. On other platforms, the types
//! exist but all operations return errors.
//!
//! [`MenuController`]: mpv_menu_core::MenuController

#![cfg_attr(docsrs, feature(doc_cfg))]

// Only compile the actual implementations on Windows
#[cfg(target_os = "windows")]
pub mod popup;

#[cfg(target_os = "windows")]
pub use popup::{PopupError, PopupMenu};

// Provide stub implementations for non-Windows platforms
#[cfg(not(target_os = "windows"))]
mod stubs;

// Re-export stubs as the popup module for non-Windows
#[cfg(not(target_os = "windows"))]
pub mod popup {
    //! Stub popup module for non-Windows platforms.
    pub use super::stubs::{PopupError, PopupMenu};
}

#[cfg(not(target_os = "windows"))]
pub use stubs::{PopupError, PopupMenu};
