//! Stub implementations for non-Windows platforms.
//!
//! These provide the same API as the Windows implementations but return errors
//! or no-ops, allowing the crate to compile on all platforms.

use std::ffi::c_void;
use std::ptr::NonNull;

use mpv_menu_core::{MenuController, MenuId, PlayerState};

/// Errors that can occur while showing a popup menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    /// The provided window handle is invalid.
    InvalidWindow,
    /// Popup menus are not supported on this platform.
    NotSupported,
    /// Windows API error.
    WindowsError(String),
}

impl std::fmt::Display for PopupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupError::InvalidWindow => write!(f, "Invalid window handle"),
            PopupError::NotSupported => write!(f, "Popup menus not supported on this platform"),
            PopupError::WindowsError(msg) => write!(f, "Windows error: {}", msg),
        }
    }
}

impl std::error::Error for PopupError {}

/// A native popup menu (stub for non-Windows platforms).
#[derive(Debug, Default)]
pub struct PopupMenu;

impl PopupMenu {
    /// Creates an empty [`PopupMenu`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Always returns [`PopupError::NotSupported`] on non-Windows platforms.
    ///
    /// # Errors
    ///
    /// Always returns an error on non-Windows platforms.
    pub fn show(
        &mut self,
        _hwnd: NonNull<c_void>,
        _x: i32,
        _y: i32,
        _controller: &mut MenuController,
        _state: &PlayerState,
    ) -> Result<Option<MenuId>, PopupError> {
        Err(PopupError::NotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_not_supported() {
        let mut controller = MenuController::default();
        let mut popup = PopupMenu::new();

        let result = popup.show(
            NonNull::dangling(),
            0,
            0,
            &mut controller,
            &PlayerState::default(),
        );

        assert_eq!(result, Err(PopupError::NotSupported));
        assert_eq!(
            PopupError::NotSupported.to_string(),
            "Popup menus not supported on this platform"
        );
    }
}
