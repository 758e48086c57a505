//! Native popup menus for Windows.
//!
//! A [`PopupMenu`] mirrors the [`Menu`] of a [`MenuController`] as a Win32
//! `HMENU` and tracks it at the cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use mpv_menu_windows::PopupMenu;
//!
//! let mut popup = PopupMenu::new();
//!
//! // In the window procedure, on WM_CONTEXTMENU:
//! if let Some(id) = popup.show(hwnd, x, y, &mut controller, &state)? {
//!     let _ = controller.activate(id, &sender);
//! }
//! ```

use std::ffi::c_void;
use std::ptr::NonNull;

use mpv_menu_core::menu::{Entry, EntryKind, ItemState, Menu, MenuHandle, MenuId};
use mpv_menu_core::{MenuController, PlayerState, Point, Rect};

use windows::Win32::Foundation::{HWND, POINT, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{ClientToScreen, ScreenToClient};
use windows::Win32::UI::WindowsAndMessaging::{
    CreatePopupMenu, DestroyMenu, GetClientRect, HMENU, InsertMenuItemW, MENU_ITEM_STATE,
    MENU_ITEM_TYPE, MENUITEMINFOW, MFS_CHECKED, MFS_DISABLED, MFT_RADIOCHECK, MFT_SEPARATOR,
    MFT_STRING, MIIM_FTYPE, MIIM_ID, MIIM_STATE, MIIM_STRING, MIIM_SUBMENU, SetForegroundWindow,
    TPM_RETURNCMD, TPM_RIGHTBUTTON, TrackPopupMenuEx,
};
use windows::core::PWSTR;

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

impl From<windows::core::Error> for PopupError {
    fn from(error: windows::core::Error) -> Self {
        PopupError::WindowsError(error.message())
    }
}

/// A native popup menu, rebuilt only when the menu contents change.
///
/// Dynamic rows get fresh identifiers on every open, so the cached `HMENU`
/// is only reused while no dynamic submenu has rows.
#[derive(Debug, Default)]
pub struct PopupMenu {
    native: Option<(HMENU, u64)>,
}

impl PopupMenu {
    /// Creates an empty [`PopupMenu`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the menu at the given screen position and waits for a choice.
    ///
    /// Returns `Ok(None)` if the position is outside the client area of
    /// `hwnd` or the menu was dismissed.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is invalid or a native menu could not
    /// be created.
    pub fn show(
        &mut self,
        hwnd: NonNull<c_void>,
        x: i32,
        y: i32,
        controller: &mut MenuController,
        state: &PlayerState,
    ) -> Result<Option<MenuId>, PopupError> {
        let hwnd = HWND(hwnd.as_ptr());

        let mut client = RECT::default();
        let mut point = POINT { x, y };

        #[allow(unsafe_code)]
        unsafe {
            GetClientRect(hwnd, &mut client).map_err(|_| PopupError::InvalidWindow)?;
            let _ = ScreenToClient(hwnd, &mut point);
        }

        let client = Rect {
            left: client.left,
            top: client.top,
            right: client.right,
            bottom: client.bottom,
        };

        if !controller.open(Point::new(point.x, point.y), client, state) {
            log::trace!("Popup position outside client area: ({x}, {y})");
            return Ok(None);
        }

        let hmenu = self.native(controller.menu())?;

        #[allow(unsafe_code)]
        let command = unsafe {
            let _ = ClientToScreen(hwnd, &mut point);
            let _ = SetForegroundWindow(hwnd);

            TrackPopupMenuEx(
                hmenu,
                (TPM_RETURNCMD | TPM_RIGHTBUTTON).0,
                point.x,
                point.y,
                hwnd,
                None,
            )
        };

        Ok(u32::try_from(command.0)
            .ok()
            .filter(|id| *id != 0)
            .map(MenuId::from_u32))
    }

    fn native(&mut self, menu: &Menu) -> Result<HMENU, PopupError> {
        let signature = menu.signature();

        match self.native {
            Some((hmenu, cached)) if cached == signature => return Ok(hmenu),
            _ => self.destroy(),
        }

        let hmenu = build(menu, MenuHandle::ROOT)?;
        self.native = Some((hmenu, signature));

        log::debug!("Built native popup menu (signature {signature:#x})");

        Ok(hmenu)
    }

    fn destroy(&mut self) {
        if let Some((hmenu, _)) = self.native.take() {
            // Destroys every submenu as well.
            #[allow(unsafe_code)]
            unsafe {
                let _ = DestroyMenu(hmenu);
            }
        }
    }
}

impl Drop for PopupMenu {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn build(menu: &Menu, handle: MenuHandle) -> Result<HMENU, PopupError> {
    #[allow(unsafe_code)]
    let hmenu = unsafe { CreatePopupMenu()? };

    for (position, entry) in menu.entries(handle).iter().enumerate() {
        if let Err(error) = insert(menu, hmenu, position, entry) {
            #[allow(unsafe_code)]
            unsafe {
                let _ = DestroyMenu(hmenu);
            }
            return Err(error);
        }
    }

    Ok(hmenu)
}

fn insert(menu: &Menu, hmenu: HMENU, position: usize, entry: &Entry) -> Result<(), PopupError> {
    let mut info = MENUITEMINFOW {
        cbSize: std::mem::size_of::<MENUITEMINFOW>() as u32,
        fMask: MIIM_FTYPE | MIIM_STATE,
        fState: item_state(entry.state),
        ..Default::default()
    };

    if let Some(id) = entry.id {
        info.fMask |= MIIM_ID;
        info.wID = id.as_u32();
    }

    let mut title = Vec::new();

    match &entry.kind {
        EntryKind::Separator => {
            info.fType = MFT_SEPARATOR;
        }
        EntryKind::Item { title: text, .. } => {
            info.fType = item_type(entry.state);
            title = to_wide(text);
        }
        EntryKind::Submenu { title: text, menu: child } => {
            info.fType = MFT_STRING;
            info.fMask |= MIIM_SUBMENU;
            info.hSubMenu = build(menu, *child)?;
            title = to_wide(text);
        }
    }

    if !title.is_empty() {
        info.fMask |= MIIM_STRING;
        info.dwTypeData = PWSTR(title.as_mut_ptr());
        info.cch = (title.len() - 1) as u32;
    }

    #[allow(unsafe_code)]
    let result = unsafe { InsertMenuItemW(hmenu, position as u32, TRUE, &info) };

    if let Err(error) = result {
        if !info.hSubMenu.is_invalid() {
            #[allow(unsafe_code)]
            unsafe {
                let _ = DestroyMenu(info.hSubMenu);
            }
        }
        return Err(error.into());
    }

    Ok(())
}

fn item_type(state: ItemState) -> MENU_ITEM_TYPE {
    if state.contains(ItemState::RADIO) {
        MFT_STRING | MFT_RADIOCHECK
    } else {
        MFT_STRING
    }
}

fn item_state(state: ItemState) -> MENU_ITEM_STATE {
    let mut native = MENU_ITEM_STATE::default();

    if state.contains(ItemState::CHECKED) {
        native |= MFS_CHECKED;
    }
    if state.contains(ItemState::DISABLED) {
        native |= MFS_DISABLED;
    }

    native
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
