//! Line scanning and title escaping for `input.conf` menus.
//!
//! Native menus treat `&` as a mnemonic marker (e.g. `"&File"` underlines
//! `F`), so every title built from user text is escaped with `&&` before it
//! reaches a menu.

/// The long-form menu annotation marker.
pub const MENU_PREFIX: &str = "#menu:";

/// The short-form menu annotation marker, recognized in uosc mode.
pub const MENU_PREFIX_UOSC: &str = "#!";

/// The marker that turns a submenu into a dynamic one.
pub const MENU_PREFIX_DYN: &str = "#@";

/// The mnemonic marker of native menus.
pub const MNEMONIC: char = '&';

/// The key placeholder meaning "no key bound".
const NO_KEY: &str = "_";

/// Splits a raw configuration line into its key and command.
///
/// Lines starting with `#` are keyless commands in uosc mode and are skipped
/// otherwise. Returns `None` for lines that carry nothing.
///
/// # Examples
/// - `"Ctrl+o  script-binding open"` → `("Ctrl+o", "script-binding open")`
/// - `"# set pause yes #! Pause"` (uosc) → `("", "set pause yes #! Pause")`
pub fn split_field(line: &str, uosc: bool) -> Option<(&str, &str)> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();

    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix('#') {
        return uosc.then(|| ("", rest.trim()));
    }

    match line.find(char::is_whitespace) {
        Some(end) => Some((&line[..end], line[end..].trim())),
        None => Some((line, "")),
    }
}

/// Splits a command at its menu annotation marker.
///
/// Returns the trimmed text before and after the marker, or `None` when no
/// marker is present or nothing follows it.
pub fn split_menu_annotation(command: &str, uosc: bool) -> Option<(&str, &str)> {
    if command.is_empty() {
        return None;
    }

    let (left, right) = command.split_once(MENU_PREFIX).or_else(|| {
        if uosc {
            command.split_once(MENU_PREFIX_UOSC)
        } else {
            None
        }
    })?;

    let right = right.trim();

    if right.is_empty() {
        None
    } else {
        Some((left.trim(), right))
    }
}

/// Escapes mnemonic markers so the title displays literally.
///
/// # Examples
/// - `"Save & Close"` → `"Save && Close"`
/// - `"Plain"` → `"Plain"`
pub fn escape_title(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if c == MNEMONIC {
            result.push(MNEMONIC);
        }
        result.push(c);
    }

    result
}

/// Formats a title as `name\tkey` and escapes it.
///
/// The key hint is omitted when empty or `_`.
pub fn format_title(name: &str, key: &str) -> String {
    if key.is_empty() || key == NO_KEY {
        escape_title(name)
    } else {
        escape_title(&format!("{name}\t{key}"))
    }
}

/// Returns `true` if the annotation names a separator.
pub fn is_separator(text: &str, uosc: bool) -> bool {
    text == "-" || (uosc && text.starts_with("---"))
}

/// Splits a menu path at its first unescaped `>`.
///
/// A `\>` sequence does not split. Leading `>` characters are skipped, so
/// empty path segments collapse.
pub(crate) fn split_path(text: &str) -> (&str, Option<&str>) {
    let text = text.trim_start_matches('>');
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '>' if !escaped => return (&text[..i], Some(&text[i..])),
            _ => escaped = false,
        }
    }

    (text, None)
}

/// Replaces `\>` escapes in a path segment with a literal `>`.
pub(crate) fn unescape_segment(segment: &str) -> String {
    segment.replace("\\>", ">")
}
