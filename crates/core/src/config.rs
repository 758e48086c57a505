//! Plugin configuration.

use crate::error::Error;

/// Options of the menu plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Enables the uosc compatible grammar.
    ///
    /// Adds the `#!` annotation marker, keyless `#` lines and `---`
    /// separators.
    pub uosc: bool,
}

impl Config {
    /// The prefix of the plugin's options on the mpv command line.
    pub const PREFIX: &'static str = "menu-";

    /// Parses options in mpv's `script-opts` format.
    ///
    /// Each line holds one `key=value` pair; blank lines and `#` comments are
    /// ignored. Keys may carry the [`Config::PREFIX`].
    ///
    /// # Example
    /// ```
    /// use mpv_menu_core::Config;
    ///
    /// let config = Config::from_script_opts("# menu.conf\nuosc=yes\n")?;
    /// assert!(config.uosc);
    /// # Ok::<(), mpv_menu_core::Error>(())
    /// ```
    pub fn from_script_opts(text: &str) -> Result<Self, Error> {
        let mut config = Self::default();

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = key.trim();
            let key = key.strip_prefix(Self::PREFIX).unwrap_or(key);

            match key {
                "uosc" => config.uosc = parse_bool(key, value.trim())?,
                _ => return Err(Error::UnknownOption(key.to_owned())),
            }
        }

        Ok(config)
    }

    /// Parses a RON document.
    #[cfg(feature = "serde")]
    pub fn from_ron(text: &str) -> Result<Self, Error> {
        Ok(ron::from_str(text)?)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Error> {
    match value {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(Error::InvalidBoolean {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
