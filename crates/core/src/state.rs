//! Snapshots of player state read when the menu opens.
//!
//! A list set to `None` means the host could not provide it; the matching
//! dynamic submenus render empty.

/// The kind of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// A video track.
    Video,
    /// An audio track.
    Audio,
    /// A subtitle track.
    Sub,
}

impl TrackKind {
    /// Parses the `type` field of mpv's `track-list`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "sub" => Some(Self::Sub),
            _ => None,
        }
    }
}

/// An entry of the track list.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Track kind.
    pub kind: TrackKind,
    /// Track id, unique per kind.
    pub id: i64,
    /// Track title.
    pub title: Option<String>,
    /// Track language.
    pub lang: Option<String>,
    /// Whether the track is selected in any role.
    pub selected: bool,
}

/// An entry of the chapter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    /// Chapter title.
    pub title: Option<String>,
    /// Start offset in seconds.
    pub time: f64,
}

/// An entry of the edition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    /// Edition id.
    pub id: i64,
    /// Edition title.
    pub title: Option<String>,
}

/// An entry of the audio device list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    /// Device name, as passed to `audio-device`.
    pub name: String,
    /// Human readable description.
    pub description: Option<String>,
}

/// Player state used to rebuild dynamic submenus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    /// Selected video track id.
    pub vid: Option<i64>,
    /// Selected audio track id.
    pub aid: Option<i64>,
    /// Selected primary subtitle track id.
    pub sid: Option<i64>,
    /// Selected secondary subtitle track id.
    pub secondary_sid: Option<i64>,
    /// The track list.
    pub track_list: Option<Vec<Track>>,
    /// The chapter list.
    pub chapter_list: Option<Vec<Chapter>>,
    /// Index of the current chapter.
    pub chapter: Option<i64>,
    /// The edition list.
    pub edition_list: Option<Vec<Edition>>,
    /// Id of the current edition.
    pub edition: Option<i64>,
    /// The audio device list.
    pub audio_device_list: Option<Vec<AudioDevice>>,
    /// Name of the current audio device.
    pub audio_device: Option<String>,
}
