//! Projection of player state into dynamic submenu rows.
//!
//! Every [`Provider`] is a pure function of a [`PlayerState`]. Radio marking
//! is positional, so rows are produced in exactly the snapshot's order.

use std::fmt;

use crate::menu::ItemState;
use crate::state::{PlayerState, Track, TrackKind};
use crate::text::{escape_title, format_title};

/// A row of a dynamic submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Escaped display text.
    pub title: String,
    /// Command dispatched when the row is activated.
    pub command: String,
    /// Display state.
    pub state: ItemState,
}

impl Row {
    fn new(title: String, command: String) -> Self {
        Self {
            title,
            command,
            state: ItemState::empty(),
        }
    }
}

/// The rows of a dynamic submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Rows in display order.
    pub rows: Vec<Row>,
    /// Position of the row checked as a radio item.
    pub radio: Option<usize>,
}

/// A source of dynamic submenu contents, selected by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// `tracks/video`
    VideoTracks,
    /// `tracks/audio`
    AudioTracks,
    /// `tracks/sub`
    SubTracks,
    /// `tracks/sub-secondary`
    SecondarySubTracks,
    /// `chapters`
    Chapters,
    /// `editions`
    Editions,
    /// `audio-devices`
    AudioDevices,
}

impl Provider {
    /// All providers, in keyword table order.
    pub const ALL: [Provider; 7] = [
        Provider::VideoTracks,
        Provider::AudioTracks,
        Provider::SubTracks,
        Provider::SecondarySubTracks,
        Provider::Chapters,
        Provider::Editions,
        Provider::AudioDevices,
    ];

    /// Returns the keyword selecting this provider.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Provider::VideoTracks => "tracks/video",
            Provider::AudioTracks => "tracks/audio",
            Provider::SubTracks => "tracks/sub",
            Provider::SecondarySubTracks => "tracks/sub-secondary",
            Provider::Chapters => "chapters",
            Provider::Editions => "editions",
            Provider::AudioDevices => "audio-devices",
        }
    }

    /// Looks up a provider by its exact keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Projects the player state into rows.
    #[must_use]
    pub fn project(self, state: &PlayerState) -> Projection {
        match self {
            Provider::VideoTracks => {
                project_tracks(state.track_list.as_deref(), TrackKind::Video, "vid", state.vid)
            }
            Provider::AudioTracks => {
                project_tracks(state.track_list.as_deref(), TrackKind::Audio, "aid", state.aid)
            }
            Provider::SubTracks => {
                project_tracks(state.track_list.as_deref(), TrackKind::Sub, "sid", state.sid)
            }
            Provider::SecondarySubTracks => project_tracks(
                state.track_list.as_deref(),
                TrackKind::Sub,
                "secondary-sid",
                state.secondary_sid,
            ),
            Provider::Chapters => project_chapters(state),
            Provider::Editions => project_editions(state),
            Provider::AudioDevices => project_audio_devices(state),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn project_tracks(
    tracks: Option<&[Track]>,
    kind: TrackKind,
    property: &str,
    current: Option<i64>,
) -> Projection {
    let current = current.filter(|id| *id >= 0);
    let mut rows = Vec::new();

    for track in tracks.unwrap_or_default().iter().filter(|t| t.kind == kind) {
        let mut row = Row::new(
            format_title(
                track.title.as_deref().unwrap_or_default(),
                track.lang.as_deref().unwrap_or_default(),
            ),
            format!("set {property} {}", track.id),
        );

        if track.selected {
            row.state.insert(ItemState::CHECKED);

            // A subtitle selected in the other role cannot be picked here.
            if kind == TrackKind::Sub && current != Some(track.id) {
                row.state.insert(ItemState::DISABLED);
            }
        }

        rows.push(row);
    }

    if !rows.is_empty() {
        let mut off = Row::new(escape_title("Off"), format!("set {property} no"));
        if current.is_none() {
            off.state.insert(ItemState::CHECKED);
        }
        rows.push(off);
    }

    Projection { rows, radio: None }
}

/// Formats a chapter offset as `[HH:MM:SS]`.
fn chapter_time(time: f64) -> String {
    let seconds = time as i64;

    format!(
        "[{:02}:{:02}:{:02}]",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}

fn project_chapters(state: &PlayerState) -> Projection {
    let Some(chapters) = state.chapter_list.as_deref() else {
        return Projection::default();
    };

    let rows: Vec<_> = chapters
        .iter()
        .map(|chapter| {
            Row::new(
                format_title(
                    chapter.title.as_deref().unwrap_or_default(),
                    &chapter_time(chapter.time),
                ),
                format!("seek {:.6} absolute", chapter.time),
            )
        })
        .collect();

    let radio = state
        .chapter
        .and_then(|index| usize::try_from(index).ok())
        .filter(|index| *index < rows.len());

    Projection { rows, radio }
}

fn project_editions(state: &PlayerState) -> Projection {
    let Some(editions) = state.edition_list.as_deref() else {
        return Projection::default();
    };

    let rows = editions
        .iter()
        .map(|edition| {
            Row::new(
                escape_title(edition.title.as_deref().unwrap_or_default()),
                format!("set edition {}", edition.id),
            )
        })
        .collect();

    let radio = state
        .edition
        .and_then(|current| editions.iter().position(|e| e.id == current));

    Projection { rows, radio }
}

fn project_audio_devices(state: &PlayerState) -> Projection {
    let Some(devices) = state.audio_device_list.as_deref() else {
        return Projection::default();
    };

    let rows = devices
        .iter()
        .map(|device| {
            let title = device
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(&device.name);

            Row::new(
                escape_title(title),
                format!("set audio-device {}", device.name),
            )
        })
        .collect();

    let radio = state
        .audio_device
        .as_deref()
        .and_then(|current| devices.iter().position(|d| d.name == current));

    Projection { rows, radio }
}
