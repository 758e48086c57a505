//! End-to-end tests of the menu controller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use crate::{
    Chapter, Config, Dispatch, EntryKind, Host, ItemState, MenuController, MenuHandle, MenuId,
    PlayerState, Point, Rect, Track, TrackKind,
};

const CLIENT: Rect = Rect {
    left: 0,
    top: 0,
    right: 1280,
    bottom: 720,
};

const INSIDE: Point = Point::new(100, 100);

#[derive(Default)]
struct Recorder {
    commands: RefCell<Vec<String>>,
}

impl Dispatch for Recorder {
    fn command_async(&self, command: &str) {
        self.commands.borrow_mut().push(command.to_owned());
    }
}

#[derive(Default)]
struct FakeHost {
    input_conf: Option<String>,
    files: HashMap<String, String>,
}

impl Host for FakeHost {
    fn input_conf(&self) -> Option<String> {
        self.input_conf.clone()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_owned()))
    }
}

fn sub_track(id: i64, title: &str, selected: bool) -> Track {
    Track {
        kind: TrackKind::Sub,
        id,
        title: Some(title.to_owned()),
        lang: None,
        selected,
    }
}

fn find(controller: &MenuController, menu: MenuHandle, title: &str) -> (MenuHandle, MenuId) {
    controller
        .menu()
        .find_submenu(menu, title)
        .unwrap_or_else(|| panic!("missing submenu {title:?}"))
}

fn items(controller: &MenuController, menu: MenuHandle) -> Vec<(String, String, ItemState)> {
    controller
        .menu()
        .entries(menu)
        .iter()
        .filter_map(|entry| match &entry.kind {
            EntryKind::Item { title, command } => Some((
                title.clone(),
                command.clone().unwrap_or_default(),
                entry.state,
            )),
            _ => None,
        })
        .collect()
}

#[test]
fn test_activation_dispatches_bound_command() {
    let controller = MenuController::from_source(
        "Ctrl+s  async screenshot  #menu: Tools > Screenshot",
        Config::default(),
    );
    let (tools, _) = find(&controller, MenuHandle::ROOT, "Tools");
    let id = controller.menu().entries(tools)[0].id.unwrap();
    let recorder = Recorder::default();

    assert!(controller.activate(id, &recorder));
    assert_eq!(
        recorder.commands.into_inner(),
        ["async screenshot  #menu: Tools > Screenshot"]
    );
}

#[test]
fn test_activation_without_command_is_noop() {
    let controller = MenuController::from_source("_ ignore #menu: Tools > -", Config::default());
    let (_, tools_id) = find(&controller, MenuHandle::ROOT, "Tools");
    let recorder = Recorder::default();

    assert!(!controller.activate(tools_id, &recorder));
    assert!(!controller.activate(MenuId::from_u32(1), &recorder));
    assert!(recorder.commands.into_inner().is_empty());
}

#[test]
fn test_separators_have_no_id_or_command() {
    let source = "\
        _ ignore #menu: -\n\
        # ignore #! -----\n\
        p cycle pause #menu: Pause\n";
    let controller = MenuController::from_source(source, Config { uosc: true });

    let entries = controller.menu().entries(MenuHandle::ROOT);
    assert_eq!(entries.len(), 3);
    for separator in &entries[..2] {
        assert!(matches!(separator.kind, EntryKind::Separator));
        assert_eq!(separator.id, None);
    }
}

#[test]
fn test_subtitle_menu() {
    let mut controller =
        MenuController::from_source("b #menu: Subtitles #@ tracks/sub", Config::default());
    let (subtitles, id) = find(&controller, MenuHandle::ROOT, "Subtitles");

    assert!(controller.menu().is_empty(subtitles));
    assert!(!controller.menu().entry(id).unwrap().is_enabled());

    let state = PlayerState {
        sid: Some(5),
        track_list: Some(vec![sub_track(5, "English", true)]),
        ..PlayerState::default()
    };
    assert!(controller.open(INSIDE, CLIENT, &state));

    assert!(controller.menu().entry(id).unwrap().is_enabled());
    assert_eq!(
        items(&controller, subtitles),
        [
            ("English".to_owned(), "set sid 5".to_owned(), ItemState::CHECKED),
            ("Off".to_owned(), "set sid no".to_owned(), ItemState::empty()),
        ]
    );
}

#[test]
fn test_audio_menu_under_static_path() {
    let mut controller = MenuController::from_source(
        "a #menu: Open File > Recent #@ tracks/audio",
        Config::default(),
    );
    let (open, _) = find(&controller, MenuHandle::ROOT, "Open File");
    let (recent, _) = find(&controller, open, "Recent");

    let state = PlayerState {
        aid: Some(1),
        track_list: Some(vec![
            Track {
                kind: TrackKind::Audio,
                ..sub_track(1, "English", true)
            },
            Track {
                kind: TrackKind::Audio,
                ..sub_track(2, "Spanish", false)
            },
        ]),
        ..PlayerState::default()
    };
    controller.rebuild(&state);

    let rows = items(&controller, recent);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].2, ItemState::CHECKED);
    assert_eq!(rows[1].1, "set aid 2");
    assert_eq!(rows[2].0, "Off");
}

#[test]
fn test_chapter_menu() {
    let mut controller =
        MenuController::from_source("_ ignore #menu: Chapters #@ chapters", Config::default());
    let (chapters, _) = find(&controller, MenuHandle::ROOT, "Chapters");

    let state = PlayerState {
        chapter_list: Some(vec![Chapter {
            title: Some("Intro".into()),
            time: 65.0,
        }]),
        chapter: Some(0),
        ..PlayerState::default()
    };
    controller.rebuild(&state);

    assert_eq!(
        items(&controller, chapters),
        [(
            "Intro\t[00:01:05]".to_owned(),
            "seek 65.000000 absolute".to_owned(),
            ItemState::CHECKED | ItemState::RADIO,
        )]
    );
}

#[test]
fn test_radio_menus_check_at_most_one() {
    let source = "\
        _ ignore #menu: Chapters #@ chapters\n\
        _ ignore #menu: Editions #@ editions\n\
        _ ignore #menu: Devices #@ audio-devices\n";
    let mut controller = MenuController::from_source(source, Config::default());
    assert_eq!(controller.registry().len(), 3);

    let mut state = PlayerState {
        chapter_list: Some(
            (0..4)
                .map(|i| Chapter {
                    title: None,
                    time: f64::from(i) * 60.0,
                })
                .collect(),
        ),
        chapter: Some(2),
        edition_list: Some(
            (0..3)
                .map(|id| crate::Edition {
                    id,
                    title: Some(format!("Edition {id}")),
                })
                .collect(),
        ),
        edition: Some(0),
        audio_device_list: Some(
            ["auto", "wasapi/a", "wasapi/b"]
                .into_iter()
                .map(|name| crate::AudioDevice {
                    name: name.to_owned(),
                    description: None,
                })
                .collect(),
        ),
        audio_device: Some("wasapi/b".into()),
        ..PlayerState::default()
    };

    let checked = |controller: &MenuController| -> Vec<usize> {
        controller
            .registry()
            .slots()
            .iter()
            .map(|slot| {
                controller
                    .menu()
                    .entries(slot.menu)
                    .iter()
                    .filter(|e| e.is_checked())
                    .count()
            })
            .collect()
    };

    controller.rebuild(&state);
    assert_eq!(checked(&controller), [1, 1, 1]);

    state.chapter = None;
    state.edition = Some(42);
    state.audio_device = Some("missing".into());
    controller.rebuild(&state);
    assert_eq!(checked(&controller), [0, 0, 0]);
}

#[test]
fn test_rebuild_replaces_previous_rows() {
    let mut controller =
        MenuController::from_source("_ ignore #menu: Subs #@ tracks/sub", Config::default());
    let (subs, id) = find(&controller, MenuHandle::ROOT, "Subs");

    let first = PlayerState {
        sid: Some(1),
        track_list: Some(vec![
            sub_track(1, "One", true),
            sub_track(2, "Two", false),
            sub_track(3, "Three", false),
        ]),
        ..PlayerState::default()
    };
    controller.rebuild(&first);
    assert_eq!(controller.menu().len(subs), 4);

    let second = PlayerState {
        track_list: Some(vec![sub_track(7, "Seven", false)]),
        ..PlayerState::default()
    };
    controller.rebuild(&second);

    let titles: Vec<_> = items(&controller, subs).into_iter().map(|(t, _, _)| t).collect();
    assert_eq!(titles, ["Seven", "Off"]);

    controller.rebuild(&PlayerState::default());
    assert!(controller.menu().is_empty(subs));
    assert!(!controller.menu().entry(id).unwrap().is_enabled());
}

#[test]
fn test_open_outside_client_area() {
    let mut controller =
        MenuController::from_source("_ ignore #menu: Subs #@ tracks/sub", Config::default());
    let (subs, _) = find(&controller, MenuHandle::ROOT, "Subs");

    let state = PlayerState {
        track_list: Some(vec![sub_track(1, "One", false)]),
        ..PlayerState::default()
    };

    assert!(!controller.open(Point::new(-5, 10), CLIENT, &state));
    assert!(!controller.open(Point::new(1280, 10), CLIENT, &state));
    assert!(controller.menu().is_empty(subs));
}

#[test]
fn test_load_from_default_path() {
    let mut host = FakeHost::default();
    let _ = host.files.insert(
        crate::DEFAULT_INPUT_CONF.to_owned(),
        "q quit #menu: Quit".to_owned(),
    );

    let controller = MenuController::load(&host, Config::default());
    assert_eq!(controller.menu().len(MenuHandle::ROOT), 1);

    host.input_conf = Some(String::new());
    let controller = MenuController::load(&host, Config::default());
    assert_eq!(controller.menu().len(MenuHandle::ROOT), 1);
}

#[test]
fn test_load_from_input_conf_property() {
    let mut host = FakeHost {
        input_conf: Some("~~/menu.conf".into()),
        ..FakeHost::default()
    };
    let _ = host.files.insert(
        "~~/menu.conf".to_owned(),
        "# cycle pause #! Pause\n".to_owned(),
    );

    let controller = MenuController::load(&host, Config { uosc: true });
    assert_eq!(controller.menu().len(MenuHandle::ROOT), 1);

    let controller = MenuController::load(&host, Config::default());
    assert!(controller.menu().is_empty(MenuHandle::ROOT));
}

#[test]
fn test_missing_file_yields_empty_menu() {
    let host = FakeHost::default();
    let mut controller = MenuController::load(&host, Config::default());

    assert!(controller.menu().is_empty(MenuHandle::ROOT));
    assert!(controller.registry().is_empty());
    assert!(controller.open(INSIDE, CLIENT, &PlayerState::default()));
}

#[test]
fn test_reload_picks_up_changes() {
    let mut host = FakeHost::default();
    let mut controller = MenuController::load(&host, Config::default());
    assert!(controller.menu().is_empty(MenuHandle::ROOT));

    let _ = host.files.insert(
        crate::DEFAULT_INPUT_CONF.to_owned(),
        "q quit #menu: Quit\n_ ignore #menu: Subs #@ tracks/sub\n".to_owned(),
    );
    controller.reload(&host);

    assert_eq!(controller.menu().len(MenuHandle::ROOT), 2);
    assert_eq!(controller.registry().len(), 1);
}

#[test]
fn test_unknown_dynamic_keyword_is_never_enterable() {
    let mut controller =
        MenuController::from_source("_ ignore #menu: Playlist #@ playlist", Config::default());
    let (playlist, id) = find(&controller, MenuHandle::ROOT, "Playlist");

    assert!(controller.open(INSIDE, CLIENT, &PlayerState::default()));

    assert!(controller.menu().is_empty(playlist));
    assert!(!controller.menu().entry(id).unwrap().is_enabled());
}
