use allocation_task::allocation::Recipient;
use allocation_task::catalog::{AllocationCatalog, AllocationItem};
use allocation_task::events::{CustomCursor, Key, KeyPress, ScreenEvent};
use allocation_task::fonts::TaskFonts;
use allocation_task::headful::host::TaskHost;
use allocation_task::results::ResultLog;
use allocation_task::settings::TaskSettings;
use allocation_task::view::GameView;
use engine::graphics::{CpuRenderer, Renderer2d};
use engine::surface::{RgbaBufferSurface, SurfaceSize};

const SCREEN: SurfaceSize = SurfaceSize::new(1280, 720);

fn host(start_round: u32) -> TaskHost {
    host_with(AllocationCatalog::default(), start_round)
}

fn host_with(catalog: AllocationCatalog, start_round: u32) -> TaskHost {
    TaskHost::new(catalog, TaskFonts::default(), start_round, SCREEN, None)
}

fn numbered_catalog(rounds: u32) -> AllocationCatalog {
    let items = (1..=rounds)
        .map(|i| AllocationItem::new(format!("item{i}"), 5))
        .collect();
    AllocationCatalog::new(items).unwrap()
}

fn render(host: &mut TaskHost) -> RgbaBufferSurface {
    let mut surface = RgbaBufferSurface::new(SCREEN);
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), SCREEN);
        gfx.begin_frame(SCREEN);
        host.render(&mut gfx);
    }
    surface
}

fn click(host: &mut TaskHost, (x, y): (u32, u32)) {
    host.dispatch(ScreenEvent::PointerMoved { x, y });
    host.dispatch(ScreenEvent::PointerDown { x, y });
    host.dispatch(ScreenEvent::PointerUp { x, y });
}

/// Types the whole total into the first field and confirms.
fn complete_task(host: &mut TaskHost) {
    let task = host.task().expect("task open");
    let field = task.layout().field(Recipient::OwnGroup).center();
    let confirm = task.layout().confirm.center();
    let total = task.state().total();

    click(host, field);
    for d in total.to_string().chars() {
        assert!(host.dispatch(ScreenEvent::digit(d)));
    }
    click(host, confirm);
}

#[test]
fn confirming_switches_to_play_and_records_the_outcome() {
    let mut host = host(2);
    complete_task(&mut host);

    assert_eq!(host.view(), GameView::Play { round: 2 });
    assert!(host.task().is_none());
    let outcome = &host.outcomes()[0];
    assert_eq!(outcome.item, "blanket");
    assert_eq!((outcome.own_group, outcome.other_group), (10, 0));
    assert_eq!(host.play().last_outcome(), Some(outcome));
}

#[test]
fn next_round_opens_a_fresh_task() {
    let mut host = host(1);
    complete_task(&mut host);
    assert!(host.dispatch(ScreenEvent::key(Key::Enter)));

    assert_eq!(host.view(), GameView::PlayerTask { round: 2 });
    let task = host.task().expect("new task");
    assert_eq!(task.state().item().name, "blanket");
    assert_eq!(task.state().allocations(), [0, 0]);
}

#[test]
fn rounds_stop_at_twelve() {
    let mut host = host(12);
    complete_task(&mut host);
    host.dispatch(ScreenEvent::Key(KeyPress {
        key: Key::Character,
        text: Some('n'),
    }));
    assert_eq!(host.view(), GameView::PlayerTask { round: 12 });
    assert_eq!(host.task().unwrap().state().item().name, "mask");
}

#[test]
fn short_catalog_caps_rounds_at_its_length() {
    let catalog = AllocationCatalog::new(vec![
        AllocationItem::new("rope", 3),
        AllocationItem::new("lamp", 4),
    ])
    .unwrap();
    let mut host = host_with(catalog, 2);
    assert_eq!(host.last_round(), 2);

    complete_task(&mut host);
    host.dispatch(ScreenEvent::key(Key::Enter));
    assert_eq!(host.view(), GameView::PlayerTask { round: 2 });
    assert_eq!(host.task().unwrap().state().item().name, "lamp");
}

#[test]
fn long_catalog_reaches_its_last_rounds() {
    let mut host = host_with(numbered_catalog(14), 12);
    assert_eq!(host.last_round(), 14);

    for expected in [13, 14, 14] {
        complete_task(&mut host);
        host.dispatch(ScreenEvent::key(Key::Enter));
        assert_eq!(host.view(), GameView::PlayerTask { round: expected });
        assert_eq!(
            host.task().unwrap().state().item().name,
            format!("item{expected}")
        );
    }
}

#[test]
fn start_round_past_the_catalog_is_clamped() {
    let host = host_with(numbered_catalog(3), 9);
    assert_eq!(host.view(), GameView::PlayerTask { round: 3 });
    assert_eq!(host.task().unwrap().state().item().name, "item3");
}

#[test]
fn escape_on_the_play_screen_quits() {
    let mut host = host(3);
    assert!(!host.dispatch(ScreenEvent::key(Key::Escape)));
    assert!(!host.should_quit());

    complete_task(&mut host);
    assert!(host.dispatch(ScreenEvent::key(Key::Escape)));
    assert!(host.should_quit());
}

#[test]
fn cursor_follows_hover_hints() {
    let mut host = host(1);
    let field = host.task().unwrap().layout().field(Recipient::OtherGroup).center();
    host.dispatch(ScreenEvent::PointerMoved {
        x: field.0,
        y: field.1,
    });
    assert_eq!(host.cursor(), CustomCursor::Point);
    host.dispatch(ScreenEvent::PointerMoved { x: 3, y: 3 });
    assert_eq!(host.cursor(), CustomCursor::Arrow);
}

#[test]
fn both_views_render() {
    let mut host = host(1);
    let task_frame = render(&mut host);
    complete_task(&mut host);
    let play_frame = render(&mut host);
    assert_ne!(task_frame.frame(), play_frame.frame());
    let (x, y) = host.play().panel().center();
    assert!(play_frame.pixel(x, y).is_some());
}

#[test]
fn outcomes_are_appended_to_the_result_log() {
    let dir = std::env::temp_dir().join(format!("allocation-task-host-{}", std::process::id()));
    let path = dir.join("results.jsonl");
    let settings = TaskSettings {
        start_round: 4,
        results_path: Some(path.clone()),
        ..TaskSettings::default()
    };
    let mut host = TaskHost::from_settings(&settings).unwrap();
    complete_task(&mut host);
    host.dispatch(ScreenEvent::key(Key::Enter));
    complete_task(&mut host);

    let recorded = ResultLog::new(&path).read_all().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].item, "boot");
    assert_eq!(recorded[1].item, "jean");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn custom_catalog_from_settings() {
    let settings = TaskSettings {
        catalog: Some(vec![AllocationItem::new("rope", 3)]),
        ..TaskSettings::default()
    };
    let host = TaskHost::from_settings(&settings).unwrap();
    assert_eq!(host.task().unwrap().state().item().name, "rope");

    let bad = TaskSettings {
        catalog: Some(Vec::new()),
        ..TaskSettings::default()
    };
    assert!(TaskHost::from_settings(&bad).is_err());
}
