use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use allocation_task::allocation::{Balance, Recipient};
use allocation_task::catalog::AllocationCatalog;
use allocation_task::events::{CustomCursor, GameState, HostEvent, Key, ScreenEvent};
use allocation_task::fonts::TaskFonts;
use allocation_task::player_task::PlayerTask;
use engine::surface::SurfaceSize;
use engine::ui::Rect;

const SCREEN: SurfaceSize = SurfaceSize::new(1280, 720);

struct Harness {
    task: PlayerTask,
    switches: Rc<RefCell<Vec<GameState>>>,
    events: Receiver<HostEvent>,
}

fn harness(round: u32) -> Harness {
    let switches = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&switches);
    let (tx, rx) = mpsc::channel();
    let task = PlayerTask::new(
        Box::new(move |target| sink.borrow_mut().push(target)),
        round,
        TaskFonts::default(),
        &AllocationCatalog::default(),
        tx,
        SCREEN,
    );
    Harness {
        task,
        switches,
        events: rx,
    }
}

fn centre(rect: Rect) -> (u32, u32) {
    rect.center()
}

impl Harness {
    fn press(&mut self, rect: Rect) -> bool {
        let (x, y) = centre(rect);
        self.task.handle_event(&ScreenEvent::PointerDown { x, y })
    }

    fn click(&mut self, rect: Rect) -> bool {
        let (x, y) = centre(rect);
        let down = self.task.handle_event(&ScreenEvent::PointerDown { x, y });
        let up = self.task.handle_event(&ScreenEvent::PointerUp { x, y });
        down || up
    }

    fn type_digits(&mut self, digits: &str) {
        for d in digits.chars() {
            assert!(self.task.handle_event(&ScreenEvent::digit(d)));
        }
    }

    fn confirm(&mut self) -> bool {
        let rect = self.task.layout().confirm;
        self.click(rect)
    }

    fn switches(&self) -> Vec<GameState> {
        self.switches.borrow().clone()
    }
}

#[test]
fn round_selects_catalog_item() {
    let h = harness(4);
    assert_eq!(h.task.state().item().name, "boot");
    assert_eq!(h.task.state().total(), 8);
    assert_eq!(h.task.state().max_allocation(), 8);

    let h = harness(13);
    assert_eq!(h.task.state().item().name, "candy bar");
}

#[test]
fn up_arrow_twenty_times_then_confirm_switches_to_play() {
    let mut h = harness(1);
    let up = h.task.layout().up(Recipient::OwnGroup);
    for _ in 0..20 {
        assert!(!h.press(up), "arrow presses are not consumed");
    }
    // One more press is absorbed by the sum gate.
    h.press(up);
    assert_eq!(h.task.state().allocations(), [20, 0]);

    assert!(h.confirm());
    assert_eq!(h.switches(), vec![GameState::Play]);
}

#[test]
fn confirm_is_blocked_until_the_sum_matches() {
    let mut h = harness(2);
    let up = h.task.layout().up(Recipient::OtherGroup);
    h.press(up);
    assert_eq!(h.task.state().balance(), Balance::Missing(9));

    assert!(h.confirm(), "the button press itself is consumed");
    assert!(h.switches().is_empty());
}

#[test]
fn typed_digits_are_clamped_and_corrected() {
    let mut h = harness(2); // blanket, 10
    let own = h.task.layout().field(Recipient::OwnGroup);
    let other = h.task.layout().field(Recipient::OtherGroup);

    assert!(!h.press(other));
    h.type_digits("4");
    assert!(!h.press(own));
    assert_eq!(h.task.state().active(), Some(Recipient::OwnGroup));
    h.type_digits("4");
    assert_eq!(h.task.state().allocations(), [4, 4]);

    h.type_digits("9");
    assert_eq!(h.task.state().allocations(), [6, 4]);
    assert!(h.task.state().is_balanced());

    assert!(h.confirm());
    assert_eq!(h.switches(), vec![GameState::Play]);
    let outcome = h.task.outcome();
    assert_eq!((outcome.own_group, outcome.other_group), (6, 4));
}

#[test]
fn backspace_drops_the_last_digit_of_the_active_field() {
    let mut h = harness(12); // mask, 26
    let own = h.task.layout().field(Recipient::OwnGroup);
    h.press(own);
    h.type_digits("25");
    assert!(h.task.handle_event(&ScreenEvent::key(Key::Backspace)));
    assert_eq!(h.task.state().allocations(), [2, 0]);
}

#[test]
fn keys_without_an_active_field_are_not_consumed() {
    let mut h = harness(1);
    assert!(!h.task.handle_event(&ScreenEvent::digit('5')));
    assert!(!h.task.handle_event(&ScreenEvent::key(Key::Backspace)));
    assert_eq!(h.task.state().allocations(), [0, 0]);
}

#[test]
fn non_digit_keys_with_an_active_field_are_not_consumed() {
    let mut h = harness(1);
    let own = h.task.layout().field(Recipient::OwnGroup);
    h.press(own);
    assert!(!h.task.handle_event(&ScreenEvent::key(Key::Escape)));
    assert!(!h.task.handle_event(&ScreenEvent::key(Key::Left)));
}

#[test]
fn shifted_number_keys_are_rejected() {
    let mut h = harness(1);
    let own = h.task.layout().field(Recipient::OwnGroup);
    h.press(own);
    h.type_digits("4");
    for symbol in ['!', '@', '#'] {
        assert!(!h.task.handle_event(&ScreenEvent::typed(symbol)));
    }
    assert_eq!(h.task.state().allocations(), [4, 0]);
}

#[test]
fn down_arrow_never_goes_below_zero() {
    let mut h = harness(1);
    let down = h.task.layout().down(Recipient::OtherGroup);
    h.press(down);
    h.press(down);
    assert_eq!(h.task.state().allocations(), [0, 0]);
}

#[test]
fn keyboard_focus_and_enter_confirm() {
    let mut h = harness(11); // umbrella, 4
    let own = h.task.layout().field(Recipient::OwnGroup);
    h.press(own);
    h.type_digits("4");
    assert!(h.task.handle_event(&ScreenEvent::key(Key::Tab)));
    assert!(h.task.handle_event(&ScreenEvent::key(Key::Enter)));
    assert_eq!(h.switches(), vec![GameState::Play]);
}

#[test]
fn hover_posts_cursor_hints() {
    let h = &mut harness(1);
    let field = h.task.layout().field(Recipient::OwnGroup);
    let arrow = h.task.layout().up(Recipient::OwnGroup);
    let confirm = h.task.layout().confirm;

    let mut hint_at = |(x, y): (u32, u32)| {
        h.task.handle_event(&ScreenEvent::PointerMoved { x, y });
        h.task.mouse_hover();
        h.events.try_recv().unwrap()
    };

    assert_eq!(hint_at(field.center()), HostEvent::SetCursor(CustomCursor::Point));
    assert_eq!(hint_at(confirm.center()), HostEvent::SetCursor(CustomCursor::Point));
    assert_eq!(hint_at(arrow.center()), HostEvent::SetCursor(CustomCursor::Arrow));
    assert_eq!(hint_at((5, 700)), HostEvent::SetCursor(CustomCursor::Arrow));
}
