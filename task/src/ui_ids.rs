use engine::ui_tree::{UiAction, UiId};

use crate::allocation::Recipient;

pub const UI_CANVAS: UiId = UiId(1);

pub const UI_TASK_CONTAINER: UiId = UiId(100);
pub const UI_TASK_CONFIRM: UiId = UiId(101);
pub const UI_TASK_FIELD_OWN: UiId = UiId(110);
pub const UI_TASK_FIELD_OTHER: UiId = UiId(111);
pub const UI_TASK_UP_OWN: UiId = UiId(120);
pub const UI_TASK_UP_OTHER: UiId = UiId(121);
pub const UI_TASK_DOWN_OWN: UiId = UiId(130);
pub const UI_TASK_DOWN_OTHER: UiId = UiId(131);

pub const UI_PLAY_CONTAINER: UiId = UiId(200);
pub const UI_PLAY_NEXT_ROUND: UiId = UiId(201);
pub const UI_PLAY_QUIT: UiId = UiId(202);

pub const ACTION_TASK_CONFIRM: UiAction = UiAction(1);
pub const ACTION_PLAY_NEXT_ROUND: UiAction = UiAction(2);
pub const ACTION_PLAY_QUIT: UiAction = UiAction(3);

pub fn field_id(recipient: Recipient) -> UiId {
    match recipient {
        Recipient::OwnGroup => UI_TASK_FIELD_OWN,
        Recipient::OtherGroup => UI_TASK_FIELD_OTHER,
    }
}

pub fn up_id(recipient: Recipient) -> UiId {
    match recipient {
        Recipient::OwnGroup => UI_TASK_UP_OWN,
        Recipient::OtherGroup => UI_TASK_UP_OTHER,
    }
}

pub fn down_id(recipient: Recipient) -> UiId {
    match recipient {
        Recipient::OwnGroup => UI_TASK_DOWN_OWN,
        Recipient::OtherGroup => UI_TASK_DOWN_OTHER,
    }
}
