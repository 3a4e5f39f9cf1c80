pub mod allocation;
pub mod catalog;
pub mod error;
pub mod events;
pub mod fonts;
pub mod headful;
pub mod layout;
pub mod menu;
pub mod play;
pub mod player_task;
pub mod results;
pub mod settings;
pub mod text;
pub mod ui_ids;
pub mod view;
pub mod widgets;

pub use error::{Result, TaskError};
