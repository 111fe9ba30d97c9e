//! HTML template rendering handlers for the dashboard pages.

mod about;
mod demonstration;
mod glossary;
mod home;
mod metadata;
mod navigate;
mod start_task;

pub use about::about_handler;
pub use demonstration::{VIDEO_UNAVAILABLE, demonstration_handler};
pub use glossary::glossary_handler;
pub use home::home_handler;
pub use metadata::metadata_handler;
pub use navigate::navigate_handler;
pub use start_task::{
    NEED_EITHER_ID, NEED_ID_TO_PROCEED, PRESS_START, start_task_form_handler,
    start_task_submit_handler,
};
