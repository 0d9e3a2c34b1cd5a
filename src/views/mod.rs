pub mod message_feed;
pub mod notify_form;
pub mod progress_bar;
pub mod waiting_room;

pub use waiting_room::render_waiting_room;
