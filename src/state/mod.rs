pub mod widget_state;

pub use widget_state::{IncrementalUpdate, UpdateType, WidgetState};
