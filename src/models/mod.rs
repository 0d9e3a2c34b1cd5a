pub mod queue;
pub mod signup;

pub use queue::{FetchPhase, Message, QueueStatus};
pub use signup::SignupState;
