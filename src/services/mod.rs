pub mod heartbeat;
pub mod queue_service;
pub mod session_token;

pub use heartbeat::HeartbeatBeacon;
pub use queue_service::{FetchError, QueueService};
pub use session_token::{CookieTokenProvider, SessionTokenProvider, StaticTokenProvider};
