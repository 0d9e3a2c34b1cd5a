pub mod queue_viewmodel;
pub mod signup_viewmodel;

pub use queue_viewmodel::QueueViewModel;
pub use signup_viewmodel::SignupViewModel;
