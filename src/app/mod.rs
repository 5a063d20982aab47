pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod sample;

pub use app::{App, Notification, NotificationLevel};
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::RenderState;
