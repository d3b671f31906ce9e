// Application layer: user actions on top of the core façades.

pub mod handlers;
pub mod notice;
pub mod render;

pub use handlers::{ActionHandlers, ActionOutcome};
pub use notice::{Notice, NoticeLevel};
