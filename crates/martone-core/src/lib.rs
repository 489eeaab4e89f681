pub mod animator;
pub mod config;
pub mod constants;
pub mod counter;
pub mod easing;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod newsletter;
pub mod notify;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod share;
pub mod tasks;
pub mod text;
pub mod visibility;

pub use animator::*;
pub use config::*;
pub use counter::*;
pub use easing::*;
pub use error::*;
pub use interaction::*;
pub use loader::*;
pub use newsletter::*;
pub use notify::*;
pub use particles::*;
pub use reveal::*;
pub use scroll::*;
pub use share::*;
pub use tasks::*;
pub use text::*;
pub use visibility::*;
