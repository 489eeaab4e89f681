pub mod keyboard;
pub mod navbar;
pub mod newsletter;
pub mod pointer;
pub mod social;

pub use keyboard::wire_keyboard_access;
pub use navbar::wire_navbar;
pub use newsletter::wire_newsletter;
pub use pointer::wire_pointer_effects;
pub use social::wire_social_sidebar;
