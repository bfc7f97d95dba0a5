pub mod common;
pub mod how_it_works;
pub mod icon;
pub mod loader;
pub mod pages;
pub mod scroll;
#[cfg(any(feature = "hydrate", test))]
pub mod timers;
pub mod typewriter;
pub mod waiting_room;

pub use icon::{Icon, icons};
pub use loader::WaitroomLoader;
pub use pages::{LandingPage, NotFoundPage};
pub use scroll::scroll_to_section;
pub use waiting_room::ElegantWaitingRoom;
