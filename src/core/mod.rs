//! Core display state and timing logic for the Waitroom landing page
//!
//! Everything here is pure and browser-independent: the UI layer drives
//! these state machines from its own timers.

pub mod config;
pub mod content;
pub mod entropy;
pub mod icons;
pub mod loader;
pub mod roster;
pub mod timing;
pub mod typewriter;
pub mod waiting_room;
mod tests;

pub use config::{Config, ConfigError, LoaderSettings};
pub use content::Section;
pub use entropy::Entropy;
pub use loader::{Completion, LoaderSequence, LoaderStep, Particle};
pub use roster::{MemberStatus, TeamMember, default_roster};
pub use typewriter::Typewriter;
pub use waiting_room::{EnergyLevel, StatusToast, ToastId, WaitingRoom};
