//! Icon names shared by the content tables and the components

use crate::core::loader::StepIcon;
use crate::core::roster::TaskIcon;

pub const EYE: &str = "eye";
pub const SYNC: &str = "sync";
pub const TEAM: &str = "team";
pub const API: &str = "api";
pub const BELL: &str = "bell";
pub const CHECK: &str = "check";
pub const ROCKET: &str = "rocket";
pub const BOLT: &str = "bolt";
pub const CODE: &str = "code";
pub const BUG: &str = "bug";
pub const USER: &str = "user";
pub const CLOCK: &str = "clock";
pub const CARD: &str = "card";
pub const MENU: &str = "menu";
pub const X: &str = "x";
pub const ARROW_RIGHT: &str = "arrow-right";
pub const STAR: &str = "star";
pub const MAIL: &str = "mail";
pub const ALERT: &str = "alert";
pub const HOME: &str = "home";

pub fn for_task(icon: TaskIcon) -> &'static str {
    match icon {
        TaskIcon::Code => CODE,
        TaskIcon::Bug => BUG,
        TaskIcon::Rocket => ROCKET,
        TaskIcon::User => USER,
    }
}

pub fn for_step(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::Clock => CLOCK,
        StepIcon::Check => CHECK,
    }
}
