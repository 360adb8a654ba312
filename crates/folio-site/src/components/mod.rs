//! UI components for the portfolio.

mod about;
mod app;
mod contact;
mod floating_field;
mod hero;
mod icon;
mod navbar;
mod particle_canvas;
mod section_heading;
mod skills;
mod work;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use floating_field::*;
pub use hero::*;
pub use icon::*;
pub use navbar::*;
pub use particle_canvas::*;
pub use section_heading::*;
pub use skills::*;
pub use work::*;
