//! Section state: the contact form, particle field, card tilt, and section
//! ordering.

pub mod contact_form;
pub mod particles;
pub mod sections;
pub mod tilt;

pub use contact_form::*;
pub use particles::*;
pub use sections::*;
pub use tilt::*;
