//! Data types shared by the song sheet algorithms and the host boundary.

mod cell;
mod change;
mod event;
mod page;
mod section;

pub use cell::*;
pub use change::*;
pub use event::*;
pub use page::*;
pub use section::*;
