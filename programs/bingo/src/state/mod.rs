pub mod game;
pub mod registry;
pub mod ticket;

pub use game::*;
pub use registry::*;
pub use ticket::*;
