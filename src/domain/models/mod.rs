mod conversation;
mod generation;
mod provider;
mod turn;

pub use conversation::*;
pub use generation::*;
pub use provider::*;
pub use turn::*;
