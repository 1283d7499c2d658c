mod send_turn;

pub use send_turn::*;
