mod generate_client;

pub use generate_client::*;
