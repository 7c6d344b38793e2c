mod inspect;
mod server;

pub use inspect::*;
pub use server::*;
