pub use board::*;
pub use coord::*;
pub use errors::*;
pub use protocol::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod coord;
mod errors;
mod protocol;
