mod decoded;
mod raw;
mod segments;

pub use decoded::{CompleteToken, Decoded};
pub use raw::RawToken;
pub use segments::Segments;
