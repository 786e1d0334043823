pub mod attrs;
pub mod bytecode;
pub mod code;
pub mod cpool;
pub mod descriptor;
pub mod error;
pub mod flags;
pub mod parse;
mod reader;

pub use error::ParseError;
pub use parse::parse;
pub use parse::ClassFile;
