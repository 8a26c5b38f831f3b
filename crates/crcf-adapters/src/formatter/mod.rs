//! Source formatter adapters.

mod simple;

pub use simple::SimpleFormatter;
