pub mod converter;
pub mod formatter;
pub mod reverse;

#[cfg(test)]
mod tests;

pub use converter::*;
pub use formatter::*;
pub use reverse::*;
