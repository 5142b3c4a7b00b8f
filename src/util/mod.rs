#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod logging;
pub mod panic;
pub mod result;
