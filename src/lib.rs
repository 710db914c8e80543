#[macro_use]
extern crate tracing;

pub mod animation;
pub mod cli;
pub mod frame;
pub mod protocol;
pub mod utils;
pub mod window;

#[cfg(test)]
mod tests;
