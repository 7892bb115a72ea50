pub use combinator_functions::*;
pub use model::*;

#[cfg(test)]
#[path = "test/pattern_test.rs"]
mod pattern_test;

mod model;

mod combinator_functions;
