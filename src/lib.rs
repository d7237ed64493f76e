pub mod error;
pub mod ident;
pub mod types;
pub mod expr;
pub mod config;
pub mod descriptor;
pub mod builtin;
pub mod planner;
pub mod adapter;
pub mod catalog;
pub mod splitter;
pub mod split;

// Test-only printing helper: expands to eprintln! during tests and is silent otherwise.
// Usage in tests: tprintln!("debug: {}", value);
#[cfg(any(test, debug_assertions))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ( eprintln!($($arg)*) );
}

// In non-test builds, keep the formatting checks without producing output.
#[cfg(not(any(test, debug_assertions)))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ({
        if false { let _ = format!($($arg)*); }
    });
}
