// Library module for wallthemes
// Re-exports modules for use in integration tests and external crates

pub mod themes;
