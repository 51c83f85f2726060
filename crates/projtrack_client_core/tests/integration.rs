//! Single integration test binary: all integration tests as modules.
//! Every backend is an in-process mock, so nothing here needs a live server.
//!
//! Run: `cargo test --test integration`
//! Filter by module: `cargo test --test integration home_flow::`

mod common;
mod cancellation;
