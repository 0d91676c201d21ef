//! In-crate test suites
//!
//! - `common`: entry fixtures shared by the suites
//! - `property`: proptest invariants for resolution and pagination
//! - `unit`: command-handler tests against a mocked search backend
