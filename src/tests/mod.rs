//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive a full `TuiApp` on a `TestBackend`
//! with fakes behind the API, the extractor and the desktop.
