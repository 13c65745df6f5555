//! Test-only crate. See `tests/` for end-to-end scenarios.
