//! Operation helpers for the CPU engine

pub(crate) mod cumulative;
