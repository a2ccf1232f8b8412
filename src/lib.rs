//! Programmer's calculator: fixed-width integer expressions plus a line-at-a-time session
//! that can carry a pending operator from one input line to the next.

pub mod engine;
pub mod session;
