//! Bag integration tests
//!
//! Tests are organized by the part of the Bag API they exercise.

mod construction;
mod reads;
