//! Email infrastructure

pub mod outgoing;
