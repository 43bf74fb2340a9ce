//! Search-space reduction for the move selector

pub mod candidates;

pub use candidates::candidates;
