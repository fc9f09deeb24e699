pub mod copy;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod iterate;
pub mod map;
pub mod ops;
