#![allow(missing_docs)]

pub mod game;

pub use game::{GameProvider, ProviderResult};
