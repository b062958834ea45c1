//! Game sessions built on the engine.

pub mod crazy_eights;
