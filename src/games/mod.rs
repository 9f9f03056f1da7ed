//! Game loops built on the rules engine.

pub mod war;
