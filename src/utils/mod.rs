// src/utils/mod.rs

pub mod export;
pub mod gate;
pub mod scoring;
