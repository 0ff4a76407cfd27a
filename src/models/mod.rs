// src/models/mod.rs

pub mod answer;
pub mod candidate;
pub mod question;
