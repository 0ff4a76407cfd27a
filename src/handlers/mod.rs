// src/handlers/mod.rs

pub mod admin;
pub mod answer;
pub mod candidate;
pub mod question;
