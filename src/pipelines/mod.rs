pub mod stats;
pub mod utils;

pub mod normalization;
pub mod sentiment;
