//! # Data Transfer Objects

pub mod talk_fetch_config;
