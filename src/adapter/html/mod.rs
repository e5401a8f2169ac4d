//! HTML Output
//!
//! プログラムの静的HTML表現

pub mod renderer;
