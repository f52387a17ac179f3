//! 共通モジュール

pub mod colors;
pub mod constants;
pub mod mandelbrot;
