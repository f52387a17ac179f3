//! 描画設定

use std::path::PathBuf;

use crate::common::constants::{DEFAULT_FILE, DEFAULT_HEIGHT, DEFAULT_PALETTE, DEFAULT_WIDTH};
use crate::common::mandelbrot::Recurrence;

/// 1回の描画に必要な設定
///
/// `Default` は引数なしで実行したときの設定（800x600, magma, z*z）。
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub file: PathBuf,
    pub width: u32,
    pub height: u32,
    /// パレット名（不明な名前は描画時に既定パレットへフォールバック）
    pub palette: String,
    pub inverse: bool,
    pub recurrence: Recurrence,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: DEFAULT_PALETTE.to_string(),
            inverse: false,
            recurrence: Recurrence::Square,
        }
    }
}
