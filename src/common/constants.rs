//! 共通定数

/// 出力ファイル名の既定値
pub const DEFAULT_FILE: &str = "mandelbrot.png";
/// 画像の幅の既定値
pub const DEFAULT_WIDTH: u32 = 800;
/// 画像の高さの既定値
pub const DEFAULT_HEIGHT: u32 = 600;
/// パレット名の既定値（不明な名前もこれにフォールバック）
pub const DEFAULT_PALETTE: &str = "magma";

/// パレットの色数（= 最大反復回数）
pub const PALETTE_SIZE: usize = 256;

/// 画像の幅を実軸上のこの幅に写す
pub const REAL_SPAN: f64 = 3.0;
