//! コマンドライン引数

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::common::constants::{DEFAULT_FILE, DEFAULT_HEIGHT, DEFAULT_PALETTE, DEFAULT_WIDTH};
use crate::common::mandelbrot::Recurrence;
use crate::config::RenderConfig;

/// マンデルブロ集合をパレット形式のPNG画像に描画します
///
/// `-h` は高さに使うので、ヘルプは `--help` のみ。
#[derive(Debug, Parser)]
#[command(name = "mandelbrot", version, about, disable_help_flag = true)]
pub struct Cli {
    /// 出力ファイル名
    #[arg(short = 'f', long = "file", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// 幅（ピクセル）
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// 高さ（ピクセル）
    #[arg(short = 'h', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// パレット (inferno, magma, plasma, viridis, parula)
    #[arg(short = 'p', long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// パレットの順序を反転
    #[arg(short = 'i', long)]
    pub inverse: bool,

    /// z^e + c のべき乗版で計算（省略時は z*z + c）
    #[arg(short = 'e', long)]
    pub exponent: Option<f64>,

    /// ヘルプを表示
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    pub fn into_config(self) -> RenderConfig {
        RenderConfig {
            file: self.file,
            width: self.width,
            height: self.height,
            palette: self.palette,
            inverse: self.inverse,
            recurrence: self
                .exponent
                .map_or(Recurrence::Square, Recurrence::Power),
        }
    }
}
