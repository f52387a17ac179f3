//! マンデルブロ集合をパレット形式のPNG画像に描画するライブラリ
//!
//! 各ピクセルの発散回数をそのままパレットのインデックスとして使う。

pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod output;
pub mod render;

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use common::colors::{PaletteName, PaletteRegistry};
use config::RenderConfig;
use error::RenderResult;

/// 描画結果の概要
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub palette: PaletteName,
    /// 指定されたパレット名が不明で既定パレットを使った
    pub fallback: bool,
}

/// 設定に従って画像を描画し、PNGファイルに保存する
///
/// 出力ファイルは計算の前に作成するので、書き込めない場合は何も計算せずに失敗する。
/// 幅か高さが 0 の場合は PNG にできないため `RenderError::EmptyImage` を返す（空のファイルが残る）。
pub fn run(config: &RenderConfig, registry: &PaletteRegistry) -> RenderResult<RenderSummary> {
    let out = output::create(&config.file)?;

    let resolved = registry.resolve(&config.palette);
    if resolved.fallback {
        warn!(
            "パレット {} はありません。{} を使用します",
            config.palette, resolved.name
        );
    }
    let palette = if config.inverse {
        resolved.palette.reversed()
    } else {
        resolved.palette
    };

    let start = Instant::now();
    let image = render::generate(config.width, config.height, palette, config.recurrence);
    info!(
        "描画完了: {:.2?} ({}x{}, {:?})",
        start.elapsed(),
        config.width,
        config.height,
        config.recurrence
    );

    output::write_png(&image, out, &config.file)?;
    info!("画像を保存しました: {}", config.file.display());

    Ok(RenderSummary {
        file: config.file.clone(),
        width: config.width,
        height: config.height,
        palette: resolved.name,
        fallback: resolved.fallback,
    })
}
