//! パレット画像の生成

use image::Rgb;
use rayon::prelude::*;

use crate::common::colors::Palette;
use crate::common::mandelbrot::{escape_index, scale, Recurrence};

/// パレットのインデックスを1ピクセル1バイトで持つ画像（行優先）
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    palette: Palette,
}

impl IndexedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.index_at(x, y).and_then(|i| self.palette.get(i))
    }
}

/// 全ピクセルの発散回数を計算して画像を作る
///
/// 行ごとに独立なので Rayon で行単位に並列化する。最大反復回数はパレットの色数。
pub fn generate(width: u32, height: u32, palette: Palette, recurrence: Recurrence) -> IndexedImage {
    let w = width as usize;
    let h = height as usize;
    let max_iter = palette.len();

    let mut indices = vec![0u8; w * h];
    if w > 0 {
        indices
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(row, row_data)| {
                let y = row as u32;
                for (col, pixel) in row_data.iter_mut().enumerate() {
                    let c = scale(width, height, col as u32, y);
                    *pixel = escape_index(c, max_iter, recurrence);
                }
            });
    }

    IndexedImage {
        width,
        height,
        indices,
        palette,
    }
}
