//! マンデルブロ集合計算関数

use num_complex::Complex;

use super::constants::REAL_SPAN;

/// 漸化式 z ← f(z) + c の f の種類
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Recurrence {
    /// z * z（高速版）
    #[default]
    Square,
    /// z のべき乗（極形式で計算する一般版）
    Power(f64),
}

impl Recurrence {
    /// 1ステップ進めた z を返す
    #[inline]
    pub fn step(self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        match self {
            Recurrence::Square => z * z + c,
            Recurrence::Power(exp) => z.powf(exp) + c,
        }
    }
}

/// ピクセル座標を複素平面上の座標に変換
///
/// 画像の幅が実軸上の `REAL_SPAN` に対応し、虚軸は画像の中央が 0 になる。
/// 集合の本体が中央に来るよう、x から `width/2 + width/5` を引いてから縮尺する。
pub fn scale(width: u32, height: u32, x: u32, y: u32) -> Complex<f64> {
    let w = width as f64;
    let h = height as f64;

    let zoom = w / REAL_SPAN;
    let re = x as f64 - w / 2.0 - w / 5.0;
    let im = y as f64 - h / 2.0;
    Complex::new(re / zoom, im / zoom)
}

/// 発散した反復回数をパレットのインデックスとして返す
///
/// z が無限大（または NaN）になった時点を発散とみなす。
/// `max_iter` 回以内に発散しなければ 0（背景色）を返す。
pub fn escape_index(c: Complex<f64>, max_iter: usize, recurrence: Recurrence) -> u8 {
    let mut z = Complex::new(0.0, 0.0);

    for n in 0..max_iter {
        z = recurrence.step(z, c);
        if !z.is_finite() {
            return n.min(u8::MAX as usize) as u8;
        }
    }
    0
}
