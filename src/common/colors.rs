//! カラーマップとパレット選択

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use super::constants::PALETTE_SIZE;

// 各カラーマップの制御点（0.0〜1.0 を 8 等分した 9 点）
const INFERNO: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (31, 12, 72),
    (85, 15, 109),
    (136, 34, 106),
    (186, 54, 85),
    (227, 89, 51),
    (249, 142, 9),
    (249, 203, 53),
    (252, 255, 164),
];

const MAGMA: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (28, 16, 68),
    (79, 18, 123),
    (129, 37, 129),
    (181, 54, 122),
    (229, 80, 100),
    (251, 135, 97),
    (254, 194, 135),
    (252, 253, 191),
];

const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (76, 2, 161),
    (126, 3, 168),
    (169, 35, 149),
    (204, 71, 120),
    (230, 108, 92),
    (248, 149, 64),
    (253, 197, 39),
    (240, 249, 33),
];

const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 45, 123),
    (59, 82, 139),
    (44, 114, 142),
    (33, 145, 140),
    (40, 174, 128),
    (94, 201, 98),
    (173, 220, 48),
    (253, 231, 37),
];

const PARULA: [(u8, u8, u8); 9] = [
    (53, 42, 135),
    (15, 92, 221),
    (20, 129, 214),
    (7, 156, 207),
    (21, 177, 180),
    (89, 189, 140),
    (165, 190, 107),
    (225, 185, 82),
    (249, 251, 14),
];

/// 組み込みパレットの名前
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Inferno,
    Magma,
    Plasma,
    Viridis,
    Parula,
}

impl PaletteName {
    pub const ALL: [PaletteName; 5] = [
        PaletteName::Inferno,
        PaletteName::Magma,
        PaletteName::Plasma,
        PaletteName::Viridis,
        PaletteName::Parula,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteName::Inferno => "inferno",
            PaletteName::Magma => "magma",
            PaletteName::Plasma => "plasma",
            PaletteName::Viridis => "viridis",
            PaletteName::Parula => "parula",
        }
    }

    fn control_points(&self) -> &'static [(u8, u8, u8)] {
        match self {
            PaletteName::Inferno => &INFERNO,
            PaletteName::Magma => &MAGMA,
            PaletteName::Plasma => &PLASMA,
            PaletteName::Viridis => &VIRIDIS,
            PaletteName::Parula => &PARULA,
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知のパレット名
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("パレット {0} はありません")]
pub struct UnknownPalette(pub String);

impl FromStr for PaletteName {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownPalette(s.to_string()))
    }
}

/// 色の並び（ピクセル値はこのインデックス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb<u8>>) -> Self {
        Self { colors }
    }

    /// 制御点を線形補間して `size` 色のテーブルを作る
    fn from_control_points(points: &[(u8, u8, u8)], size: usize) -> Self {
        debug_assert!(points.len() >= 2);
        let segments = points.len() - 1;

        let colors = (0..size)
            .map(|i| {
                let t = if size > 1 {
                    i as f64 / (size - 1) as f64
                } else {
                    0.0
                };
                let scaled = t * segments as f64;
                let idx = (scaled as usize).min(segments - 1);
                let frac = scaled - idx as f64;

                let (r1, g1, b1) = points[idx];
                let (r2, g2, b2) = points[idx + 1];
                Rgb([lerp(r1, r2, frac), lerp(g1, g2, frac), lerp(b1, b2, frac)])
            })
            .collect();

        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    pub fn get(&self, index: u8) -> Option<Rgb<u8>> {
        self.colors.get(index as usize).copied()
    }

    /// 色の順序を反転したコピーを返す
    pub fn reversed(&self) -> Self {
        let mut colors = self.colors.clone();
        colors.reverse();
        Self { colors }
    }

    /// PLTE チャンク用に RGB を並べたバイト列
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.0).collect()
    }
}

#[inline]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let v = a as f64 + (b as f64 - a as f64) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// パレット名の解決結果
#[derive(Debug, Clone)]
pub struct Resolved {
    pub name: PaletteName,
    pub palette: Palette,
    /// 不明な名前のため既定パレットに置き換えた
    pub fallback: bool,
}

/// 組み込みパレットの表（起動時に一度だけ作り、以後は読み取り専用）
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: [Palette; 5],
    default: PaletteName,
}

impl PaletteRegistry {
    pub fn builtin() -> Self {
        Self {
            palettes: PaletteName::ALL
                .map(|name| Palette::from_control_points(name.control_points(), PALETTE_SIZE)),
            default: PaletteName::Magma,
        }
    }

    pub fn get(&self, name: PaletteName) -> &Palette {
        &self.palettes[name as usize]
    }

    /// 名前からパレットを選ぶ。不明な名前は既定パレットにフォールバックする
    ///
    /// 返すパレットは呼び出し側専用のコピーなので、反転しても表は変わらない。
    pub fn resolve(&self, name: &str) -> Resolved {
        let (name, fallback) = match name.parse::<PaletteName>() {
            Ok(name) => (name, false),
            Err(_) => (self.default, true),
        };
        Resolved {
            name,
            palette: self.get(name).clone(),
            fallback,
        }
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
