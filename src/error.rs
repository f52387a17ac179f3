//! エラー型

use std::io;
use std::path::PathBuf;

/// 描画〜PNG出力で起こりうるエラー
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("ファイルに書き込めません {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PNGのエンコードに失敗しました: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("サイズ {width}x{height} の画像はPNGにできません")]
    EmptyImage { width: u32, height: u32 },
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
