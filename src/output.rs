//! パレット形式PNGの書き出し

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::render::IndexedImage;

/// 出力ファイルを作成（既存なら切り詰め）
pub fn create(path: &Path) -> RenderResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// パレット付きの8bitインデックスカラーPNGとしてエンコード
pub fn encode_png<W: Write>(image: &IndexedImage, writer: W) -> RenderResult<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RenderError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(image.palette().to_rgb_bytes());

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.indices())?;
    png_writer.finish()?;
    Ok(())
}

/// `create` で開いたファイルにPNGを書き込む。ファイルは関数を抜けるときに閉じられる
pub fn write_png(image: &IndexedImage, mut out: BufWriter<File>, path: &Path) -> RenderResult<()> {
    encode_png(image, &mut out)?;
    out.flush().map_err(|e| RenderError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::colors::{PaletteName, PaletteRegistry};
    use crate::common::mandelbrot::Recurrence;
    use crate::render::generate;

    fn small_image(width: u32, height: u32) -> IndexedImage {
        let palette = PaletteRegistry::builtin().get(PaletteName::Viridis).clone();
        generate(width, height, palette, Recurrence::Square)
    }

    #[test]
    fn test_encode_writes_indexed_png() {
        let img = small_image(40, 30);
        let mut buf = Vec::new();
        encode_png(&img, &mut buf).unwrap();
        assert_eq!(&buf[..8], b"\x89PNG\r\n\x1a\n");

        let mut decoder = png::Decoder::new(buf.as_slice());
        decoder.set_transformations(png::Transformations::IDENTITY);
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (40, 30));
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        let plte = info.palette.as_ref().unwrap();
        assert_eq!(plte.len(), 256 * 3);
        assert_eq!(&plte[..], img.palette().to_rgb_bytes().as_slice());
    }

    #[test]
    fn test_encoded_indices_round_trip() {
        let img = small_image(33, 17);
        let mut buf = Vec::new();
        encode_png(&img, &mut buf).unwrap();

        let mut decoder = png::Decoder::new(buf.as_slice());
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let mut data = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut data).unwrap();
        assert_eq!(&data[..frame.buffer_size()], img.indices());
    }

    #[test]
    fn test_empty_image_is_an_error() {
        let img = small_image(0, 10);
        let mut buf = Vec::new();
        let err = encode_png(&img, &mut buf).unwrap_err();
        assert!(matches!(
            err,
            RenderError::EmptyImage {
                width: 0,
                height: 10
            }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_create_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        let err = create(&path).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[test]
    fn test_write_png_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, vec![0xAB; 1 << 16]).unwrap();

        let out = create(&path).unwrap();
        write_png(&small_image(8, 8), out, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() < 1 << 16);
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
