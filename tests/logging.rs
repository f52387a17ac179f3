use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use mandelbrot::common::colors::PaletteRegistry;
use mandelbrot::config::RenderConfig;

/// ログ出力を溜めておくバッファ
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// WARN 以上のログを集めながら描画する
fn run_capturing_warnings(path: &Path, palette: &str) -> String {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let config = RenderConfig {
        file: path.to_path_buf(),
        width: 40,
        height: 30,
        palette: palette.to_string(),
        ..RenderConfig::default()
    };
    let registry = PaletteRegistry::builtin();
    tracing::subscriber::with_default(subscriber, || {
        mandelbrot::run(&config, &registry).unwrap();
    });

    logs.contents()
}

#[test]
fn test_unknown_palette_logs_warning() {
    let dir = tempfile::tempdir().unwrap();
    let logs = run_capturing_warnings(&dir.path().join("unknown.png"), "chartreuse");
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("chartreuse"), "logs: {logs}");
    assert!(logs.contains("magma"), "logs: {logs}");
}

#[test]
fn test_known_palette_logs_no_warning() {
    let dir = tempfile::tempdir().unwrap();
    let logs = run_capturing_warnings(&dir.path().join("magma.png"), "magma");
    assert!(!logs.contains("WARN"), "logs: {logs}");
    assert!(!logs.contains("chartreuse"), "logs: {logs}");
}
