use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// 以附加模式寫入的檔案，第一次寫入時才開啟，等同 `>> file.md`
pub struct AppendFileWriter {
    path: PathBuf,
    file: Option<File>,
}

impl AppendFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppendFileWriter {
            path: path.into(),
            file: None,
        }
    }

    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            log::info!("附加輸出至：{}", self.path.display());
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "輸出檔案未開啟"))
    }
}

impl Write for AppendFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// 根據配置建立輸出目標：指定檔案時附加寫入，否則輸出至標準輸出
pub fn open_output_sink(output: Option<&str>) -> Box<dyn Write + Send> {
    match output {
        Some(path) => Box::new(AppendFileWriter::new(path)),
        None => Box::new(io::stdout()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medium_to_markdown_{}_{}", std::process::id(), name))
    }

    #[test]
    fn file_is_not_created_without_writes() {
        let path = temp_path("untouched.md");
        let _ = fs::remove_file(&path);
        let mut writer = AppendFileWriter::new(&path);
        writer.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn appends_to_existing_content() {
        let path = temp_path("append.md");
        fs::write(&path, "first\n").unwrap();
        let mut writer = AppendFileWriter::new(&path);
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        fs::remove_file(&path).unwrap();
    }
}
