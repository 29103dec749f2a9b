use std::io;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

/// 下載期間顯示在標準錯誤輸出的等待動畫
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} {elapsed}") {
                pb.set_style(style);
            }
            pb.set_message(message.to_string());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    /// 結束並清除動畫，必須在寫入輸出前呼叫
    pub fn finish(&self, success: bool) {
        if self.no_progress {
            return;
        }
        self.pb.finish_and_clear();
        let elapsed = self.start.elapsed().as_secs_f64();
        if success {
            log::info!("轉換耗時 {:.2} 秒", elapsed);
        } else {
            log::warn!("轉換失敗，耗時 {:.2} 秒", elapsed);
        }
    }
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    }

    #[test]
    fn hidden_progress_finishes_quietly() {
        let pm = ProgressManager::new("下載中", true);
        pm.finish(true);
        pm.finish(false);
    }
}
