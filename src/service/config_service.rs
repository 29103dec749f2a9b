use std::io;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器，只需要網址
pub struct DefaultConfigAdapter {
    url: String,
}

impl DefaultConfigAdapter {
    pub fn new(url: String) -> Self {
        DefaultConfigAdapter { url }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            url: self.url.clone(),
            output: None, // 標準輸出
            no_progress: false,
            selector: None, // 自動偵測文章區塊
        })
    }
}
