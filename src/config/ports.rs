use std::io;
use async_trait::async_trait;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub url: String,
    pub output: Option<String>,
    pub no_progress: bool,
    pub selector: Option<String>,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
#[async_trait]
pub trait ConversionPort: Send + Sync {
    async fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
