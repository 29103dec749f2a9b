use std::io::{self, Write};
use async_trait::async_trait;
use log::{error, info};
use crate::facade::traits::i_conversion::ConversionInvokerTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::traits::i_service::ArticleConverter;
use crate::utils::utils::ProgressManager;

pub struct ConversionInvoker {
    converter: Box<dyn ArticleConverter>,
}

impl ConversionInvoker {
    pub fn new(converter: Box<dyn ArticleConverter>) -> Self {
        ConversionInvoker { converter }
    }
}

#[async_trait]
impl ConversionInvokerTrait for ConversionInvoker {
    async fn invoke(
        &self,
        input: ConversionInput,
        sink: &mut (dyn Write + Send),
    ) -> io::Result<ConversionOutput> {
        info!("開始轉換：{}", input.url);
        let progress = ProgressManager::new(&format!("正在轉換 {}", input.url), input.no_progress);

        let text = match self.converter.convert(&input.url).await {
            Ok(text) => {
                progress.finish(true);
                text
            }
            Err(e) => {
                progress.finish(false);
                error!("轉換失敗：{}：{}", input.url, e);
                return Err(e);
            }
        };

        // 內容與結尾換行一次寫入
        let mut payload = text;
        payload.push('\n');
        sink.write_all(payload.as_bytes())?;
        sink.flush()?;
        info!("已輸出 {} 位元組", payload.len());

        Ok(ConversionOutput {
            url: input.url,
            bytes_written: payload.len(),
        })
    }
}
