use std::io;
use async_trait::async_trait;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_invoker::ConversionInvoker;
use crate::facade::traits::i_conversion::ConversionInvokerTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::converter::HttpArticleConverter;
use crate::service::fetch::FetchService;
use crate::service::markdown::MarkdownService;
use crate::utils::output::open_output_sink;

/// 以 HTTP 轉換器組裝並執行一次轉換
pub struct ConversionAdapter;

#[async_trait]
impl ConversionPort for ConversionAdapter {
    async fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let converter = HttpArticleConverter::new(
            Box::new(FetchService::new()?),
            Box::new(MarkdownService::new(config.selector.as_deref())?),
        );
        let invoker: Box<dyn ConversionInvokerTrait> = Box::new(ConversionInvoker::new(Box::new(converter)));

        let mut sink = open_output_sink(config.output.as_deref());
        invoker
            .invoke(
                ConversionInput {
                    url: config.url,
                    no_progress: config.no_progress,
                },
                sink.as_mut(),
            )
            .await
    }
}
