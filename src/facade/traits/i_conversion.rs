use std::io::{self, Write};
use async_trait::async_trait;
use crate::models::conversion::{ConversionInput, ConversionOutput};

// 轉換呼叫接口，負責發出單一次轉換並輸出結果
#[async_trait]
pub trait ConversionInvokerTrait: Send + Sync {
    /// 轉換文章並在成功後寫入輸出目標
    /// # 參數
    /// - input: 轉換所需的輸入參數
    /// - sink: 輸出目標，僅在轉換成功後寫入
    /// # 回傳
    /// - 成功時返回轉換結果，失敗時原樣返回轉換器的錯誤
    async fn invoke(
        &self,
        input: ConversionInput,
        sink: &mut (dyn Write + Send),
    ) -> io::Result<ConversionOutput>;
}
