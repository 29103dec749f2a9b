/// 下載完成的網頁，僅在單次轉換期間存在
#[derive(Clone, Debug)]
pub struct FetchedPage {
    /// 跟隨重新導向後的最終網址
    pub url: String,
    pub html: String,
    pub title: Option<String>,
}
