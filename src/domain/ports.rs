use crate::domain::model::{CropQuery, FieldIds, SubmitEvent, SubmitOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::task::JoinHandle;

/// 依元素 id 讀取目前的輸入值；元素不存在時回傳 None
pub trait FormSource: Send + Sync {
    fn field_value(&self, element_id: &str) -> Option<String>;
}

/// 結果區塊，每次成功回應都整塊覆寫
pub trait ResultsView: Send + Sync {
    fn replace_content(&self, html: String);
    fn content(&self) -> String;
}

/// 推薦端點；回傳解析後的 JSON 內容，不檢查形狀
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn recommend(&self, query: &CropQuery) -> Result<serde_json::Value>;
}

/// 表單 submit 事件的監聽器，回傳背景請求的 handle（若有送出）
pub trait SubmitListener: Send + Sync {
    fn on_submit(
        &self,
        event: &mut SubmitEvent,
        form: &dyn FormSource,
    ) -> Option<JoinHandle<SubmitOutcome>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn endpoint_path(&self) -> &str;
    fn field_ids(&self) -> FieldIds;
}
