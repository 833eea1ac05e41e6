use crate::core::render;
use crate::domain::model::{CropQuery, FieldIds, Recommendation, SubmitEvent, SubmitOutcome};
use crate::domain::ports::{FormSource, RecommendationApi, ResultsView, SubmitListener};
use crate::utils::error::{AdvisorError, Result};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// 連接表單與推薦端點的處理器
///
/// 每次 submit 都會送出一個獨立的請求，不去重、不取消。
/// 收到可解析的 JSON 就先寫入標題，再逐筆加入建議；形狀不符時保留已寫入的部分並記錄錯誤。
/// 網路或 JSON 解析失敗只記錄錯誤，結果區塊維持原內容。
pub struct SubmissionHandler<A: RecommendationApi, V: ResultsView> {
    api: Arc<A>,
    view: Arc<V>,
    ids: FieldIds,
}

impl<A: RecommendationApi, V: ResultsView> Clone for SubmissionHandler<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            view: Arc::clone(&self.view),
            ids: self.ids.clone(),
        }
    }
}

impl<A: RecommendationApi + 'static, V: ResultsView + 'static> SubmissionHandler<A, V> {
    pub fn new(api: A, view: V, ids: FieldIds) -> Self {
        Self {
            api: Arc::new(api),
            view: Arc::new(view),
            ids,
        }
    }

    /// 依設定的元素 id 讀取五個欄位
    pub fn gather_query(&self, form: &dyn FormSource) -> Result<CropQuery> {
        let read = |id: &str| {
            form.field_value(id)
                .ok_or_else(|| AdvisorError::MissingElementError { id: id.to_string() })
        };

        Ok(CropQuery {
            soil_type: read(&self.ids.soil_type)?,
            ph_level: read(&self.ids.ph_level)?,
            temperature: read(&self.ids.temperature)?,
            rainfall: read(&self.ids.rainfall)?,
            water_availability: read(&self.ids.water_availability)?,
        })
    }

    /// 送出請求並更新結果區塊；錯誤一律在此吞下並記錄
    pub async fn process(&self, query: CropQuery) -> SubmitOutcome {
        tracing::debug!("Submitting crop query: {:?}", query);

        match self.api.recommend(&query).await {
            Ok(body) => {
                let (recommendations, interrupted) = Recommendation::read_all(&body);
                self.view
                    .replace_content(render::render_html(&recommendations));

                match interrupted {
                    None => {
                        tracing::info!("✅ Received {} recommendations", recommendations.len());
                        SubmitOutcome::Rendered { recommendations }
                    }
                    Some(e) => {
                        tracing::error!(category = ?e.category(), "Error: {}", e);
                        SubmitOutcome::Interrupted {
                            recommendations,
                            reason: e.to_string(),
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!(category = ?e.category(), "Error: {}", e);
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// 不經過頁面事件，直接讀表單並等待結果
    pub async fn submit(&self, form: &dyn FormSource) -> SubmitOutcome {
        match self.gather_query(form) {
            Ok(query) => self.process(query).await,
            Err(e) => {
                tracing::error!("Error: {}", e);
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl<A: RecommendationApi + 'static, V: ResultsView + 'static> SubmitListener
    for SubmissionHandler<A, V>
{
    fn on_submit(
        &self,
        event: &mut SubmitEvent,
        form: &dyn FormSource,
    ) -> Option<JoinHandle<SubmitOutcome>> {
        event.prevent_default();

        let query = match self.gather_query(form) {
            Ok(query) => query,
            Err(e) => {
                tracing::error!("Error: {}", e);
                return None;
            }
        };

        // 沒有 runtime 就無法送出請求，當作失敗記錄
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Error: {}", e);
                return None;
            }
        };

        let handler = self.clone();
        Some(runtime.spawn(async move { handler.process(query).await }))
    }
}
