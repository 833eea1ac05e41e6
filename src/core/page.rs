use crate::domain::model::{FieldIds, SubmitEvent, SubmitOutcome};
use crate::domain::ports::{FormSource, ResultsView, SubmitListener};
use crate::utils::error::{AdvisorError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use tokio::task::JoinHandle;

/// 結果區塊，可在多個背景請求之間共用；最後寫入者為準
#[derive(Debug, Clone, Default)]
pub struct ResultsContainer {
    html: Arc<Mutex<String>>,
}

impl ResultsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(html: impl Into<String>) -> Self {
        Self {
            html: Arc::new(Mutex::new(html.into())),
        }
    }
}

impl ResultsView for ResultsContainer {
    fn replace_content(&self, html: String) {
        let mut current = self.html.lock().unwrap_or_else(PoisonError::into_inner);
        *current = html;
    }

    fn content(&self) -> String {
        self.html
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// 一次 submit 的結果：是否觸發重新載入，以及背景請求的 handle
pub struct Submission {
    pub reloaded: bool,
    pub pending: Option<JoinHandle<SubmitOutcome>>,
}

impl Submission {
    /// 等待背景請求完成；沒有送出請求時回傳 None
    pub async fn settle(self) -> Option<SubmitOutcome> {
        let handle = self.pending?;
        match handle.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::warn!("Submit task did not complete: {}", e);
                None
            }
        }
    }
}

/// 記憶體中的表單頁面：輸入欄位、結果區塊與單一 submit 監聽器
pub struct FormPage {
    ids: FieldIds,
    fields: RwLock<HashMap<String, String>>,
    results: ResultsContainer,
    listener: OnceLock<Arc<dyn SubmitListener>>,
}

impl FormPage {
    /// 建立頁面，五個輸入欄位皆存在且為空字串
    pub fn new(ids: FieldIds) -> Self {
        let fields = ids
            .input_ids()
            .iter()
            .map(|id| (id.to_string(), String::new()))
            .collect();

        Self {
            ids,
            fields: RwLock::new(fields),
            results: ResultsContainer::new(),
            listener: OnceLock::new(),
        }
    }

    pub fn field_ids(&self) -> &FieldIds {
        &self.ids
    }

    pub fn set_field(&self, element_id: &str, value: impl Into<String>) {
        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        fields.insert(element_id.to_string(), value.into());
    }

    pub fn remove_field(&self, element_id: &str) -> Option<String> {
        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        fields.remove(element_id)
    }

    pub fn results(&self) -> ResultsContainer {
        self.results.clone()
    }

    /// 綁定 submit 監聽器；每個頁面只能綁定一次，之後不會解除
    pub fn bind_submit(&self, listener: Arc<dyn SubmitListener>) -> Result<()> {
        self.listener
            .set(listener)
            .map_err(|_| AdvisorError::ListenerAlreadyBound {
                form_id: self.ids.form_id.clone(),
            })?;
        tracing::debug!("Submit listener bound to #{}", self.ids.form_id);
        Ok(())
    }

    /// 觸發表單 submit
    pub fn submit(&self) -> Submission {
        let mut event = SubmitEvent::new();
        let pending = match self.listener.get() {
            Some(listener) => listener.on_submit(&mut event, self),
            None => None,
        };

        let reloaded = !event.default_prevented();
        if reloaded {
            tracing::warn!("#{} submitted without a listener, page reloads", self.ids.form_id);
        }

        Submission { reloaded, pending }
    }
}

impl FormSource for FormPage {
    fn field_value(&self, element_id: &str) -> Option<String> {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        fields.get(element_id).cloned()
    }
}
