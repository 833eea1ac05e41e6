use crate::utils::error::AdvisorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 送往後端的表單內容，五個欄位皆為原樣字串，不做轉型或驗證
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropQuery {
    pub soil_type: String,
    pub ph_level: String,
    pub temperature: String,
    pub rainfall: String,
    pub water_availability: String,
}

/// 後端回傳的一筆建議
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub crop: String,
    pub suitability: String,
}

impl Recommendation {
    pub fn new(crop: impl Into<String>, suitability: impl Into<String>) -> Self {
        Self {
            crop: crop.into(),
            suitability: suitability.into(),
        }
    }

    /// 從單一元素建立建議；缺少的欄位輸出為空字串，不視為錯誤
    ///
    /// 非物件的元素（字串、數字等）沒有欄位可讀，兩個值都是空字串；
    /// `null` 元素無法讀取欄位，回傳 None。
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }

        Some(Self {
            crop: label_of(value.get("crop")),
            suitability: label_of(value.get("suitability")),
        })
    }

    /// 依序讀取整個回應
    ///
    /// 回應不是陣列時沒有任何建議；遇到 `null` 元素即停止，之前讀到的保留。
    /// 中斷原因以錯誤回傳，由呼叫端記錄。
    pub fn read_all(body: &Value) -> (Vec<Self>, Option<AdvisorError>) {
        let items = match body.as_array() {
            Some(items) => items,
            None => {
                return (
                    Vec::new(),
                    Some(AdvisorError::ResponseShapeError {
                        message: format!("expected an array, got {}", kind_of(body)),
                    }),
                )
            }
        };

        let mut recommendations = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match Self::from_value(item) {
                Some(rec) => recommendations.push(rec),
                None => {
                    return (
                        recommendations,
                        Some(AdvisorError::ResponseShapeError {
                            message: format!("element {} is null", index),
                        }),
                    )
                }
            }
        }

        (recommendations, None)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn label_of(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(value) => template_text(value),
    }
}

/// 與頁面樣板字串相同的轉字串規則
fn template_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                // -0 同樣輸出為 0
                format!("{:.0}", f + 0.0)
            }
            _ => n.to_string(),
        },
        Value::Object(_) => "[object Object]".to_string(),
        // 陣列以逗號串接，null 元素為空字串
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => template_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// 頁面元素 id，預設值與前端頁面一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub form_id: String,
    pub soil_type: String,
    pub ph_level: String,
    pub temperature: String,
    pub rainfall: String,
    pub water_availability: String,
    pub results_id: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            form_id: "crop-form".to_string(),
            soil_type: "soil-type".to_string(),
            ph_level: "ph-level".to_string(),
            temperature: "temperature".to_string(),
            rainfall: "rainfall".to_string(),
            water_availability: "water-availability".to_string(),
            results_id: "recommendations".to_string(),
        }
    }
}

impl FieldIds {
    /// 五個輸入欄位的 id，依送出順序
    pub fn input_ids(&self) -> [&str; 5] {
        [
            self.soil_type.as_str(),
            self.ph_level.as_str(),
            self.temperature.as_str(),
            self.rainfall.as_str(),
            self.water_availability.as_str(),
        ]
    }
}

/// submit 事件；監聽器必須呼叫 `prevent_default`，否則頁面會重新載入
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// 一次送出的結果，只供呼叫端觀察，錯誤不會從處理器拋出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered { recommendations: Vec<Recommendation> },
    /// 回應格式不符，結果區塊只顯示中斷前已讀到的建議
    Interrupted {
        recommendations: Vec<Recommendation>,
        reason: String,
    },
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered { .. })
    }
}
