use crate::core::page::FormPage;
use clap::Args;
use serde::{Deserialize, Serialize};

/// 命令列上輸入的五個表單值，原樣填入頁面
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct FormValues {
    #[arg(long, default_value = "")]
    pub soil_type: String,

    #[arg(long, default_value = "")]
    pub ph_level: String,

    #[arg(long, default_value = "")]
    pub temperature: String,

    #[arg(long, default_value = "")]
    pub rainfall: String,

    #[arg(long, default_value = "")]
    pub water_availability: String,
}

impl FormValues {
    pub fn apply_to(&self, page: &FormPage) {
        let ids = page.field_ids().clone();
        page.set_field(&ids.soil_type, self.soil_type.as_str());
        page.set_field(&ids.ph_level, self.ph_level.as_str());
        page.set_field(&ids.temperature, self.temperature.as_str());
        page.set_field(&ids.rainfall, self.rainfall.as_str());
        page.set_field(&ids.water_availability, self.water_availability.as_str());
    }
}
