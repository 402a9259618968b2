use serde::{Deserialize, Serialize};

/// A public holiday as served by the holiday data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: String,
    pub name: String,
    #[serde(rename = "localName")]
    pub local_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A long-weekend window derived from the holiday calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongWeekend {
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "dayCount")]
    pub day_count: u32,
    #[serde(rename = "needBridgeDay")]
    pub needs_bridge_day: bool,
}
