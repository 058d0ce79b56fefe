use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use ts_rs::TS;

/// TypeScript 类型导出路径（前端）
pub const TS_EXPORT_PATH: &str = "../frontend/src/types/campaign.generated.ts";

/// 活动类型（tipo_campania）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumIter, AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CampaignType {
    Mensual,
    Catorcenal,
}

impl CampaignType {
    /// 按字母序排列的合法取值
    pub fn allowed_values_sorted() -> Vec<&'static str> {
        let mut values: Vec<&'static str> = Self::iter().map(|t| t.as_str()).collect();
        values.sort_unstable();
        values
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mensual => "mensual",
            Self::Catorcenal => "catorcenal",
        }
    }
}

impl std::fmt::Display for CampaignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampaignType {
    type Err = String;

    /// 大小写不敏感：`MENSUAL` 等价于 `mensual`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "tipo_campania debe ser uno de: {}",
                    Self::allowed_values_sorted().join(", ")
                )
            })
    }
}

/// 广告活动
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct Campaign {
    pub name: String,
    pub tipo_campania: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    #[ts(type = "number | null")]
    pub universo_zona_metro: Option<i64>,
    #[ts(type = "number | null")]
    pub impactos_personas: Option<i64>,
    #[ts(type = "number | null")]
    pub impactos_vehiculos: Option<i64>,
    pub frecuencia_calculada: Option<f64>,
    pub frecuencia_promedio: Option<f64>,
    #[ts(type = "number | null")]
    pub alcance: Option<i64>,
    pub nse_ab: Option<f64>,
    pub nse_c: Option<f64>,
    pub nse_cmas: Option<f64>,
    pub nse_d: Option<f64>,
    pub nse_dmas: Option<f64>,
    pub nse_e: Option<f64>,
    pub edad_0a14: Option<f64>,
    pub edad_15a19: Option<f64>,
    pub edad_20a24: Option<f64>,
    pub edad_25a34: Option<f64>,
    pub edad_35a44: Option<f64>,
    pub edad_45a64: Option<f64>,
    pub edad_65mas: Option<f64>,
    pub hombres: Option<f64>,
    pub mujeres: Option<f64>,
}

impl Campaign {
    /// 只有名称、类型和日期的活动，指标全部为空
    pub fn bare(
        name: impl Into<String>,
        tipo_campania: impl Into<String>,
        fecha_inicio: NaiveDate,
        fecha_fin: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            tipo_campania: tipo_campania.into(),
            fecha_inicio,
            fecha_fin,
            universo_zona_metro: None,
            impactos_personas: None,
            impactos_vehiculos: None,
            frecuencia_calculada: None,
            frecuencia_promedio: None,
            alcance: None,
            nse_ab: None,
            nse_c: None,
            nse_cmas: None,
            nse_d: None,
            nse_dmas: None,
            nse_e: None,
            edad_0a14: None,
            edad_15a19: None,
            edad_20a24: None,
            edad_25a34: None,
            edad_35a44: None,
            edad_45a64: None,
            edad_65mas: None,
            hombres: None,
            mujeres: None,
        }
    }

    /// fecha_inicio > fecha_fin（存储层不拒绝这种数据）
    pub fn has_inverted_window(&self) -> bool {
        self.fecha_inicio > self.fecha_fin
    }
}

/// 活动的时间段统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct CampaignPeriod {
    #[ts(type = "number")]
    pub id: i64,
    pub campaign_name: String,
    pub period: String,
    #[ts(type = "number | null")]
    pub impactos_periodo_personas: Option<i64>,
    #[ts(type = "number | null")]
    pub impactos_periodo_vehiculos: Option<i64>,
}

/// 活动的投放点位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct CampaignSite {
    #[ts(type = "number")]
    pub id: i64,
    pub campaign_name: String,
    pub codigo_del_sitio: String,
    pub tipo_de_mueble: Option<String>,
    pub tipo_de_anuncio: Option<String>,
    pub estado: Option<String>,
    pub municipio: Option<String>,
    pub zm: Option<String>,
    pub frecuencia_catorcenal: Option<f64>,
    pub frecuencia_mensual: Option<f64>,
    #[ts(type = "number | null")]
    pub impactos_catorcenal: Option<i64>,
    #[ts(type = "number | null")]
    pub impactos_mensuales: Option<i64>,
    pub alcance_mensual: Option<f64>,
}

/// 待写入的 period（id 由数据库生成）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaignPeriod {
    pub campaign_name: String,
    pub period: String,
    pub impactos_periodo_personas: Option<i64>,
    pub impactos_periodo_vehiculos: Option<i64>,
}

/// 待写入的 site（id 由数据库生成）
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaignSite {
    pub campaign_name: String,
    pub codigo_del_sitio: String,
    pub tipo_de_mueble: Option<String>,
    pub tipo_de_anuncio: Option<String>,
    pub estado: Option<String>,
    pub municipio: Option<String>,
    pub zm: Option<String>,
    pub frecuencia_catorcenal: Option<f64>,
    pub frecuencia_mensual: Option<f64>,
    pub impactos_catorcenal: Option<i64>,
    pub impactos_mensuales: Option<i64>,
    pub alcance_mensual: Option<f64>,
}

/// 一个活动及其显式加载的 periods / sites
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBundle {
    pub campaign: Campaign,
    pub periods: Vec<CampaignPeriod>,
    pub sites: Vec<CampaignSite>,
}

/// 一次全量导入要写入的数据
#[derive(Debug, Clone, Default)]
pub struct CampaignDataset {
    pub campaigns: Vec<Campaign>,
    pub periods: Vec<NewCampaignPeriod>,
    pub sites: Vec<NewCampaignSite>,
}

/// 闭区间日期窗口 [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// 各表行数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub campaigns: u64,
    pub periods: u64,
    pub sites: u64,
}
