//! 活动详情的汇总计算
//!
//! 全部为纯函数：输入一个活动及其 periods / sites，输出三个汇总块。

use std::iter::Sum;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::storage::models::{
    Campaign, CampaignBundle, CampaignPeriod, CampaignSite, TS_EXPORT_PATH,
};

/// 活动自身指标的透传
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct GeneralSummary {
    #[ts(type = "number | null")]
    pub impactos_personas: Option<i64>,
    #[ts(type = "number | null")]
    pub impactos_vehiculos: Option<i64>,
    #[ts(type = "number | null")]
    pub alcance: Option<i64>,
    pub frecuencia_calculada: Option<f64>,
    pub frecuencia_promedio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PeriodSummary {
    #[ts(type = "number")]
    pub total_periodos: usize,
    #[ts(type = "number")]
    pub impactos_personas: i64,
    #[ts(type = "number")]
    pub impactos_vehiculos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct SiteSummary {
    #[ts(type = "number")]
    pub total_sitios: usize,
    #[ts(type = "number")]
    pub impactos_mensuales: i64,
    #[ts(type = "number")]
    pub impactos_catorcenal: i64,
    pub alcance_mensual_promedio: f64,
}

/// 三个汇总块
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    pub general_summary: GeneralSummary,
    pub period_summary: PeriodSummary,
    pub site_summary: SiteSummary,
}

/// 活动详情：活动字段（展开）+ 明细 + 汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct CampaignDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub campaign: Campaign,
    pub periods: Vec<CampaignPeriod>,
    pub sites: Vec<CampaignSite>,
    pub general_summary: GeneralSummary,
    pub period_summary: PeriodSummary,
    pub site_summary: SiteSummary,
}

/// 跳过空值求和；全部为空或没有元素时为 0
pub fn null_safe_sum<T, I>(values: I) -> T
where
    T: Sum<T>,
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().sum()
}

/// 保留两位小数，四舍五入（远离零）
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn general_summary(campaign: &Campaign) -> GeneralSummary {
    GeneralSummary {
        impactos_personas: campaign.impactos_personas,
        impactos_vehiculos: campaign.impactos_vehiculos,
        alcance: campaign.alcance,
        frecuencia_calculada: campaign.frecuencia_calculada,
        frecuencia_promedio: campaign.frecuencia_promedio,
    }
}

pub fn period_summary(periods: &[CampaignPeriod]) -> PeriodSummary {
    PeriodSummary {
        total_periodos: periods.len(),
        impactos_personas: null_safe_sum(periods.iter().map(|p| p.impactos_periodo_personas)),
        impactos_vehiculos: null_safe_sum(periods.iter().map(|p| p.impactos_periodo_vehiculos)),
    }
}

pub fn site_summary(sites: &[CampaignSite]) -> SiteSummary {
    let total_sitios = sites.len();
    let alcance_mensual_promedio = if total_sitios == 0 {
        0.0
    } else {
        let alcance_total: f64 = null_safe_sum(sites.iter().map(|s| s.alcance_mensual));
        round2(alcance_total / total_sitios as f64)
    };

    SiteSummary {
        total_sitios,
        impactos_mensuales: null_safe_sum(sites.iter().map(|s| s.impactos_mensuales)),
        impactos_catorcenal: null_safe_sum(sites.iter().map(|s| s.impactos_catorcenal)),
        alcance_mensual_promedio,
    }
}

pub fn summarize(
    campaign: &Campaign,
    periods: &[CampaignPeriod],
    sites: &[CampaignSite],
) -> Summaries {
    Summaries {
        general_summary: general_summary(campaign),
        period_summary: period_summary(periods),
        site_summary: site_summary(sites),
    }
}

impl From<CampaignBundle> for CampaignDetail {
    fn from(bundle: CampaignBundle) -> Self {
        let Summaries {
            general_summary,
            period_summary,
            site_summary,
        } = summarize(&bundle.campaign, &bundle.periods, &bundle.sites);

        CampaignDetail {
            campaign: bundle.campaign,
            periods: bundle.periods,
            sites: bundle.sites,
            general_summary,
            period_summary,
            site_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn campaign() -> Campaign {
        let mut c = Campaign::bare(
            "camp_may",
            "mensual",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
        );
        c.impactos_personas = Some(5000);
        c.alcance = Some(1200);
        c.frecuencia_promedio = Some(3.4);
        c
    }

    fn period(id: i64, personas: Option<i64>, vehiculos: Option<i64>) -> CampaignPeriod {
        CampaignPeriod {
            id,
            campaign_name: "camp_may".to_string(),
            period: format!("P{}", id),
            impactos_periodo_personas: personas,
            impactos_periodo_vehiculos: vehiculos,
        }
    }

    fn site(id: i64, mensuales: Option<i64>, alcance: Option<f64>) -> CampaignSite {
        CampaignSite {
            id,
            campaign_name: "camp_may".to_string(),
            codigo_del_sitio: format!("S-{}", id),
            tipo_de_mueble: None,
            tipo_de_anuncio: None,
            estado: None,
            municipio: None,
            zm: None,
            frecuencia_catorcenal: None,
            frecuencia_mensual: None,
            impactos_catorcenal: None,
            impactos_mensuales: mensuales,
            alcance_mensual: alcance,
        }
    }

    #[test]
    fn test_null_safe_sum() {
        assert_eq!(null_safe_sum(vec![Some(1i64), None, Some(2)]), 3);
        assert_eq!(null_safe_sum::<i64, _>(Vec::new()), 0);
        assert_eq!(null_safe_sum::<i64, _>(vec![None, None]), 0);
        assert_eq!(null_safe_sum(vec![Some(0.5f64), None, Some(0.25)]), 0.75);
    }

    #[test]
    fn test_null_safe_sum_matches_filtered_sum() {
        let values = vec![Some(10i64), None, Some(-3), None, Some(7)];
        let filtered: i64 = values.iter().filter_map(|v| *v).sum();
        assert_eq!(null_safe_sum(values), filtered);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn test_single_period() {
        let summary = period_summary(&[period(1, Some(200), Some(100))]);
        assert_eq!(
            summary,
            PeriodSummary {
                total_periodos: 1,
                impactos_personas: 200,
                impactos_vehiculos: 100,
            }
        );
    }

    #[test]
    fn test_periods_with_nulls() {
        let summary = period_summary(&[
            period(1, Some(200), None),
            period(2, None, Some(40)),
            period(3, Some(50), Some(10)),
        ]);
        assert_eq!(summary.total_periodos, 3);
        assert_eq!(summary.impactos_personas, 250);
        assert_eq!(summary.impactos_vehiculos, 50);
    }

    #[test]
    fn test_no_sites() {
        let summary = site_summary(&[]);
        assert_eq!(summary.total_sitios, 0);
        assert_eq!(summary.impactos_mensuales, 0);
        assert_eq!(summary.impactos_catorcenal, 0);
        assert_eq!(summary.alcance_mensual_promedio, 0.0);
    }

    #[test]
    fn test_site_average_divides_by_all_sites() {
        // 空值不计入分子，但计入分母
        let summary = site_summary(&[
            site(1, Some(100), Some(10.0)),
            site(2, None, None),
            site(3, Some(50), Some(5.0)),
        ]);
        assert_eq!(summary.total_sitios, 3);
        assert_eq!(summary.impactos_mensuales, 150);
        assert_eq!(summary.alcance_mensual_promedio, 5.0);
    }

    #[test]
    fn test_site_average_is_rounded() {
        let summary = site_summary(&[
            site(1, None, Some(1.0)),
            site(2, None, Some(1.0)),
            site(3, None, Some(0.0)),
        ]);
        assert_eq!(summary.alcance_mensual_promedio, 0.67);
    }

    #[test]
    fn test_general_summary_passthrough() {
        let general = general_summary(&campaign());
        assert_eq!(general.impactos_personas, Some(5000));
        assert_eq!(general.impactos_vehiculos, None);
        assert_eq!(general.alcance, Some(1200));
        assert_eq!(general.frecuencia_promedio, Some(3.4));
    }

    #[test]
    fn test_detail_serializes_flat_campaign_fields() {
        let detail = CampaignDetail::from(CampaignBundle {
            campaign: campaign(),
            periods: vec![period(1, Some(200), Some(100))],
            sites: vec![],
        });
        let value = serde_json::to_value(&detail).unwrap();

        assert_eq!(value["name"], "camp_may");
        assert_eq!(value["fecha_inicio"], "2024-05-01");
        assert_eq!(value["periods"].as_array().unwrap().len(), 1);
        assert_eq!(value["period_summary"]["total_periodos"], 1);
        assert_eq!(value["site_summary"]["total_sitios"], 0);
        assert_eq!(value["site_summary"]["alcance_mensual_promedio"], 0.0);
        assert_eq!(value["general_summary"]["impactos_personas"], 5000);
        assert!(value.get("campaign").is_none());
    }
}
