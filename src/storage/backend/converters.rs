use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::models::{
    Campaign, CampaignPeriod, CampaignSite, NewCampaignPeriod, NewCampaignSite,
};
use migration::entities::{campaign, campaign_period, campaign_site};

/// 将 Sea-ORM Model 转换为 Campaign
pub fn model_to_campaign(model: campaign::Model) -> Campaign {
    Campaign {
        name: model.name,
        tipo_campania: model.tipo_campania,
        fecha_inicio: model.fecha_inicio,
        fecha_fin: model.fecha_fin,
        universo_zona_metro: model.universo_zona_metro,
        impactos_personas: model.impactos_personas,
        impactos_vehiculos: model.impactos_vehiculos,
        frecuencia_calculada: model.frecuencia_calculada,
        frecuencia_promedio: model.frecuencia_promedio,
        alcance: model.alcance,
        nse_ab: model.nse_ab,
        nse_c: model.nse_c,
        nse_cmas: model.nse_cmas,
        nse_d: model.nse_d,
        nse_dmas: model.nse_dmas,
        nse_e: model.nse_e,
        edad_0a14: model.edad_0a14,
        edad_15a19: model.edad_15a19,
        edad_20a24: model.edad_20a24,
        edad_25a34: model.edad_25a34,
        edad_35a44: model.edad_35a44,
        edad_45a64: model.edad_45a64,
        edad_65mas: model.edad_65mas,
        hombres: model.hombres,
        mujeres: model.mujeres,
    }
}

/// 将 Campaign 转换为 ActiveModel（用于插入）
pub fn campaign_to_active_model(c: &Campaign) -> campaign::ActiveModel {
    campaign::ActiveModel {
        name: Set(c.name.clone()),
        tipo_campania: Set(c.tipo_campania.clone()),
        fecha_inicio: Set(c.fecha_inicio),
        fecha_fin: Set(c.fecha_fin),
        universo_zona_metro: Set(c.universo_zona_metro),
        impactos_personas: Set(c.impactos_personas),
        impactos_vehiculos: Set(c.impactos_vehiculos),
        frecuencia_calculada: Set(c.frecuencia_calculada),
        frecuencia_promedio: Set(c.frecuencia_promedio),
        alcance: Set(c.alcance),
        nse_ab: Set(c.nse_ab),
        nse_c: Set(c.nse_c),
        nse_cmas: Set(c.nse_cmas),
        nse_d: Set(c.nse_d),
        nse_dmas: Set(c.nse_dmas),
        nse_e: Set(c.nse_e),
        edad_0a14: Set(c.edad_0a14),
        edad_15a19: Set(c.edad_15a19),
        edad_20a24: Set(c.edad_20a24),
        edad_25a34: Set(c.edad_25a34),
        edad_35a44: Set(c.edad_35a44),
        edad_45a64: Set(c.edad_45a64),
        edad_65mas: Set(c.edad_65mas),
        hombres: Set(c.hombres),
        mujeres: Set(c.mujeres),
    }
}

pub fn model_to_period(model: campaign_period::Model) -> CampaignPeriod {
    CampaignPeriod {
        id: model.id,
        campaign_name: model.campaign_name,
        period: model.period,
        impactos_periodo_personas: model.impactos_periodo_personas,
        impactos_periodo_vehiculos: model.impactos_periodo_vehiculos,
    }
}

/// id 交给数据库自增
pub fn new_period_to_active_model(p: &NewCampaignPeriod) -> campaign_period::ActiveModel {
    campaign_period::ActiveModel {
        id: NotSet,
        campaign_name: Set(p.campaign_name.clone()),
        period: Set(p.period.clone()),
        impactos_periodo_personas: Set(p.impactos_periodo_personas),
        impactos_periodo_vehiculos: Set(p.impactos_periodo_vehiculos),
    }
}

pub fn model_to_site(model: campaign_site::Model) -> CampaignSite {
    CampaignSite {
        id: model.id,
        campaign_name: model.campaign_name,
        codigo_del_sitio: model.codigo_del_sitio,
        tipo_de_mueble: model.tipo_de_mueble,
        tipo_de_anuncio: model.tipo_de_anuncio,
        estado: model.estado,
        municipio: model.municipio,
        zm: model.zm,
        frecuencia_catorcenal: model.frecuencia_catorcenal,
        frecuencia_mensual: model.frecuencia_mensual,
        impactos_catorcenal: model.impactos_catorcenal,
        impactos_mensuales: model.impactos_mensuales,
        alcance_mensual: model.alcance_mensual,
    }
}

pub fn new_site_to_active_model(s: &NewCampaignSite) -> campaign_site::ActiveModel {
    campaign_site::ActiveModel {
        id: NotSet,
        campaign_name: Set(s.campaign_name.clone()),
        codigo_del_sitio: Set(s.codigo_del_sitio.clone()),
        tipo_de_mueble: Set(s.tipo_de_mueble.clone()),
        tipo_de_anuncio: Set(s.tipo_de_anuncio.clone()),
        estado: Set(s.estado.clone()),
        municipio: Set(s.municipio.clone()),
        zm: Set(s.zm.clone()),
        frecuencia_catorcenal: Set(s.frecuencia_catorcenal),
        frecuencia_mensual: Set(s.frecuencia_mensual),
        impactos_catorcenal: Set(s.impactos_catorcenal),
        impactos_mensuales: Set(s.impactos_mensuales),
        alcance_mensual: Set(s.alcance_mensual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::ActiveValue;

    fn sample_campaign() -> Campaign {
        let mut c = Campaign::bare(
            "Verano 2024",
            "mensual",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
        c.impactos_personas = Some(120_000);
        c.nse_ab = Some(0.18);
        c
    }

    #[test]
    fn test_campaign_to_active_model_sets_every_field() {
        let active = campaign_to_active_model(&sample_campaign());
        assert_eq!(active.name, ActiveValue::Set("Verano 2024".to_string()));
        assert_eq!(active.impactos_personas, ActiveValue::Set(Some(120_000)));
        assert_eq!(active.alcance, ActiveValue::Set(None));
        assert_eq!(active.nse_ab, ActiveValue::Set(Some(0.18)));
    }

    #[test]
    fn test_campaign_model_roundtrip() {
        let c = sample_campaign();
        let model = campaign::Model {
            name: c.name.clone(),
            tipo_campania: c.tipo_campania.clone(),
            fecha_inicio: c.fecha_inicio,
            fecha_fin: c.fecha_fin,
            universo_zona_metro: None,
            impactos_personas: Some(120_000),
            impactos_vehiculos: None,
            frecuencia_calculada: None,
            frecuencia_promedio: None,
            alcance: None,
            nse_ab: Some(0.18),
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
        };
        assert_eq!(model_to_campaign(model), c);
    }

    #[test]
    fn test_new_period_leaves_id_unset() {
        let active = new_period_to_active_model(&NewCampaignPeriod {
            campaign_name: "c".to_string(),
            period: "2024-01".to_string(),
            impactos_periodo_personas: Some(10),
            impactos_periodo_vehiculos: None,
        });
        assert_eq!(active.id, ActiveValue::NotSet);
        assert_eq!(active.impactos_periodo_personas, ActiveValue::Set(Some(10)));
    }

    #[test]
    fn test_model_to_site() {
        let site = model_to_site(campaign_site::Model {
            id: 7,
            campaign_name: "c".to_string(),
            codigo_del_sitio: "S-001".to_string(),
            tipo_de_mueble: Some("Parabus".to_string()),
            tipo_de_anuncio: None,
            estado: Some("CDMX".to_string()),
            municipio: None,
            zm: None,
            frecuencia_catorcenal: None,
            frecuencia_mensual: Some(2.5),
            impactos_catorcenal: None,
            impactos_mensuales: Some(900),
            alcance_mensual: None,
        });
        assert_eq!(site.id, 7);
        assert_eq!(site.codigo_del_sitio, "S-001");
        assert_eq!(site.impactos_mensuales, Some(900));
    }
}
