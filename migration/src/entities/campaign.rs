//! Campaign entity (natural key: `name`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub tipo_campania: String,
    pub fecha_inicio: Date,
    pub fecha_fin: Date,
    pub universo_zona_metro: Option<i64>,
    pub impactos_personas: Option<i64>,
    pub impactos_vehiculos: Option<i64>,
    pub frecuencia_calculada: Option<f64>,
    pub frecuencia_promedio: Option<f64>,
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

// periods / sites 通过 campaign_name 显式查询，不声明关系
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
