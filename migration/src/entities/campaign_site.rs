use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_sites")]
pub struct Model {
    #[sea_orm(primary_key)]
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
    pub impactos_catorcenal: Option<i64>,
    pub impactos_mensuales: Option<i64>,
    pub alcance_mensual: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
