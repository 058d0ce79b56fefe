use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_name: String,
    pub period: String,
    pub impactos_periodo_personas: Option<i64>,
    pub impactos_periodo_vehiculos: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
