use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 campaigns 表（自然主键 name）
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaign::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaign::TipoCampania).string().not_null())
                    .col(ColumnDef::new(Campaign::FechaInicio).date().not_null())
                    .col(ColumnDef::new(Campaign::FechaFin).date().not_null())
                    .col(ColumnDef::new(Campaign::UniversoZonaMetro).big_integer().null())
                    .col(ColumnDef::new(Campaign::ImpactosPersonas).big_integer().null())
                    .col(ColumnDef::new(Campaign::ImpactosVehiculos).big_integer().null())
                    .col(ColumnDef::new(Campaign::FrecuenciaCalculada).double().null())
                    .col(ColumnDef::new(Campaign::FrecuenciaPromedio).double().null())
                    .col(ColumnDef::new(Campaign::Alcance).big_integer().null())
                    .col(ColumnDef::new(Campaign::NseAb).double().null())
                    .col(ColumnDef::new(Campaign::NseC).double().null())
                    .col(ColumnDef::new(Campaign::NseCmas).double().null())
                    .col(ColumnDef::new(Campaign::NseD).double().null())
                    .col(ColumnDef::new(Campaign::NseDmas).double().null())
                    .col(ColumnDef::new(Campaign::NseE).double().null())
                    .col(ColumnDef::new(Campaign::Edad0a14).double().null())
                    .col(ColumnDef::new(Campaign::Edad15a19).double().null())
                    .col(ColumnDef::new(Campaign::Edad20a24).double().null())
                    .col(ColumnDef::new(Campaign::Edad25a34).double().null())
                    .col(ColumnDef::new(Campaign::Edad35a44).double().null())
                    .col(ColumnDef::new(Campaign::Edad45a64).double().null())
                    .col(ColumnDef::new(Campaign::Edad65mas).double().null())
                    .col(ColumnDef::new(Campaign::Hombres).double().null())
                    .col(ColumnDef::new(Campaign::Mujeres).double().null())
                    .to_owned(),
            )
            .await?;

        // 列表与日期检索都按 fecha_inicio 排序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaigns_fecha_inicio")
                    .table(Campaign::Table)
                    .col(Campaign::FechaInicio)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaigns_tipo_campania")
                    .table(Campaign::Table)
                    .col(Campaign::TipoCampania)
                    .to_owned(),
            )
            .await?;

        // campaign_periods：campaign_name 不加外键约束
        manager
            .create_table(
                Table::create()
                    .table(CampaignPeriod::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignPeriod::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignPeriod::CampaignName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampaignPeriod::Period).string().not_null())
                    .col(
                        ColumnDef::new(CampaignPeriod::ImpactosPeriodoPersonas)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CampaignPeriod::ImpactosPeriodoVehiculos)
                            .big_integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaign_periods_campaign_name")
                    .table(CampaignPeriod::Table)
                    .col(CampaignPeriod::CampaignName)
                    .to_owned(),
            )
            .await?;

        // campaign_sites
        manager
            .create_table(
                Table::create()
                    .table(CampaignSite::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignSite::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignSite::CampaignName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignSite::CodigoDelSitio)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampaignSite::TipoDeMueble).string().null())
                    .col(ColumnDef::new(CampaignSite::TipoDeAnuncio).string().null())
                    .col(ColumnDef::new(CampaignSite::Estado).string().null())
                    .col(ColumnDef::new(CampaignSite::Municipio).string().null())
                    .col(ColumnDef::new(CampaignSite::Zm).string().null())
                    .col(
                        ColumnDef::new(CampaignSite::FrecuenciaCatorcenal)
                            .double()
                            .null(),
                    )
                    .col(ColumnDef::new(CampaignSite::FrecuenciaMensual).double().null())
                    .col(
                        ColumnDef::new(CampaignSite::ImpactosCatorcenal)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CampaignSite::ImpactosMensuales)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(CampaignSite::AlcanceMensual).double().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaign_sites_campaign_name")
                    .table(CampaignSite::Table)
                    .col(CampaignSite::CampaignName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignSite::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CampaignPeriod::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Campaign {
    #[sea_orm(iden = "campaigns")]
    Table,
    Name,
    TipoCampania,
    FechaInicio,
    FechaFin,
    UniversoZonaMetro,
    ImpactosPersonas,
    ImpactosVehiculos,
    FrecuenciaCalculada,
    FrecuenciaPromedio,
    Alcance,
    NseAb,
    NseC,
    NseCmas,
    NseD,
    NseDmas,
    NseE,
    #[sea_orm(iden = "edad_0a14")]
    Edad0a14,
    #[sea_orm(iden = "edad_15a19")]
    Edad15a19,
    #[sea_orm(iden = "edad_20a24")]
    Edad20a24,
    #[sea_orm(iden = "edad_25a34")]
    Edad25a34,
    #[sea_orm(iden = "edad_35a44")]
    Edad35a44,
    #[sea_orm(iden = "edad_45a64")]
    Edad45a64,
    #[sea_orm(iden = "edad_65mas")]
    Edad65mas,
    Hombres,
    Mujeres,
}

#[derive(DeriveIden)]
enum CampaignPeriod {
    #[sea_orm(iden = "campaign_periods")]
    Table,
    Id,
    CampaignName,
    Period,
    ImpactosPeriodoPersonas,
    ImpactosPeriodoVehiculos,
}

#[derive(DeriveIden)]
enum CampaignSite {
    #[sea_orm(iden = "campaign_sites")]
    Table,
    Id,
    CampaignName,
    CodigoDelSitio,
    TipoDeMueble,
    TipoDeAnuncio,
    Estado,
    Municipio,
    Zm,
    FrecuenciaCatorcenal,
    FrecuenciaMensual,
    ImpactosCatorcenal,
    ImpactosMensuales,
    AlcanceMensual,
}
