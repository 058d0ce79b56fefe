//! 三个 CSV 数据源的读取与行类型
//!
//! 行结构体只保存原始文本；类型转换在 `into_*` 中完成，
//! 以便错误信息能带上文件名、行号和列名。

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::normalize::{clean_number, optional_text, parse_date, parse_float, parse_integer};
use crate::errors::{AnalyticsError, Result};
use crate::storage::models::{Campaign, NewCampaignPeriod, NewCampaignSite};

pub const CAMPAIGNS_FILE: &str = "bd_campanias_agrupado.csv";
pub const PERIODS_FILE: &str = "bd_campanias_periodos.csv";
pub const SITES_FILE: &str = "bd_campanias_sitios.csv";

/// 车辆曝光列的两种表头写法，带重音的优先
pub const VEHICLE_COLUMN_ACCENTED: &str = "impactos_periodo_vehículos";
pub const VEHICLE_COLUMN: &str = "impactos_periodo_vehiculos";
const VEHICLE_COLUMN_SHADOWED: &str = "impactos_periodo_vehiculos__ignored";

/// 数据目录中三个源文件的路径
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub campaigns: PathBuf,
    pub periods: PathBuf,
    pub sites: PathBuf,
}

impl SourcePaths {
    /// 解析并检查三个文件都存在；任何一个缺失都不会继续
    pub fn resolve(data_dir: &Path) -> Result<Self> {
        let paths = Self {
            campaigns: data_dir.join(CAMPAIGNS_FILE),
            periods: data_dir.join(PERIODS_FILE),
            sites: data_dir.join(SITES_FILE),
        };

        for path in [&paths.campaigns, &paths.periods, &paths.sites] {
            if !path.is_file() {
                return Err(AnalyticsError::missing_source_file(format!(
                    "缺少数据文件: {}",
                    path.display()
                )));
            }
        }

        Ok(paths)
    }
}

/// bd_campanias_agrupado.csv 的一行
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignCsvRow {
    pub name: String,
    pub tipo_campania: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(default)]
    pub universo_zona_metro: Option<String>,
    #[serde(default)]
    pub impactos_personas: Option<String>,
    #[serde(default)]
    pub impactos_vehiculos: Option<String>,
    #[serde(default)]
    pub frecuencia_calculada: Option<String>,
    #[serde(default)]
    pub frecuencia_promedio: Option<String>,
    #[serde(default)]
    pub alcance: Option<String>,
    #[serde(default)]
    pub nse_ab: Option<String>,
    #[serde(default)]
    pub nse_c: Option<String>,
    #[serde(default)]
    pub nse_cmas: Option<String>,
    #[serde(default)]
    pub nse_d: Option<String>,
    #[serde(default)]
    pub nse_dmas: Option<String>,
    #[serde(default)]
    pub nse_e: Option<String>,
    #[serde(default)]
    pub edad_0a14: Option<String>,
    #[serde(default)]
    pub edad_15a19: Option<String>,
    #[serde(default)]
    pub edad_20a24: Option<String>,
    #[serde(default)]
    pub edad_25a34: Option<String>,
    #[serde(default)]
    pub edad_35a44: Option<String>,
    #[serde(default)]
    pub edad_45a64: Option<String>,
    #[serde(default)]
    pub edad_65mas: Option<String>,
    #[serde(default)]
    pub hombres: Option<String>,
    #[serde(default)]
    pub mujeres: Option<String>,
}

/// bd_campanias_periodos.csv 的一行（车辆列已统一为无重音表头）
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodCsvRow {
    pub name: String,
    pub period: String,
    #[serde(default)]
    pub impactos_periodo_personas: Option<String>,
    #[serde(default)]
    pub impactos_periodo_vehiculos: Option<String>,
}

/// bd_campanias_sitios.csv 的一行
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCsvRow {
    pub name: String,
    pub codigo_del_sitio: String,
    #[serde(default)]
    pub tipo_de_mueble: Option<String>,
    #[serde(default)]
    pub tipo_de_anuncio: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub zm: Option<String>,
    #[serde(default)]
    pub frecuencia_catorcenal: Option<String>,
    #[serde(default)]
    pub frecuencia_mensual: Option<String>,
    #[serde(default)]
    pub impactos_catorcenal: Option<String>,
    #[serde(default)]
    pub impactos_mensuales: Option<String>,
    #[serde(default)]
    pub alcance_mensual: Option<String>,
}

/// 行定位信息，用于构造 CsvParse 错误
#[derive(Debug, Clone, Copy)]
pub struct RowLocation<'a> {
    pub file: &'a str,
    pub row: usize,
}

impl RowLocation<'_> {
    fn error(&self, column: &str, reason: impl std::fmt::Display) -> AnalyticsError {
        AnalyticsError::csv_parse(format!(
            "{} 第 {} 行, 列 `{}`: {}",
            self.file, self.row, column, reason
        ))
    }

    fn integer(&self, column: &str, raw: &Option<String>) -> Result<Option<i64>> {
        parse_integer(raw.as_deref().unwrap_or("")).map_err(|r| self.error(column, r))
    }

    fn cleaned_integer(&self, column: &str, raw: &Option<String>) -> Result<Option<i64>> {
        clean_number(raw.as_deref().unwrap_or("")).map_err(|r| self.error(column, r))
    }

    fn float(&self, column: &str, raw: &Option<String>) -> Result<Option<f64>> {
        parse_float(raw.as_deref().unwrap_or("")).map_err(|r| self.error(column, r))
    }

    fn date(&self, column: &str, raw: &str) -> Result<NaiveDate> {
        parse_date(raw).map_err(|r| self.error(column, r))
    }
}

impl CampaignCsvRow {
    pub fn into_campaign(self, at: RowLocation<'_>) -> Result<Campaign> {
        Ok(Campaign {
            name: self.name.trim().to_string(),
            tipo_campania: self.tipo_campania.trim().to_string(),
            fecha_inicio: at.date("fecha_inicio", &self.fecha_inicio)?,
            fecha_fin: at.date("fecha_fin", &self.fecha_fin)?,
            universo_zona_metro: at.integer("universo_zona_metro", &self.universo_zona_metro)?,
            impactos_personas: at.integer("impactos_personas", &self.impactos_personas)?,
            impactos_vehiculos: at.integer("impactos_vehiculos", &self.impactos_vehiculos)?,
            frecuencia_calculada: at.float("frecuencia_calculada", &self.frecuencia_calculada)?,
            frecuencia_promedio: at.float("frecuencia_promedio", &self.frecuencia_promedio)?,
            alcance: at.integer("alcance", &self.alcance)?,
            nse_ab: at.float("nse_ab", &self.nse_ab)?,
            nse_c: at.float("nse_c", &self.nse_c)?,
            nse_cmas: at.float("nse_cmas", &self.nse_cmas)?,
            nse_d: at.float("nse_d", &self.nse_d)?,
            nse_dmas: at.float("nse_dmas", &self.nse_dmas)?,
            nse_e: at.float("nse_e", &self.nse_e)?,
            edad_0a14: at.float("edad_0a14", &self.edad_0a14)?,
            edad_15a19: at.float("edad_15a19", &self.edad_15a19)?,
            edad_20a24: at.float("edad_20a24", &self.edad_20a24)?,
            edad_25a34: at.float("edad_25a34", &self.edad_25a34)?,
            edad_35a44: at.float("edad_35a44", &self.edad_35a44)?,
            edad_45a64: at.float("edad_45a64", &self.edad_45a64)?,
            edad_65mas: at.float("edad_65mas", &self.edad_65mas)?,
            hombres: at.float("hombres", &self.hombres)?,
            mujeres: at.float("mujeres", &self.mujeres)?,
        })
    }
}

impl PeriodCsvRow {
    pub fn into_period(self, at: RowLocation<'_>) -> Result<NewCampaignPeriod> {
        Ok(NewCampaignPeriod {
            campaign_name: self.name.trim().to_string(),
            period: self.period.trim().to_string(),
            impactos_periodo_personas: at
                .integer("impactos_periodo_personas", &self.impactos_periodo_personas)?,
            impactos_periodo_vehiculos: at
                .cleaned_integer(VEHICLE_COLUMN, &self.impactos_periodo_vehiculos)?,
        })
    }
}

impl SiteCsvRow {
    pub fn into_site(self, at: RowLocation<'_>) -> Result<NewCampaignSite> {
        Ok(NewCampaignSite {
            campaign_name: self.name.trim().to_string(),
            codigo_del_sitio: self.codigo_del_sitio.trim().to_string(),
            tipo_de_mueble: optional_text(self.tipo_de_mueble),
            tipo_de_anuncio: optional_text(self.tipo_de_anuncio),
            estado: optional_text(self.estado),
            municipio: optional_text(self.municipio),
            zm: optional_text(self.zm),
            frecuencia_catorcenal: at
                .float("frecuencia_catorcenal", &self.frecuencia_catorcenal)?,
            frecuencia_mensual: at.float("frecuencia_mensual", &self.frecuencia_mensual)?,
            impactos_catorcenal: at.integer("impactos_catorcenal", &self.impactos_catorcenal)?,
            impactos_mensuales: at.integer("impactos_mensuales", &self.impactos_mensuales)?,
            alcance_mensual: at.float("alcance_mensual", &self.alcance_mensual)?,
        })
    }
}

/// 统一车辆列表头：带重音的列改名为无重音；两者同时存在时无重音的列被忽略
pub fn unify_vehicle_header(headers: &StringRecord) -> StringRecord {
    let has_accented = headers.iter().any(|h| h == VEHICLE_COLUMN_ACCENTED);
    headers
        .iter()
        .map(|h| {
            if h == VEHICLE_COLUMN_ACCENTED {
                VEHICLE_COLUMN
            } else if has_accented && h == VEHICLE_COLUMN {
                VEHICLE_COLUMN_SHADOWED
            } else {
                h
            }
        })
        .collect()
}

/// 读取 CSV 文件的所有行，返回 (CSV 行号, 行)
///
/// 行号从 2 开始（第 1 行是表头）。
fn read_rows<T, H>(path: &Path, rewrite_headers: H) -> Result<Vec<(usize, T)>>
where
    T: DeserializeOwned,
    H: FnOnce(&StringRecord) -> StringRecord,
{
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path).map_err(|e| {
        AnalyticsError::file_operation(format!("无法打开 {}: {}", path.display(), e))
    })?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = csv_reader
        .headers()
        .map_err(|e| AnalyticsError::csv_parse(format!("{} 表头读取失败: {}", file_name, e)))?
        .clone();
    csv_reader.set_headers(rewrite_headers(&headers));

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<T>().enumerate() {
        let row_num = row_idx + 2;
        let row = result.map_err(|e| {
            AnalyticsError::csv_parse(format!("{} 第 {} 行: {}", file_name, row_num, e))
        })?;
        rows.push((row_num, row));
    }

    Ok(rows)
}

pub fn read_campaign_rows(path: &Path) -> Result<Vec<(usize, CampaignCsvRow)>> {
    read_rows(path, StringRecord::clone)
}

pub fn read_period_rows(path: &Path) -> Result<Vec<(usize, PeriodCsvRow)>> {
    read_rows(path, unify_vehicle_header)
}

pub fn read_site_rows(path: &Path) -> Result<Vec<(usize, SiteCsvRow)>> {
    read_rows(path, StringRecord::clone)
}
