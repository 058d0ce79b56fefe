use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum AnalyticsError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    MissingSourceFile(String),
    CsvParse(String),
    Validation(String),
    InvalidCampaignType(String),
    InvalidDateRange(String),
    InvalidPagination(String),
    NotFound(String),
    Serialization(String),
    DateParse(String),
}

impl AnalyticsError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::DatabaseConfig(_) => "E001",
            AnalyticsError::DatabaseConnection(_) => "E002",
            AnalyticsError::DatabaseOperation(_) => "E003",
            AnalyticsError::FileOperation(_) => "E004",
            AnalyticsError::MissingSourceFile(_) => "E005",
            AnalyticsError::CsvParse(_) => "E006",
            AnalyticsError::Validation(_) => "E007",
            AnalyticsError::NotFound(_) => "E008",
            AnalyticsError::Serialization(_) => "E009",
            AnalyticsError::DateParse(_) => "E010",
            AnalyticsError::InvalidCampaignType(_) => "E011",
            AnalyticsError::InvalidDateRange(_) => "E012",
            AnalyticsError::InvalidPagination(_) => "E013",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AnalyticsError::DatabaseConfig(_) => "Database Configuration Error",
            AnalyticsError::DatabaseConnection(_) => "Database Connection Error",
            AnalyticsError::DatabaseOperation(_) => "Database Operation Error",
            AnalyticsError::FileOperation(_) => "File Operation Error",
            AnalyticsError::MissingSourceFile(_) => "Missing Source File",
            AnalyticsError::CsvParse(_) => "CSV Parse Error",
            AnalyticsError::Validation(_) => "Validation Error",
            AnalyticsError::NotFound(_) => "Resource Not Found",
            AnalyticsError::Serialization(_) => "Serialization Error",
            AnalyticsError::DateParse(_) => "Date Parse Error",
            AnalyticsError::InvalidCampaignType(_) => "Invalid Campaign Type",
            AnalyticsError::InvalidDateRange(_) => "Invalid Date Range",
            AnalyticsError::InvalidPagination(_) => "Invalid Pagination",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AnalyticsError::DatabaseConfig(msg) => msg,
            AnalyticsError::DatabaseConnection(msg) => msg,
            AnalyticsError::DatabaseOperation(msg) => msg,
            AnalyticsError::FileOperation(msg) => msg,
            AnalyticsError::MissingSourceFile(msg) => msg,
            AnalyticsError::CsvParse(msg) => msg,
            AnalyticsError::Validation(msg) => msg,
            AnalyticsError::NotFound(msg) => msg,
            AnalyticsError::Serialization(msg) => msg,
            AnalyticsError::DateParse(msg) => msg,
            AnalyticsError::InvalidCampaignType(msg) => msg,
            AnalyticsError::InvalidDateRange(msg) => msg,
            AnalyticsError::InvalidPagination(msg) => msg,
        }
    }

    /// 映射到 HTTP 状态码
    ///
    /// 只有参数类错误与 NotFound 会把 message 暴露给调用方，
    /// 其余一律按 500 处理。
    pub fn http_status(&self) -> StatusCode {
        match self {
            AnalyticsError::Validation(_)
            | AnalyticsError::InvalidCampaignType(_)
            | AnalyticsError::InvalidDateRange(_)
            | AnalyticsError::InvalidPagination(_)
            | AnalyticsError::DateParse(_) => StatusCode::BAD_REQUEST,
            AnalyticsError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否属于调用方可见的错误（4xx）
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于 Server / 批处理模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AnalyticsError {}

// 便捷的构造函数
impl AnalyticsError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::FileOperation(msg.into())
    }

    pub fn missing_source_file<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::MissingSourceFile(msg.into())
    }

    pub fn csv_parse<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::CsvParse(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::Validation(msg.into())
    }

    pub fn invalid_campaign_type<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::InvalidCampaignType(msg.into())
    }

    pub fn invalid_date_range<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::InvalidDateRange(msg.into())
    }

    pub fn invalid_pagination<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::InvalidPagination(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        AnalyticsError::DateParse(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AnalyticsError {
    fn from(err: sea_orm::DbErr) -> Self {
        AnalyticsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        AnalyticsError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AnalyticsError {
    fn from(err: chrono::ParseError) -> Self {
        AnalyticsError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(err: csv::Error) -> Self {
        AnalyticsError::CsvParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
