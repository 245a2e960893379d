use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod date;
pub mod protocol;

pub use date::AppliedDate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 服务端签发的会话 Cookie 名称（客户端只检查是否存在，不解码）
pub const DEFAULT_SESSION_COOKIE: &str = "jwt";
pub const JOB_APPLICATIONS_PATH: &str = "/job-applications";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 服务端分配的记录 ID，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 投递状态
///
/// 线上格式为可读字符串，例如 `"Interview Scheduled"`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// 下拉框的展示顺序
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| DraftError::InvalidStatus(s.to_string()))
    }
}

/// 记录中可写的部分（创建与更新请求的 body）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationFields {
    pub company_name: String,
    pub position: String,
    pub applied_date: AppliedDate,
    pub status: ApplicationStatus,
    /// 始终写入请求体：空字符串表示清空备注
    #[serde(default)]
    pub notes: Option<String>,
}

/// 一条投递记录，归属于外部 API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: JobId,
    pub company_name: String,
    pub position: String,
    pub applied_date: AppliedDate,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl JobApplication {
    pub fn new(id: JobId, fields: JobApplicationFields) -> Self {
        Self {
            id,
            company_name: fields.company_name,
            position: fields.position,
            applied_date: fields.applied_date,
            status: fields.status,
            notes: fields.notes,
        }
    }

    /// 拷贝出可写字段（用于编辑表单回填）
    pub fn fields(&self) -> JobApplicationFields {
        JobApplicationFields {
            company_name: self.company_name.clone(),
            position: self.position.clone(),
            applied_date: self.applied_date,
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

// =========================================================
// 错误类型
// =========================================================

/// 表单草稿校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("unknown status: {0:?}")]
    InvalidStatus(String),
}
