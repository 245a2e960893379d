//! 求职记录面板的状态机
//!
//! `JobBoard` 是普通结构体，只能通过方法修改，组件层把它放进一个
//! `RwSignal` 中。每个网络操作都拆成 `begin_*`（同步，决定是否发请求）
//! 和 `finish_*`（同步，按服务端响应修补本地列表）两步，
//! 中间的异步请求由调用方负责，因此整个流程可以脱离浏览器测试。
//!
//! 约束：
//! - 本地列表保持服务端返回顺序，新建记录追加到末尾
//! - 任意时刻最多一个编辑目标；没有目标时提交即创建，有目标时提交即更新该 id
//! - 每个表单同时最多一个在途写请求、一个在途删除请求
//! - 请求失败时本地列表不变，只记录日志并给出提示

mod draft;

pub use draft::{DraftField, JobDraft};

use crate::api::{ApiError, JobTrackApi};
use crate::request::HttpClient;
use jobtrack_shared::{ApplicationStatus, JobApplication, JobApplicationFields, JobId};
use tracing::{debug, error, info, warn};

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 操作完成后的短暂提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// 待发送的写请求
#[derive(Debug, Clone, PartialEq)]
pub enum PendingWrite {
    Create(JobApplicationFields),
    Update(JobId, JobApplicationFields),
}

impl PendingWrite {
    /// 发送请求，返回服务端确认后的记录
    pub async fn send<C: HttpClient>(
        self,
        api: &JobTrackApi<C>,
    ) -> Result<JobApplication, ApiError> {
        match self {
            PendingWrite::Create(fields) => api.create_application(fields).await,
            PendingWrite::Update(id, fields) => api.update_application(id, fields).await,
        }
    }
}

/// 在途写请求的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteTarget {
    Create,
    Update(JobId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobBoard {
    records: Vec<JobApplication>,
    loading: bool,
    draft: JobDraft,
    editing: Option<JobId>,
    confirm_before_delete: bool,
    awaiting_confirmation: Option<JobId>,
    write_in_flight: Option<WriteTarget>,
    delete_in_flight: Option<JobId>,
    notice: Option<Notice>,
    /// 每条新提示递增，用于识别定时关闭的是哪一条
    notice_seq: u64,
}

impl JobBoard {
    pub fn new(confirm_before_delete: bool) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            draft: JobDraft::default(),
            editing: None,
            confirm_before_delete,
            awaiting_confirmation: None,
            write_in_flight: None,
            delete_in_flight: None,
            notice: None,
            notice_seq: 0,
        }
    }

    // --- 只读访问 ---

    pub fn records(&self) -> &[JobApplication] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<JobId> {
        self.editing
    }

    pub fn awaiting_confirmation(&self) -> Option<JobId> {
        self.awaiting_confirmation
    }

    pub fn is_submitting(&self) -> bool {
        self.write_in_flight.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.delete_in_flight.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn find(&self, id: JobId) -> Option<&JobApplication> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 各状态的记录数（按下拉框顺序）
    pub fn status_counts(&self) -> Vec<(ApplicationStatus, usize)> {
        ApplicationStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self.records.iter().filter(|r| r.status == status).count();
                (status, count)
            })
            .collect()
    }

    /// 当前提示的序号
    pub fn notice_seq(&self) -> u64 {
        self.notice_seq
    }

    /// 关闭序号为 `seq` 的提示；此后已有更新的提示时不做处理
    pub fn dismiss_notice(&mut self, seq: u64) -> bool {
        if seq != self.notice_seq || self.notice.is_none() {
            return false;
        }
        self.notice = None;
        true
    }

    fn notify(&mut self, notice: Notice) {
        self.notice_seq += 1;
        self.notice = Some(notice);
    }

    // --- 列表 ---

    /// 开始加载列表；已有加载在途时返回 false
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<JobApplication>, ApiError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                debug!(count = records.len(), "job applications loaded");
                self.records = records;
            }
            Err(e) => {
                error!(error = %e, "failed to fetch job applications");
                self.notify(Notice::error("Could not load job applications."));
            }
        }
    }

    // --- 表单 ---

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// 进入编辑模式并回填草稿；写请求在途或记录不存在时返回 false
    pub fn start_edit(&mut self, id: JobId) -> bool {
        if self.write_in_flight.is_some() {
            return false;
        }
        let Some(record) = self.find(id) else {
            warn!(%id, "cannot edit unknown job application");
            return false;
        };
        self.draft = JobDraft::from_record(record);
        self.editing = Some(id);
        true
    }

    /// 退出编辑模式并丢弃草稿
    pub fn cancel_edit(&mut self) {
        if self.write_in_flight.is_some() {
            return;
        }
        self.editing = None;
        self.draft = JobDraft::default();
    }

    /// 提交表单
    ///
    /// 返回需要发送的请求；已有写请求在途或校验失败时返回 `None`
    /// （校验失败会设置错误提示，草稿保持不变）。
    pub fn begin_submit(&mut self) -> Option<PendingWrite> {
        if self.write_in_flight.is_some() {
            debug!("submit ignored, a write is already in flight");
            return None;
        }

        let fields = match self.draft.to_fields() {
            Ok(fields) => fields,
            Err(e) => {
                self.notify(Notice::error(capitalize(&e.to_string())));
                return None;
            }
        };

        let (target, write) = match self.editing {
            Some(id) => (WriteTarget::Update(id), PendingWrite::Update(id, fields)),
            None => (WriteTarget::Create, PendingWrite::Create(fields)),
        };
        self.write_in_flight = Some(target);
        Some(write)
    }

    pub fn finish_submit(&mut self, result: Result<JobApplication, ApiError>) {
        let Some(target) = self.write_in_flight.take() else {
            warn!("write completed with nothing in flight");
            return;
        };

        match (target, result) {
            (WriteTarget::Create, Ok(record)) => {
                info!(id = %record.id, "job application created");
                self.records.push(record);
                self.draft = JobDraft::default();
                self.notify(Notice::success("Job application added."));
            }
            (WriteTarget::Update(id), Ok(record)) => {
                match self.records.iter_mut().find(|r| r.id == id) {
                    Some(slot) => *slot = record,
                    None => warn!(%id, "updated job application is no longer listed"),
                }
                info!(%id, "job application updated");
                self.editing = None;
                self.draft = JobDraft::default();
                self.notify(Notice::success("Job application updated."));
            }
            (WriteTarget::Create, Err(e)) => {
                error!(error = %e, "failed to submit job application");
                self.notify(Notice::error("Could not add job application."));
            }
            (WriteTarget::Update(id), Err(e)) => {
                error!(%id, error = %e, "failed to update job application");
                self.notify(Notice::error("Could not update job application."));
            }
        }
    }

    // --- 删除 ---

    /// 请求删除
    ///
    /// 需要确认时只记录待确认的 id 并返回 `None`；
    /// 否则直接返回需要删除的 id。
    pub fn request_delete(&mut self, id: JobId) -> Option<JobId> {
        if self.confirm_before_delete {
            if self.delete_in_flight.is_none() {
                self.awaiting_confirmation = Some(id);
            }
            return None;
        }
        self.begin_delete(id)
    }

    /// 用户确认删除
    pub fn confirm_delete(&mut self) -> Option<JobId> {
        let id = self.awaiting_confirmation.take()?;
        self.begin_delete(id)
    }

    pub fn cancel_delete(&mut self) {
        self.awaiting_confirmation = None;
    }

    fn begin_delete(&mut self, id: JobId) -> Option<JobId> {
        if self.delete_in_flight.is_some() {
            debug!(%id, "delete ignored, another delete is in flight");
            return None;
        }
        self.delete_in_flight = Some(id);
        Some(id)
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) {
        let Some(id) = self.delete_in_flight.take() else {
            warn!("delete completed with nothing in flight");
            return;
        };

        match result {
            Ok(()) => {
                info!(%id, "job application deleted");
                self.records.retain(|r| r.id != id);
                // 正在编辑的记录已被删除
                if self.editing == Some(id) && self.write_in_flight.is_none() {
                    self.editing = None;
                    self.draft = JobDraft::default();
                }
                self.notify(Notice::success("Job application deleted."));
            }
            Err(e) => {
                error!(%id, error = %e, "failed to delete job application");
                self.notify(Notice::error("Could not delete job application."));
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
