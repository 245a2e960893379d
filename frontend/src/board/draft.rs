//! 表单草稿
//!
//! 表单中的值全部以字符串保存，提交时才校验并转换为请求对象。

use jobtrack_shared::{AppliedDate, ApplicationStatus, DraftError, JobApplication, JobApplicationFields};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    CompanyName,
    Position,
    AppliedDate,
    Status,
    Notes,
}

impl DraftField {
    /// 用于错误提示的字段名
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::CompanyName => "Company name",
            DraftField::Position => "Position",
            DraftField::AppliedDate => "Applied date",
            DraftField::Status => "Status",
            DraftField::Notes => "Notes",
        }
    }
}

/// 一份未提交的表单草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub company_name: String,
    pub position: String,
    pub applied_date: String,
    pub status: String,
    pub notes: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            position: String::new(),
            applied_date: String::new(),
            status: ApplicationStatus::default().label().to_string(),
            notes: String::new(),
        }
    }
}

impl JobDraft {
    /// 用已有记录回填（进入编辑模式）
    pub fn from_record(record: &JobApplication) -> Self {
        Self {
            company_name: record.company_name.clone(),
            position: record.position.clone(),
            applied_date: record.applied_date.to_string(),
            status: record.status.label().to_string(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::CompanyName => &self.company_name,
            DraftField::Position => &self.position,
            DraftField::AppliedDate => &self.applied_date,
            DraftField::Status => &self.status,
            DraftField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::CompanyName => &mut self.company_name,
            DraftField::Position => &mut self.position,
            DraftField::AppliedDate => &mut self.applied_date,
            DraftField::Status => &mut self.status,
            DraftField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// 校验并转换为请求对象
    ///
    /// 公司、职位、日期为必填；备注总是发送，空字符串即清空。
    pub fn to_fields(&self) -> Result<JobApplicationFields, DraftError> {
        let company_name = required(&self.company_name, DraftField::CompanyName)?;
        let position = required(&self.position, DraftField::Position)?;
        let applied_date = required(&self.applied_date, DraftField::AppliedDate)?;

        Ok(JobApplicationFields {
            company_name,
            position,
            applied_date: AppliedDate::parse(&applied_date)?,
            status: self.status.parse()?,
            notes: Some(self.notes.trim().to_string()),
        })
    }
}

fn required(value: &str, field: DraftField) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field.label()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_shared::JobId;

    fn filled() -> JobDraft {
        JobDraft {
            company_name: " Acme ".into(),
            position: "Engineer".into(),
            applied_date: "2024-01-01".into(),
            status: "Interview Scheduled".into(),
            notes: "".into(),
        }
    }

    #[test]
    fn valid_draft_converts() {
        let fields = filled().to_fields().unwrap();
        assert_eq!(fields.company_name, "Acme");
        assert_eq!(fields.applied_date.to_string(), "2024-01-01");
        assert_eq!(fields.status, ApplicationStatus::InterviewScheduled);
        assert_eq!(fields.notes.as_deref(), Some(""));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut draft = filled();
        draft.set(DraftField::Position, "  ".into());
        assert_eq!(
            draft.to_fields(),
            Err(DraftError::MissingField("Position"))
        );

        draft.set(DraftField::CompanyName, String::new());
        assert_eq!(
            draft.to_fields(),
            Err(DraftError::MissingField("Company name"))
        );
    }

    #[test]
    fn bad_date_and_status_are_reported() {
        let mut draft = filled();
        draft.set(DraftField::AppliedDate, "yesterday".into());
        assert!(matches!(draft.to_fields(), Err(DraftError::InvalidDate(_))));

        let mut draft = filled();
        draft.set(DraftField::Status, "Ghosted".into());
        assert!(matches!(draft.to_fields(), Err(DraftError::InvalidStatus(_))));
    }

    #[test]
    fn from_record_prefills_every_field() {
        let record = JobApplication::new(JobId::new(9), filled().to_fields().unwrap());
        let draft = JobDraft::from_record(&record);
        assert_eq!(draft.get(DraftField::CompanyName), "Acme");
        assert_eq!(draft.get(DraftField::AppliedDate), "2024-01-01");
        assert_eq!(draft.get(DraftField::Status), "Interview Scheduled");
        assert_eq!(draft.get(DraftField::Notes), "");
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(JobDraft::default().status, "Pending");
    }
}
