use crate::{JOB_APPLICATIONS_PATH, JobApplication, JobApplicationFields, JobId};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Endpoints whose response body is ignored use `()` as `Response`.
pub trait ApiRequest {
    /// JSON body type; `()` for endpoints without a body.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Auth
// =========================================================

/// Validate the ambient session cookie
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthCheckRequest;

impl ApiRequest for AuthCheckRequest {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/v1/auth-check".to_string()
    }
}

/// Exchange credentials for a session cookie
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/v1/login".to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/// Invalidate the server-side session
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/logout".to_string()
    }
}

// =========================================================
// Job applications
// =========================================================

/// List all job applications
#[derive(Debug, Clone, Copy, Default)]
pub struct ListJobApplicationsRequest;

impl ApiRequest for ListJobApplicationsRequest {
    type Body = ();
    type Response = Vec<JobApplication>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        JOB_APPLICATIONS_PATH.to_string()
    }
}

/// Create a job application; the server assigns the id
#[derive(Debug, Clone)]
pub struct CreateJobApplicationRequest {
    pub fields: JobApplicationFields,
}

impl ApiRequest for CreateJobApplicationRequest {
    type Body = JobApplicationFields;
    type Response = JobApplication;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        JOB_APPLICATIONS_PATH.to_string()
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.fields)
    }
}

/// Replace the writable fields of an existing job application
#[derive(Debug, Clone)]
pub struct UpdateJobApplicationRequest {
    pub id: JobId,
    pub fields: JobApplicationFields,
}

impl ApiRequest for UpdateJobApplicationRequest {
    type Body = JobApplicationFields;
    type Response = JobApplication;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{}/{}", JOB_APPLICATIONS_PATH, self.id)
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(&self.fields)
    }
}

/// Delete a job application by id
#[derive(Debug, Clone, Copy)]
pub struct DeleteJobApplicationRequest {
    pub id: JobId,
}

impl ApiRequest for DeleteJobApplicationRequest {
    type Body = ();
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{}/{}", JOB_APPLICATIONS_PATH, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_paths_embed_id() {
        let req = DeleteJobApplicationRequest { id: JobId::new(42) };
        assert_eq!(req.path(), "/job-applications/42");
        assert_eq!(DeleteJobApplicationRequest::METHOD, HttpMethod::Delete);
        assert!(req.body().is_none());
    }

    #[test]
    fn login_debug_hides_password() {
        let req = LoginRequest {
            email: "me@example.com".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", req);
        assert!(printed.contains("me@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
