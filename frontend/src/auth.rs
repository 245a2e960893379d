//! 认证模块
//!
//! 管理会话状态，与路由系统解耦：路由服务只通过注入的认证信号检查状态，
//! 登录/登出后的页面跳转由路由服务监听信号自动完成。
//!
//! 会话真正的有效性由服务端在每次请求时判断；客户端这里只有：
//! - 启动时根据会话 Cookie 是否存在得出初始状态
//! - 定期调用 auth-check 重新校验，过期则清除

use crate::api::{ApiError, JobTrackApi};
use crate::request::HttpClient;
use crate::web::{CookieJar, has_cookie};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;
use tracing::{debug, info, warn};

/// 上次成功登录的邮箱（仅用于自动填充，从不保存密码）
pub const LAST_EMAIL_KEY: &str = "jobtrack_last_email";

/// 会话状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// 是否已认证
    pub authenticated: bool,
    /// 是否有重新校验请求在途
    pub checking: bool,
}

impl SessionState {
    /// 根据会话 Cookie 是否存在得出初始状态（不解码、不校验过期）
    pub fn from_cookies(raw: &str, cookie_name: &str) -> Self {
        Self {
            authenticated: has_cookie(raw, cookie_name),
            checking: false,
        }
    }

    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// 开始一次重新校验；未认证或已有校验在途时返回 false
    pub fn begin_check(&mut self) -> bool {
        if !self.authenticated || self.checking {
            return false;
        }
        self.checking = true;
        true
    }

    /// 应用校验结果
    pub fn apply_check(&mut self, check: SessionCheck) {
        self.checking = false;
        match check {
            SessionCheck::Valid => self.authenticated = true,
            SessionCheck::Rejected => self.authenticated = false,
            // 网络或服务端故障无法说明会话失效，保持原状
            SessionCheck::Inconclusive => {}
        }
    }
}

/// 一次 auth-check 的结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Valid,
    Rejected,
    Inconclusive,
}

impl From<Result<(), ApiError>> for SessionCheck {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => SessionCheck::Valid,
            Err(e) if e.is_auth_failure() => SessionCheck::Rejected,
            Err(_) => SessionCheck::Inconclusive,
        }
    }
}

/// 登录失败时展示给用户的错误
///
/// 所有远端失败（网络、凭据错误、服务端错误）都合并为同一条提示。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both email and password.")]
    Incomplete,
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

// =========================================================
// 与 UI 无关的会话流程（可在测试中直接驱动）
// =========================================================

/// 用现有 Cookie 询问服务端会话是否有效
pub async fn check_session<C: HttpClient>(api: &JobTrackApi<C>) -> SessionCheck {
    let check = SessionCheck::from(api.auth_check().await);
    debug!(?check, "auth check finished");
    check
}

/// 提交登录表单
pub async fn submit_login<C: HttpClient>(
    api: &JobTrackApi<C>,
    email: &str,
    password: &str,
) -> Result<(), LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::Incomplete);
    }

    api.login(email, password).await.map_err(|e| {
        warn!(error = %e, "login failed");
        LoginError::InvalidCredentials
    })?;

    info!("login succeeded");
    Ok(())
}

/// 结束会话：通知服务端、清除本地 Cookie 标记
///
/// 无论注销请求是否成功都返回未认证状态（失败只记录日志）。
pub async fn end_session<C: HttpClient, J: CookieJar>(
    api: &JobTrackApi<C>,
    cookies: &J,
    cookie_name: &str,
) -> SessionState {
    if let Err(e) = api.logout().await {
        warn!(error = %e, "logout request failed, clearing local session anyway");
    }
    cookies.expire(cookie_name);
    SessionState::default()
}

// =========================================================
// 会话上下文 (Leptos Context)
// =========================================================

/// 会话上下文
///
/// 通过 Context 注入到需要的组件中，取代全局可变标志。
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// 从 Cookie 初始化
    pub fn from_cookies<J: CookieJar>(cookies: &J, cookie_name: &str) -> Self {
        let initial = SessionState::from_cookies(&cookies.raw(), cookie_name);
        info!(
            authenticated = initial.authenticated,
            cookie = cookie_name,
            "session initialised from cookie"
        );
        Self::new(initial)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get_untracked().authenticated
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().authenticated)
    }

    /// 标记为已认证；路由服务随之跳转到面板
    pub fn login(&self) {
        self.state.update(|s| s.mark_authenticated());
    }

    /// 注销（失败也照常清除本地状态）；路由服务随之跳转到登录页
    pub fn logout<C, J>(&self, api: JobTrackApi<C>, cookies: J, cookie_name: String)
    where
        C: HttpClient + 'static,
        J: CookieJar + 'static,
    {
        let state = self.state;
        spawn_local(async move {
            let cleared = end_session(&api, &cookies, &cookie_name).await;
            state.set(cleared);
            info!("logged out");
        });
    }

    /// 重新校验一次会话
    pub fn revalidate<C: HttpClient + 'static>(&self, api: JobTrackApi<C>) {
        let state = self.state;
        if !state.try_update(|s| s.begin_check()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let check = check_session(&api).await;
            if check == SessionCheck::Rejected {
                warn!("session expired on the server, signing out");
            }
            state.update(|s| s.apply_check(check));
        });
    }

    /// 按固定间隔重新校验；定时器与应用同生命周期
    pub fn start_revalidation<C>(&self, api: JobTrackApi<C>, every_secs: u32)
    where
        C: HttpClient + Clone + 'static,
    {
        if every_secs == 0 {
            info!("session revalidation disabled");
            return;
        }
        let ctx = *self;
        Interval::new(every_secs.saturating_mul(1000), move || {
            ctx.revalidate(api.clone())
        })
        .forget();
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
