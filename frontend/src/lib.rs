//! JobTrack 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `config`: 构建时配置
//! - `request` / `api`: HTTP 传输抽象与 REST 客户端
//! - `auth`: 会话状态管理
//! - `board`: 面板状态机（与 UI 无关，可单独测试）
//! - `web::route` / `web::router`: 路由定义与带守卫的路由服务
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod board;
pub mod config;
pub mod logging;
pub mod request;
mod components {
    mod confirm_dialog;
    pub mod dashboard;
    mod icons;
    mod job_form;
    mod job_table;
    pub mod login;
}

use crate::api::JobTrackApi;
use crate::auth::SessionContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::config::AppConfig;

use leptos::prelude::*;

/// 浏览器 API 的轻量封装
pub mod web {
    mod cookie;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use cookie::{CookieJar, DocumentCookies, has_cookie};
    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};
use web::{DocumentCookies, FetchClient};

/// 浏览器环境下使用的 API 客户端
pub type BrowserApi = JobTrackApi<FetchClient>;

/// 从 Context 获取 API 客户端
pub fn use_api() -> BrowserApi {
    use_context::<BrowserApi>().expect("BrowserApi should be provided")
}

/// 从 Context 获取应用配置
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig should be provided")
}

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl">"Page not found"</p>
                    <Link to="/" class="btn btn-primary">"Back to start"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与 API 客户端
    let config = AppConfig::load();
    let api = JobTrackApi::new(config.api_base_url.clone(), FetchClient);

    // 2. 会话上下文：由 Cookie 得出初始状态，之后定期重新校验
    let session = SessionContext::from_cookies(&DocumentCookies, &config.session_cookie);
    session.start_revalidation(api.clone(), config.session_recheck_secs);

    provide_context(config);
    provide_context(api);
    provide_context(session);

    // 3. 认证信号注入路由服务
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
