//! 路由服务模块 - 核心引擎
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 写入 History -> 更新路由信号"。
//! 认证状态以信号形式注入，路由服务不感知会话的具体实现。

use leptos::prelude::*;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, guard};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History：`push` 为 true 时 pushState，否则 replaceState（用于重定向）
fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；`is_authenticated` 由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let decision = guard(requested, is_authenticated.get_untracked());
        if let GuardDecision::Redirect(target) = decision {
            write_history(target.to_path(), false);
        }
        let (current_route, set_route) = signal(decision.route());

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        self.is_authenticated
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, push: bool) {
        let decision = guard(target, self.is_authenticated.get_untracked());
        if let GuardDecision::Redirect(redirect) = decision {
            info!(from = %target, to = %redirect, "[Router] guard redirect");
        }
        let route = decision.route();
        write_history(route.to_path(), push);
        self.set_route.set(route);
    }

    /// 浏览器后退/前进时同样执行守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());
            let decision = guard(requested, is_authenticated.get_untracked());
            if let GuardDecision::Redirect(target) = decision {
                debug!(from = %requested, to = %target, "[Router] popstate redirect");
                write_history(target.to_path(), false);
            }
            set_route.set(decision.route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与应用同生命周期
        closure.forget();
    }

    /// 认证状态变化时自动跳转（登录后进面板，登出后回登录页）
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if let GuardDecision::Redirect(target) = guard(route, is_auth) {
                info!(
                    authenticated = is_auth,
                    to = %target,
                    "[Router] auth state changed, redirecting"
                );
                write_history(target.to_path(), true);
                set_route.set(target);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 每次渲染都重新执行守卫：未认证时受保护页面的视图永远不会被构造。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    // Memo 去重：守卫结果不变时不重建页面
    let shown = Memo::new(move |_| {
        let current = router.current_route().get();
        guard(current, router.is_authenticated().get()).route()
    });

    move || matcher(shown.get())
}

/// 站内链接：拦截点击，走路由服务导航
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();

    view! {
        <a
            href=to
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
