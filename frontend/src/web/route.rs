//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由，以及基于会话状态的守卫规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 求职记录面板 (需要认证)
    Dashboard,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 直接渲染目标路由
    Render(AppRoute),
    /// 改为渲染并跳转到另一个路由
    Redirect(AppRoute),
}

impl GuardDecision {
    /// 最终应当显示的路由
    pub fn route(&self) -> AppRoute {
        match *self {
            GuardDecision::Render(route) | GuardDecision::Redirect(route) => route,
        }
    }
}

/// 路由守卫：纯函数，无副作用
///
/// - 未认证访问受保护路由 -> 重定向到登录页，受保护页面不会被渲染
/// - 已认证访问登录页 -> 重定向到面板
pub fn guard(target: AppRoute, is_authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        GuardDecision::Redirect(AppRoute::Login)
    } else if target.should_redirect_when_authenticated() && is_authenticated {
        GuardDecision::Redirect(AppRoute::Dashboard)
    } else {
        GuardDecision::Render(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
    }

    #[test]
    fn unauthenticated_visitor_is_sent_to_login() {
        let decision = guard(AppRoute::Dashboard, false);
        assert_eq!(decision, GuardDecision::Redirect(AppRoute::Login));
        assert_eq!(decision.route().to_path(), "/");
    }

    #[test]
    fn authenticated_user_sees_dashboard() {
        assert_eq!(
            guard(AppRoute::Dashboard, true),
            GuardDecision::Render(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(AppRoute::Login, true),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn public_routes_render_regardless() {
        assert_eq!(
            guard(AppRoute::Login, false),
            GuardDecision::Render(AppRoute::Login)
        );
        assert_eq!(
            guard(AppRoute::NotFound, false),
            GuardDecision::Render(AppRoute::NotFound)
        );
        assert_eq!(
            guard(AppRoute::NotFound, true),
            GuardDecision::Render(AppRoute::NotFound)
        );
    }
}
