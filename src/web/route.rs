//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、认证要求以及导航守卫的判定规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（唯一不需要认证的页面）
    #[default]
    Login,
    /// 首页
    Home,
    /// 个人档案
    Profile,
    /// 排名仪表盘
    Dashboard,
    /// 趋势分析
    Trends,
    /// Genius 分层分析
    Genius,
    /// 公告与反馈
    Notice,
    /// Value factor 分析
    ValueFactor,
    /// Combined 指标分析
    Combined,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/" => Self::Home,
            "/profile" => Self::Profile,
            "/dashboard" => Self::Dashboard,
            "/trends" => Self::Trends,
            "/genius" => Self::Genius,
            "/notice" => Self::Notice,
            "/value-factor" => Self::ValueFactor,
            "/combined" => Self::Combined,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Dashboard => "/dashboard",
            Self::Trends => "/trends",
            Self::Genius => "/genius",
            Self::Notice => "/notice",
            Self::ValueFactor => "/value-factor",
            Self::Combined => "/combined",
            Self::NotFound => "/404",
        }
    }

    /// 路由显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Dashboard => "Dashboard",
            Self::Trends => "Trends",
            Self::Genius => "Genius",
            Self::Notice => "Notice",
            Self::ValueFactor => "ValueFactor",
            Self::Combined => "Combined",
            Self::NotFound => "NotFound",
        }
    }

    /// **核心守卫逻辑：该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 导航守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 放行
    Allow,
    /// 重定向到指定路由
    Redirect(AppRoute),
}

/// 导航守卫判定
///
/// 每次导航前执行，只读取本地认证标记，不访问后端：
/// 1. 目标需要认证但未认证 -> 重定向登录页
/// 2. 已认证访问登录页 -> 重定向首页
/// 3. 其余放行
///
/// 标记可能相对真实凭据过期，直到下一次 API 调用触发 401 处理为止。
pub fn resolve(target: AppRoute, is_authenticated: bool) -> Resolution {
    if target.requires_auth() && !is_authenticated {
        return Resolution::Redirect(AppRoute::Login);
    }
    if target == AppRoute::Login && is_authenticated {
        return Resolution::Redirect(AppRoute::Home);
    }
    Resolution::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_roundtrip() {
        for route in [
            AppRoute::Login,
            AppRoute::Home,
            AppRoute::Profile,
            AppRoute::Dashboard,
            AppRoute::Trends,
            AppRoute::Genius,
            AppRoute::Notice,
            AppRoute::ValueFactor,
            AppRoute::Combined,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nonexistent"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn only_login_and_not_found_skip_auth() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        for route in [
            AppRoute::Home,
            AppRoute::Profile,
            AppRoute::Dashboard,
            AppRoute::Trends,
            AppRoute::Genius,
            AppRoute::Notice,
            AppRoute::ValueFactor,
            AppRoute::Combined,
        ] {
            assert!(route.requires_auth(), "{} should require auth", route);
        }
    }

    #[test]
    fn unauthenticated_protected_navigation_redirects_to_login() {
        assert_eq!(
            resolve(AppRoute::Dashboard, false),
            Resolution::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn authenticated_login_navigation_redirects_home() {
        assert_eq!(
            resolve(AppRoute::Login, true),
            Resolution::Redirect(AppRoute::Home)
        );
    }

    #[test]
    fn authenticated_protected_navigation_is_allowed() {
        assert_eq!(resolve(AppRoute::Profile, true), Resolution::Allow);
    }

    #[test]
    fn unauthenticated_login_navigation_is_allowed() {
        assert_eq!(resolve(AppRoute::Login, false), Resolution::Allow);
    }
}
