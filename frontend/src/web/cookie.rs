//! Cookie 访问模块
//!
//! 会话 Cookie 只用来判断"是否存在"，从不解码。

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Cookie 存取抽象，便于在测试中替换
pub trait CookieJar {
    /// `document.cookie` 原始字符串
    fn raw(&self) -> String;
    /// 让指定 Cookie 立即过期
    fn expire(&self, name: &str);
}

/// 浏览器 `document.cookie`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieJar for DocumentCookies {
    fn raw(&self) -> String {
        Self::document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn expire(&self, name: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&format!("{}=; path=/; max-age=0;", name));
        }
    }
}

/// 判断 Cookie 字符串中是否存在指定名称
///
/// 形如 `a=1; jwt=xyz; b=2`，名称需完全匹配（`jwt_old` 不算 `jwt`）。
pub fn has_cookie(raw: &str, name: &str) -> bool {
    raw.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .any(|pair| match pair.split_once('=') {
            Some((key, _)) => key.trim() == name,
            None => pair == name,
        })
}
