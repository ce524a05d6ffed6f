//! 会话凭据存储模块
//!
//! 三个存储键（token、认证标记、用户信息）由本模块统一持有：
//! `set` / `clear` 一次性写入/清除全部键，避免读到互相矛盾的中间状态。
//! 路由守卫与 HTTP 层都只通过 `SessionStore` 访问会话状态。

use std::sync::Arc;

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::use_context;
use serde::{Deserialize, Serialize};

/// 会话存储键：bearer token
pub const KEY_ACCESS_TOKEN: &str = "access_token";
/// 会话存储键：认证标记（`"true"` / 不存在）
pub const KEY_AUTH_FLAG: &str = "isAuthenticated";
/// 会话存储键：用户信息 JSON
pub const KEY_USER: &str = "user";

/// 登录成功后获得的会话凭据
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCredential {
    pub token: String,
    pub token_type: Option<String>,
    pub wq_id: String,
    pub username: Option<String>,
}

/// 持久化的用户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub wq_id: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// 底层键值存储抽象
///
/// 生产实现基于浏览器 LocalStorage；测试使用内存实现。
/// `Send + Sync` 约束来自 Leptos Context 对共享值的要求。
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// 浏览器 LocalStorage 后端
///
/// 直接读写原始字符串，保持与后端约定的键值格式
/// （`isAuthenticated` 存储字面量 `"true"`，不带 JSON 引号）。
struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// 会话凭据存储
///
/// 三个键的唯一持有者。认证状态只有在标记与 token 同时存在时才成立，
/// 两者不可能通过本类型被观察到不一致。
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
}

impl SessionStore {
    /// 创建基于浏览器 LocalStorage 的存储
    pub fn browser() -> Self {
        Self {
            backend: Box::new(BrowserStorage),
        }
    }

    /// 使用自定义后端创建存储
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// 写入会话凭据（一次性写入全部键）
    pub fn set(&self, credential: &SessionCredential) {
        self.backend.set(KEY_ACCESS_TOKEN, &credential.token);
        self.backend.set(KEY_AUTH_FLAG, "true");

        let user = StoredUser {
            wq_id: credential.wq_id.clone(),
            username: credential.username.clone(),
        };
        if let Ok(blob) = serde_json::to_string(&user) {
            self.backend.set(KEY_USER, &blob);
        }
    }

    /// 清除会话凭据（一次性清除全部键）
    pub fn clear(&self) {
        self.backend.remove(KEY_ACCESS_TOKEN);
        self.backend.remove(KEY_AUTH_FLAG);
        self.backend.remove(KEY_USER);
    }

    /// 当前是否已认证
    ///
    /// 标记与 token 必须同时存在；只有标记没有 token 视为未认证。
    pub fn is_authenticated(&self) -> bool {
        self.backend.get(KEY_AUTH_FLAG).as_deref() == Some("true") && self.token().is_some()
    }

    /// 读取 bearer token
    pub fn token(&self) -> Option<String> {
        self.backend.get(KEY_ACCESS_TOKEN).filter(|t| !t.is_empty())
    }

    /// 读取持久化的用户信息
    pub fn user(&self) -> Option<StoredUser> {
        let blob = self.backend.get(KEY_USER)?;
        serde_json::from_str(&blob).ok()
    }
}

/// 从 Context 获取会话存储
pub fn use_session() -> Arc<SessionStore> {
    use_context::<Arc<SessionStore>>().expect("SessionStore should be provided")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory backend shared between this module's tests and the API
    /// layer tests.
    pub(crate) struct MemoryStorage {
        data: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub(crate) fn new() -> (Self, Arc<Mutex<HashMap<String, String>>>) {
            let data = Arc::new(Mutex::new(HashMap::new()));
            (Self { data: data.clone() }, data)
        }
    }

    impl StorageBackend for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.data.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.data
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.data.lock().unwrap().remove(key);
        }
    }

    fn make_store() -> (SessionStore, Arc<Mutex<HashMap<String, String>>>) {
        let (backend, data) = MemoryStorage::new();
        (SessionStore::with_backend(Box::new(backend)), data)
    }

    fn make_credential() -> SessionCredential {
        SessionCredential {
            token: "tok-123".into(),
            token_type: Some("bearer".into()),
            wq_id: "WQ001".into(),
            username: Some("alice".into()),
        }
    }

    #[test]
    fn set_writes_all_three_keys() {
        let (store, data) = make_store();
        store.set(&make_credential());

        let data = data.lock().unwrap();
        assert_eq!(data.get(KEY_ACCESS_TOKEN).map(String::as_str), Some("tok-123"));
        assert_eq!(data.get(KEY_AUTH_FLAG).map(String::as_str), Some("true"));
        assert!(data.contains_key(KEY_USER));
    }

    #[test]
    fn clear_removes_all_three_keys() {
        let (store, data) = make_store();
        store.set(&make_credential());
        store.clear();

        assert!(data.lock().unwrap().is_empty());
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn authenticated_after_set() {
        let (store, _) = make_store();
        store.set(&make_credential());

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn flag_without_token_reads_as_unauthenticated() {
        let (store, data) = make_store();
        // Simulate a desynchronized legacy state: flag present, token missing
        data.lock()
            .unwrap()
            .insert(KEY_AUTH_FLAG.to_string(), "true".to_string());

        assert!(!store.is_authenticated());
    }

    #[test]
    fn user_blob_roundtrips() {
        let (store, _) = make_store();
        store.set(&make_credential());

        let user = store.user().expect("user blob should be present");
        assert_eq!(user.wq_id, "WQ001");
        assert_eq!(user.username.as_deref(), Some("alice"));
    }

    #[test]
    fn corrupt_user_blob_reads_as_none() {
        let (store, data) = make_store();
        store.set(&make_credential());
        data.lock()
            .unwrap()
            .insert(KEY_USER.to_string(), "not-json".to_string());

        assert_eq!(store.user(), None);
    }
}
