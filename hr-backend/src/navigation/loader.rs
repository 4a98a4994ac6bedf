// src/navigation/loader.rs

use super::filter::{Action, GrantSet, PermissionCheck, ScreenGrant};
use crate::api::dto::common::ApiResponse;
use crate::config::PermissionFetchPolicy;
use crate::error::AppError;
use crate::service::permission_service::PermissionService;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

pub const PERMISSIONS_ME_PATH: &str = "/api/permissions/me";

#[derive(Error, Debug)]
pub enum PermissionLoadError {
    #[error("Permission request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Permission endpoint returned status {0}")]
    Status(u16),

    #[error("Permission response had no data")]
    EmptyPayload,

    #[error("Permission lookup failed: {0}")]
    Lookup(String),
}

impl From<AppError> for PermissionLoadError {
    fn from(err: AppError) -> Self {
        PermissionLoadError::Lookup(err.to_string())
    }
}

/// 呼び出し元の画面権限を取得する
#[async_trait]
pub trait GrantSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ScreenGrant>, PermissionLoadError>;
}

/// `GET /api/permissions/me` をベアラートークン付きで呼ぶ
pub struct HttpGrantSource {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpGrantSource {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, access_token)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl GrantSource for HttpGrantSource {
    async fn fetch(&self) -> Result<Vec<ScreenGrant>, PermissionLoadError> {
        let url = format!("{}{}", self.base_url, PERMISSIONS_ME_PATH);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PermissionLoadError::Status(status.as_u16()));
        }

        let body: ApiResponse<Vec<ScreenGrant>> = response.json().await?;
        body.data.ok_or(PermissionLoadError::EmptyPayload)
    }
}

/// サーバー側: 社員 → ポジション → 職位 → 付与 を DB から解決する
pub struct RepositoryGrantSource {
    permission_service: Arc<PermissionService>,
    employee_id: i32,
}

impl RepositoryGrantSource {
    pub fn new(permission_service: Arc<PermissionService>, employee_id: i32) -> Self {
        Self {
            permission_service,
            employee_id,
        }
    }
}

#[async_trait]
impl GrantSource for RepositoryGrantSource {
    async fn fetch(&self) -> Result<Vec<ScreenGrant>, PermissionLoadError> {
        Ok(self
            .permission_service
            .grants_for_employee(self.employee_id)
            .await?)
    }
}

/// セッション単位の権限キャッシュ
///
/// 初回の `load` だけが取得を行い、同時呼び出しは同じ取得を待つ。
pub struct PermissionLoader {
    source: Arc<dyn GrantSource>,
    policy: PermissionFetchPolicy,
    grants: OnceCell<GrantSet>,
}

impl PermissionLoader {
    pub fn new(source: Arc<dyn GrantSource>, policy: PermissionFetchPolicy) -> Self {
        Self {
            source,
            policy,
            grants: OnceCell::new(),
        }
    }

    /// 権限を取得してキャッシュする
    ///
    /// 失敗時は `Allow` なら全許可をキャッシュ、`Deny` ならエラーを返し未ロードのまま。
    pub async fn load(&self) -> Result<&GrantSet, PermissionLoadError> {
        self.grants
            .get_or_try_init(|| async {
                match self.source.fetch().await {
                    Ok(grants) => {
                        debug!(count = grants.len(), "Screen permissions loaded");
                        Ok(GrantSet::from_grants(grants))
                    }
                    Err(e) => match self.policy {
                        PermissionFetchPolicy::Allow => {
                            warn!(error = %e, "Permission fetch failed, allowing all screens");
                            Ok(GrantSet::AllowAll)
                        }
                        PermissionFetchPolicy::Deny => {
                            warn!(error = %e, "Permission fetch failed");
                            Err(e)
                        }
                    },
                }
            })
            .await
    }

    pub fn is_loaded(&self) -> bool {
        self.grants.initialized()
    }

    pub fn grants(&self) -> Option<&GrantSet> {
        self.grants.get()
    }
}

impl PermissionCheck for PermissionLoader {
    /// 未ロードなら常に false
    fn has_permission(&self, screen_code: &str, action: Action) -> bool {
        self.grants
            .get()
            .is_some_and(|grants| grants.has_permission(screen_code, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::filter::ActionSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl GrantSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<ScreenGrant>, PermissionLoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail {
                return Err(PermissionLoadError::Status(503));
            }
            Ok(vec![ScreenGrant {
                screen_code: "personeller".to_string(),
                actions: ActionSet {
                    can_read: true,
                    ..Default::default()
                },
            }])
        }
    }

    #[tokio::test]
    async fn test_concurrent_loads_fetch_once() {
        let source = CountingSource::new(false);
        let loader = PermissionLoader::new(source.clone(), PermissionFetchPolicy::Deny);

        let (a, b, c) = tokio::join!(loader.load(), loader.load(), loader.load());
        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        loader.load().await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(loader.has_permission("personeller", Action::Read));
        assert!(!loader.has_permission("personeller", Action::Delete));
    }

    #[tokio::test]
    async fn test_not_loaded_denies_everything() {
        let loader = PermissionLoader::new(CountingSource::new(false), PermissionFetchPolicy::Allow);
        assert!(!loader.is_loaded());
        assert!(!loader.has_permission("personeller", Action::Read));
    }

    #[tokio::test]
    async fn test_allow_policy_caches_allow_all() {
        let source = CountingSource::new(true);
        let loader = PermissionLoader::new(source.clone(), PermissionFetchPolicy::Allow);

        let grants = loader.load().await.unwrap();
        assert!(grants.is_allow_all());
        assert!(loader.has_permission("ekran-yetkileri", Action::Delete));

        loader.load().await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deny_policy_leaves_cache_empty() {
        let source = CountingSource::new(true);
        let loader = PermissionLoader::new(source.clone(), PermissionFetchPolicy::Deny);

        assert!(matches!(
            loader.load().await,
            Err(PermissionLoadError::Status(503))
        ));
        assert!(!loader.is_loaded());
        assert!(!loader.has_permission("personeller", Action::Read));

        // 失敗は記憶しないので次回は再取得する
        assert!(loader.load().await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
