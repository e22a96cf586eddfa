use async_trait::async_trait;
use nursebot_core::{Session, SessionStorage};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// Process-lifetime session map. Nothing is written to disk and nothing
/// expires; sessions go away only through [`SessionStorage::delete`].
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        info!("SessionManager initialized");
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop every session.
    pub async fn clear(&self) {
        let mut sessions = self.sessions.write().await;
        let count = sessions.len();
        sessions.clear();
        info!("Cleared {count} sessions");
    }
}

#[async_trait]
impl SessionStorage for SessionManager {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Session>> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn get_or_create(&self, id: &str) -> anyhow::Result<Session> {
        if let Some(session) = self.sessions.read().await.get(id) {
            return Ok(session.clone());
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            info!("Created session: {id}");
            Session::new(id)
        });
        Ok(session.clone())
    }

    async fn save(&self, session: Session) -> anyhow::Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!("Deleted session: {id}");
        }
        Ok(removed)
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut ids: Vec<String> = self.sessions.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursebot_core::Stage;

    #[tokio::test]
    async fn test_get_or_create_is_lazy_and_stable() {
        let store = SessionManager::new();
        assert!(store.get("a").await.unwrap().is_none());

        let first = store.get_or_create("a").await.unwrap();
        assert_eq!(first.stage, Stage::Initial);
        assert_eq!(store.len().await, 1);

        let second = store.get_or_create("a").await.unwrap();
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = SessionManager::new();
        let mut session = store.get_or_create("a").await.unwrap();
        session.stage = Stage::FeeStructure;
        store.save(session).await.unwrap();

        let loaded = store.get("a").await.unwrap().unwrap();
        assert_eq!(loaded.stage, Stage::FeeStructure);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SessionManager::new();
        store.get_or_create("a").await.unwrap();

        assert!(store.delete("a").await.unwrap());
        assert!(!store.delete("a").await.unwrap());
        assert!(store.is_empty().await);

        // Recreated from scratch after a delete.
        let fresh = store.get_or_create("a").await.unwrap();
        assert_eq!(fresh.stage, Stage::Initial);
    }

    #[tokio::test]
    async fn test_list_and_clear() {
        let store = SessionManager::new();
        for id in ["b", "a", "c"] {
            store.get_or_create(id).await.unwrap();
        }
        assert_eq!(store.list().await.unwrap(), vec!["a", "b", "c"]);

        store.clear().await;
        assert!(store.list().await.unwrap().is_empty());
    }
}
