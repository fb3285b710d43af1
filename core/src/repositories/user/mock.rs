//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::repositories::RepositoryError;

use super::trait_::UserRepository;

/// Mock user repository keyed by login
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
        if user.login.is_empty() {
            return Err(RepositoryError::Validation("login must not be empty".to_string()));
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.login) || users.values().any(|u| u.id == user.id) {
            return Err(RepositoryError::Unique);
        }

        users.insert(user.login.clone(), user.clone());
        Ok(user)
    }

    async fn find_user_by_login(&self, login: &str) -> Result<User, RepositoryError> {
        let users = self.users.read().await;
        users.get(login).cloned().ok_or(RepositoryError::NotFound)
    }
}
