use tokio::sync::RwLock;
use users_shared::{
    api::{CreateUserRequest, UpdateUserRequest},
    User, UserRole,
};
use uuid::Uuid;

use crate::synth;

/// Constraints for listing users. Absent fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        self.role.map_or(true, |role| user.role == role)
            && self.is_active.map_or(true, |active| user.is_active == active)
    }
}

/// In-memory user collection. Insertion order is listing order.
///
/// Every operation takes the lock once and holds it until it returns, so each
/// call is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// A store holding `count` synthesized users.
    pub fn seeded(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_users((0..count).map(|_| synth::user(&mut rng)).collect())
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    pub async fn list(&self, filter: &UserFilter) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    pub async fn create(&self, req: CreateUserRequest) -> User {
        let user = synth::user_from_request(&mut rand::thread_rng(), req);

        let mut users = self.users.write().await;
        users.push(user.clone());

        user
    }

    /// Merges the supplied fields into the stored user in place. `id` and
    /// `created_at` are never touched.
    pub async fn update(&self, id: Uuid, req: UpdateUserRequest) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;

        if let Some(email) = req.email {
            user.email = email;
        }
        if let Some(first_name) = req.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = req.last_name {
            user.last_name = last_name;
        }
        if let Some(avatar) = req.avatar {
            user.avatar = avatar;
        }
        if let Some(role) = req.role {
            user.role = role;
        }
        if let Some(is_active) = req.is_active {
            user.is_active = is_active;
        }
        if let Some(last_login_at) = req.last_login_at {
            user.last_login_at = last_login_at;
        }

        Some(user.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Option<User> {
        let mut users = self.users.write().await;
        let idx = users.iter().position(|u| u.id == id)?;
        Some(users.remove(idx))
    }

    /// Appends `count` fully synthesized users. Returns them along with the new
    /// collection size.
    pub async fn generate(&self, count: usize) -> (Vec<User>, usize) {
        let generated: Vec<User> = {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| synth::user(&mut rng)).collect()
        };

        let mut users = self.users.write().await;
        users.extend(generated.iter().cloned());

        (generated, users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn user(role: UserRole, is_active: bool) -> User {
        let now = synth::timestamp(synth::now());
        User {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", role),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            avatar: "https://example.com/avatar.png".to_string(),
            role,
            is_active,
            created_at: now.clone(),
            last_login_at: now,
        }
    }

    fn fixture() -> Vec<User> {
        vec![
            user(UserRole::Admin, true),
            user(UserRole::User, true),
            user(UserRole::Admin, false),
            user(UserRole::Moderator, true),
            user(UserRole::User, false),
        ]
    }

    #[tokio::test]
    async fn test_seeded_store_has_unique_ids() {
        let store = UserStore::seeded(10);
        let users = store.list(&UserFilter::default()).await;

        assert_eq!(users.len(), 10);
        let ids: HashSet<Uuid> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn test_list_filters_by_role_and_activity() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        let admins = store
            .list(&UserFilter {
                role: Some(UserRole::Admin),
                is_active: None,
            })
            .await;
        assert_eq!(admins, vec![users[0].clone(), users[2].clone()]);

        let active_admins = store
            .list(&UserFilter {
                role: Some(UserRole::Admin),
                is_active: Some(true),
            })
            .await;
        assert_eq!(active_admins, vec![users[0].clone()]);

        let inactive = store
            .list(&UserFilter {
                role: None,
                is_active: Some(false),
            })
            .await;
        assert_eq!(inactive, vec![users[2].clone(), users[4].clone()]);

        assert_eq!(store.list(&UserFilter::default()).await, users);
    }

    #[tokio::test]
    async fn test_get_returns_matching_user() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        assert_eq!(store.get(users[3].id).await, Some(users[3].clone()));
        assert_eq!(store.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_create_appends_with_fresh_id() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        let created = store
            .create(CreateUserRequest {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            })
            .await;

        assert!(!created.id.is_nil());
        assert!(users.iter().all(|u| u.id != created.id));
        assert_eq!(created.email, "new@example.com");
        assert_eq!(created.role, UserRole::User);
        assert!(created.is_active);

        let all = store.list(&UserFilter::default()).await;
        assert_eq!(all.len(), users.len() + 1);
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_update_merges_fields_in_place() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());
        let target = users[1].clone();
        let login = "2025-01-02T03:04:05.006Z".to_string();

        let updated = store
            .update(
                target.id,
                UpdateUserRequest {
                    first_name: Some("Renamed".to_string()),
                    role: Some(UserRole::Moderator),
                    last_login_at: Some(login.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.created_at, target.created_at);
        assert_eq!(updated.first_name, "Renamed");
        assert_eq!(updated.role, UserRole::Moderator);
        assert_eq!(updated.last_login_at, login);
        assert_eq!(updated.last_name, target.last_name);
        assert_eq!(updated.email, target.email);

        let all = store.list(&UserFilter::default()).await;
        assert_eq!(all[1], updated);
        assert_eq!(all.len(), users.len());
    }

    #[tokio::test]
    async fn test_update_missing_user_leaves_store_unchanged() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        let result = store
            .update(
                Uuid::new_v4(),
                UpdateUserRequest {
                    email: Some("x@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_none());
        assert_eq!(store.list(&UserFilter::default()).await, users);
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        let removed = store.delete(users[2].id).await;
        assert_eq!(removed, Some(users[2].clone()));
        assert_eq!(store.get(users[2].id).await, None);

        let remaining = store.list(&UserFilter::default()).await;
        assert_eq!(
            remaining,
            vec![
                users[0].clone(),
                users[1].clone(),
                users[3].clone(),
                users[4].clone()
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_user_leaves_store_unchanged() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        assert_eq!(store.delete(Uuid::new_v4()).await, None);
        assert_eq!(store.list(&UserFilter::default()).await, users);
    }

    #[tokio::test]
    async fn test_generate_appends_fresh_users() {
        let users = fixture();
        let store = UserStore::with_users(users.clone());

        let (generated, total) = store.generate(4).await;
        assert_eq!(generated.len(), 4);
        assert_eq!(total, users.len() + 4);

        let all = store.list(&UserFilter::default()).await;
        assert_eq!(&all[users.len()..], generated.as_slice());

        let ids: HashSet<Uuid> = all.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[tokio::test]
    async fn test_generate_zero_is_a_no_op() {
        let store = UserStore::new();
        let (generated, total) = store.generate(0).await;

        assert!(generated.is_empty());
        assert_eq!(total, 0);
        assert!(store.is_empty().await);
    }
}
