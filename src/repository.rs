use crate::models::{AdminUserStats, Role, User};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations against the
/// user store. This is the core of the Repository Abstraction pattern, allowing
/// the guard and handlers to interact with the data layer without knowing the
/// specific implementation (Postgres, Mock, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's asynchronous task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Retrieves a single user record by its stable identifier.
    async fn get_user(&self, id: Uuid) -> Option<User>;

    /// Admin access: retrieves every user record in the store.
    /// Ordering is store-native and **not** a contract — callers must not
    /// depend on it.
    async fn get_all_users(&self) -> Vec<User>;

    /// Patches ONLY the `role` column of the target record; no other
    /// attribute is touched. Returns true if a row was updated, false if the
    /// target does not exist (or the store errored).
    async fn set_user_role(&self, id: Uuid, role: Role) -> bool;

    /// Compiles the dashboard counters in a single call.
    async fn get_stats(&self) -> AdminUserStats;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// UserRow
///
/// Raw database row for `public.users`. Every profile column is nullable
/// (including `role` — sign-up does not set one), so the conversion into the
/// typed `User` model is where the fail-closed role mapping happens.
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: Option<String>,
    name: Option<String>,
    image: Option<String>,
    role: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            image: row.image,
            role: Role::from_stored(row.role.as_deref()),
        }
    }
}

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    /// get_user
    ///
    /// Retrieves the record needed for authorization (and for the self-read
    /// endpoint). Lookup errors are logged and collapse to `None`, which the
    /// guard treats as "not logged in".
    async fn get_user(&self, id: Uuid) -> Option<User> {
        sqlx::query_as::<_, UserRow>("SELECT id, email, name, image, role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_user error: {:?}", e);
                None
            })
            .map(User::from)
    }

    /// get_all_users
    ///
    /// Administrative listing of every record. Deliberately no ORDER BY: the
    /// contract exposes store-native order only.
    async fn get_all_users(&self) -> Vec<User> {
        match sqlx::query_as::<_, UserRow>("SELECT id, email, name, image, role FROM users")
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => rows.into_iter().map(User::from).collect(),
            Err(e) => {
                tracing::error!("get_all_users error: {:?}", e);
                vec![]
            }
        }
    }

    /// set_user_role
    ///
    /// The one mutation of this subsystem. Updates the `role` column and
    /// nothing else. `rows_affected == 0` means the target id does not exist.
    /// Concurrent writes to the same record race at the database's native
    /// last-write-wins granularity; no versioning is layered on top.
    async fn set_user_role(&self, id: Uuid, role: Role) -> bool {
        let result = sqlx::query("UPDATE users SET role = $1 WHERE id = $2")
            .bind(role.as_str())
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("set_user_role error: {:?}", e);
                false
            }
        }
    }

    /// get_stats
    ///
    /// Counters for the dashboard cards. The admin count matches the strict
    /// `role = 'admin'` predicate used everywhere else; records with a NULL or
    /// stray role land in the regular bucket.
    async fn get_stats(&self) -> AdminUserStats {
        let total_users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_stats total error: {:?}", e);
                0
            });

        let admin_users =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
                .bind(Role::Admin.as_str())
                .fetch_one(&self.pool)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("get_stats admin error: {:?}", e);
                    0
                });

        AdminUserStats {
            total_users,
            admin_users,
            regular_users: total_users - admin_users,
        }
    }
}
