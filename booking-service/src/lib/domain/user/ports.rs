use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSession;
use crate::user::errors::UserError;

/// Port for registration, login and identity lookup.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user and issue their first token.
    ///
    /// # Arguments
    /// * `command` - Validated name, email, password and role
    ///
    /// # Returns
    /// Created user and a signed token whose subject is the new user's id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store lookup or write failed
    /// * `CredentialError` - Hashing or token issuance failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserSession, UserError>;

    /// Check credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `DatabaseError` - Store lookup failed
    /// * `CredentialError` - Stored digest unreadable or token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<UserSession, UserError>;

    /// Resolve the user behind an authenticated identity.
    ///
    /// # Errors
    /// * `NotFound` - Subject no longer resolves to a user
    /// * `DatabaseError` - Store lookup failed
    async fn current_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - The store's unique email constraint rejected the row
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve multiple users by identifiers.
    ///
    /// # Returns
    /// Vector of found users (missing IDs are skipped without error)
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
}
