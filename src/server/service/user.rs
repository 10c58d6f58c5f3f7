//! User business logic: registration, login, and dev flag management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, SetDevParams, User},
    util::password::{hash_password, verify_password},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// The first user to register is made a dev. Promotion happens after the insert in a
    /// single conditional update, so concurrent first registrations yield one dev.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - User name already taken
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.user_name_exists(&params.user_name).await? {
            return Err(AppError::BadRequest(user_name_taken(&params.user_name)));
        }

        let taken = user_name_taken(&params.user_name);
        let password_hash = hash_password(&params.password)?;

        let mut user = repo
            .create(CreateUserParams {
                user_name: params.user_name,
                full_name: params.full_name,
                password_hash,
                dev: false,
            })
            .await
            .map_err(|err| AppError::from_unique_violation(err, taken))?;

        if repo.promote_if_first(user.id).await? {
            user.dev = true;
            tracing::info!("First user {} registered as dev", user.user_name);
        }

        Ok(user)
    }

    /// Checks a user name and password.
    ///
    /// Unknown names and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, user_name: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = repo.find_credentials(user_name).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Gets all users ordered by user name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Grants or revokes the `dev` flag.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new flag
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_dev(&self, params: SetDevParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.set_dev(params.user_id, params.dev).await? == 0 {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.user_id
            )));
        }

        repo.find_by_id(params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))
    }
}

fn user_name_taken(user_name: &str) -> String {
    format!("User name '{}' is already taken", user_name)
}
