use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, SetDevParams},
    service::user::UserService,
};

fn register_params(user_name: &str) -> RegisterUserParams {
    RegisterUserParams {
        user_name: user_name.to_string(),
        full_name: format!("{} Example", user_name),
        password: "correct horse".to_string(),
    }
}

/// Tests that only the first registered user becomes a dev.
///
/// Expected: first user dev, second user not
#[tokio::test]
async fn first_user_becomes_dev() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let first = service.register(register_params("ada")).await?;
    let second = service.register(register_params("grace")).await?;

    assert!(first.dev);
    assert!(!second.dev);

    let stored = UserRepository::new(db).find_by_id(first.id).await?.unwrap();
    assert!(stored.dev);

    Ok(())
}

/// Tests registering a taken user name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_taken_user_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.register(register_params("ada")).await?;
    let result = service.register(register_params("ada")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests logging in with correct and incorrect credentials.
///
/// Expected: Ok for the right password; InvalidCredentials otherwise
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let registered = service.register(register_params("ada")).await?;

    let user = service.login("ada", "correct horse").await?;
    let wrong_password = service.login("ada", "battery staple").await;
    let unknown_user = service.login("nobody", "correct horse").await;

    assert_eq!(user.id, registered.id);
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests granting the dev flag.
///
/// Expected: Ok with dev set; NotFound for a missing user
#[tokio::test]
async fn sets_dev_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .set_dev(SetDevParams {
            user_id: user.id,
            dev: true,
        })
        .await?;
    let missing = service
        .set_dev(SetDevParams {
            user_id: user.id + 1,
            dev: true,
        })
        .await;

    assert!(updated.dev);
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
