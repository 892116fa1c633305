//! Operator-side user provisioning.
//!
//! The HTTP API has no signup endpoint; accounts are created out-of-band
//! with this binary:
//!
//! ```text
//! create-user <email> <password>
//! ```
//!
//! Hashes the password with Argon2id and inserts the user row, printing
//! the new id. Uses the same database configuration as the server.

use std::process::ExitCode;

use tribunal_api::auth::password::{hash_password, validate_password_strength};
use tribunal_api::config::database_url;
use tribunal_db::models::user::CreateUser;
use tribunal_db::repositories::UserRepo;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: create-user <email> <password>");
        return ExitCode::FAILURE;
    };

    if let Err(msg) = validate_password_strength(&password) {
        eprintln!("Error: {msg}");
        return ExitCode::FAILURE;
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("Error: failed to hash password: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match tribunal_db::create_pool(&database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: failed to connect to database: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tribunal_db::run_migrations(&pool).await {
        eprintln!("Error: failed to run migrations: {e}");
        return ExitCode::FAILURE;
    }

    match UserRepo::create(
        &pool,
        &CreateUser {
            email: email.clone(),
            password_hash,
        },
    )
    .await
    {
        Ok(user) => {
            println!("Created user {} with id {}", user.email, user.id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to create user {email}: {e}");
            ExitCode::FAILURE
        }
    }
}
