//! User command - create users and check their fields

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use remarks_core::domain::validate_email;
use remarks_core::services::UserService;
use remarks_core::{OperationResult, User, UserRole};

use crate::output;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Validate the fields and create a user
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (at least 6 characters)
        #[arg(long)]
        password: String,
        /// Role (guest, user, admin, super_admin)
        #[arg(long, default_value = "user")]
        role: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether an email address is well formed
    CheckEmail {
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role grants a permission
    Role {
        /// Role name; unknown names are treated as guest
        role: String,
        /// Permission to check (e.g. read, write, delete)
        permission: String,
    },
}

pub fn run(command: UserCommands) -> Result<ExitCode> {
    match command {
        UserCommands::Create { name, email, password, role, json } => {
            run_create(&name, &email, &password, &role, json)
        }
        UserCommands::CheckEmail { email, json } => run_check_email(&email, json),
        UserCommands::Role { role, permission } => run_role(&role, &permission),
    }
}

fn run_create(name: &str, email: &str, password: &str, role: &str, json: bool) -> Result<ExitCode> {
    let result = register(&UserService::new(), name, email, password, role);

    if json {
        let failed = result.is_err();
        let outcome = match result {
            Ok(user) => OperationResult::ok(user),
            Err(e) => rejected(e, name, email, role),
        };
        output::json(&outcome)?;
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    let user = result?;
    output::success("User created");
    println!("  ID: {}", user.id);
    println!("  Name: {}", user.name);
    println!("  Email: {}", user.email);
    println!("  Role: {}", user.role);
    output::warning("Password is kept in plain text");
    Ok(ExitCode::SUCCESS)
}

fn register(
    users: &UserService,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> remarks_core::Result<User> {
    role.parse::<UserRole>()
        .and_then(|role| users.register(name, email, password, role))
}

/// Failed result carrying the rejected input (never the password)
fn rejected(err: remarks_core::Error, name: &str, email: &str, role: &str) -> OperationResult<User> {
    OperationResult::fail(err.to_string())
        .with_context("name", serde_json::json!(name))
        .with_context("email", serde_json::json!(email))
        .with_context("role", serde_json::json!(role))
}

fn run_check_email(email: &str, json: bool) -> Result<ExitCode> {
    let valid = validate_email(email);

    if json {
        output::json(&serde_json::json!({ "email": email, "valid": valid }))?;
    } else if valid {
        println!("{} {}", "✓".green(), email);
    } else {
        println!("{} {} is not a valid email address", "✗".red(), email);
    }

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_role(role: &str, permission: &str) -> Result<ExitCode> {
    let role = UserRole::parse_lenient(role);
    let allowed = role.has_permission(permission);

    if allowed {
        println!("{} {} may {}", "✓".green(), role, permission);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} {} may not {}", "✗".red(), role, permission);
        Ok(ExitCode::FAILURE)
    }
}
