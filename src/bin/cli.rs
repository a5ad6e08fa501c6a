use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use servly::servly_access::{
    AccessRequirement, GuardDecision, Identity, Permission, PermissionSet, Role, Session,
    accessible_routes, evaluate_guard,
};
use servly::servly_auth::{IdentityRecord, create_identity_token, normalize_role};
use servly::servly_config::{AdminConfig, JwtConfig};
use servly::session::{AuthEvent, SessionProvider, SessionStore};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "servly-cli")]
#[command(about = "Servly CLI - Inspect roles and mint development tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation routes of a role
    Routes {
        /// Role name (legacy spellings accepted); visitor when omitted
        #[arg(short = 'r', long)]
        role: Option<String>,
    },
    /// Print the canonical permission set of a role
    Permissions {
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Evaluate a page guard for a signed-in user; exits with status 1 when denied
    Check {
        /// Role held by the session
        #[arg(short = 'r', long)]
        role: String,

        /// E-mail of the signed-in user (matched against ADMIN_EMAILS)
        #[arg(short = 'e', long, default_value = "cli@localhost")]
        email: String,

        /// Role the page requires
        #[arg(long)]
        require: String,

        /// Permission key the page also requires
        #[arg(short = 'p', long)]
        permission: Option<String>,
    },
    /// Mint an identity token for local development
    IssueToken {
        #[arg(short = 'e', long)]
        email: String,

        /// Stored role (app_metadata.role)
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Legacy sign-up type (user_metadata.user_type)
        #[arg(long)]
        user_type: Option<String>,

        /// Subject; a random UUID when omitted
        #[arg(long)]
        sub: Option<Uuid>,
    },
}

fn parse_role(raw: &str) -> Result<Role, String> {
    normalize_role(raw).ok_or_else(|| format!("Unknown role: {}", raw))
}

fn session_for(role: Role) -> Session {
    if role == Role::Visitor {
        return Session::visitor();
    }

    Session::authenticated(
        Identity {
            id: Uuid::nil(),
            email: "cli@localhost".to_string(),
        },
        role,
    )
}

fn print_permissions(role: Role, permissions: PermissionSet) {
    println!("Permissions for {}:", role);
    for permission in Permission::ALL {
        let mark = if permissions.get(permission) { "✔" } else { "✘" };
        println!("  {} {}", mark, permission);
    }
}

fn run(command: Commands) -> Result<bool, String> {
    match command {
        Commands::Routes { role } => {
            let role = role.as_deref().map(parse_role).transpose()?;
            let session = role.map(session_for);

            for route in accessible_routes(session.as_ref()) {
                println!("{}", route);
            }
            Ok(true)
        }
        Commands::Permissions { role } => {
            let role = parse_role(&role)?;
            print_permissions(role, PermissionSet::for_role(role));
            Ok(true)
        }
        Commands::Check {
            role,
            email,
            require,
            permission,
        } => {
            parse_role(&role)?;
            let required = parse_role(&require)?;

            let requirement = match permission.as_deref() {
                None => AccessRequirement::role(required),
                Some(key) => match Permission::from_key(key) {
                    Some(permission) => {
                        AccessRequirement::role(required).with_permission(permission)
                    }
                    None => {
                        println!("denied (unknown permission {})", key);
                        return Ok(false);
                    }
                },
            };

            let store = SessionStore::new(AdminConfig::from_env());
            store.apply(AuthEvent::SignedIn(IdentityRecord {
                id: Uuid::nil(),
                email,
                stored_role: Some(role),
                user_type: None,
            }));

            match evaluate_guard(&store.current(), &requirement) {
                GuardDecision::Render => {
                    println!("granted");
                    Ok(true)
                }
                GuardDecision::Redirect(to) => {
                    println!("denied (redirect to {})", to);
                    Ok(false)
                }
                GuardDecision::Defer => {
                    println!("deferred (session still loading)");
                    Ok(false)
                }
            }
        }
        Commands::IssueToken {
            email,
            role,
            user_type,
            sub,
        } => {
            let config = JwtConfig::from_env();
            let token = create_identity_token(
                sub.unwrap_or_else(Uuid::new_v4),
                &email,
                role.as_deref(),
                user_type.as_deref(),
                &config,
            )
            .map_err(|e| e.error.to_string())?;

            println!("{}", token);
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(2)
        }
    }
}
