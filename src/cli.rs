//! Command-line inspection of the role catalog.
//!
//! The CLI answers the questions support and operations ask most: what does
//! a role grant, who gets into the admin panel, and which roles an actor may
//! assign. Every command reads the compiled-in catalog; there is nothing to
//! connect to and no state to mutate.
//!
//! All commands accept `--json` for machine-readable output.

use clap::{Parser, Subcommand};
use serde::Serialize;
use sokoni_access_core::{Role, RoleDefinition};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sokoni-access-cli")]
#[command(about = "Sokoni Access CLI - Inspect marketplace roles and permissions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role in the catalog
    Roles,
    /// Show one role's definition and derived access
    Info {
        /// Role to describe (unknown roles fall back to `user`)
        role: String,
    },
    /// Check whether a role grants a permission (exit 1 when denied)
    Check {
        /// Acting role (unknown roles fall back to `user`)
        role: String,

        /// Permission string, e.g. `products.manage`
        permission: String,
    },
    /// List the roles an acting role may assign to others
    Assignable {
        /// Acting role (unknown roles fall back to `user`)
        role: String,
    },
}

/// One catalog row for JSON output.
#[derive(Serialize)]
struct CatalogEntry {
    role: Role,
    #[serde(flatten)]
    definition: &'static RoleDefinition,
}

/// Full JSON report for the `info` command.
#[derive(Serialize)]
struct RoleReport {
    role: Role,
    #[serde(flatten)]
    definition: &'static RoleDefinition,
    can_access_admin_panel: bool,
    assignable_roles: Vec<Role>,
}

/// Install the tracing subscriber for CLI runs.
///
/// Defaults to `warn` so fallback-role warnings from lenient parsing reach
/// the terminal; `RUST_LOG` overrides as usual. Logs go to stderr so that
/// `--json` output stays parseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a parsed invocation and return the process exit code.
pub fn run(cli: Cli) -> i32 {
    match cli.command {
        Commands::Roles => handle_roles(cli.json),
        Commands::Info { role } => handle_info(&role, cli.json),
        Commands::Check { role, permission } => handle_check(&role, &permission, cli.json),
        Commands::Assignable { role } => handle_assignable(&role, cli.json),
    }
}

fn handle_roles(json: bool) -> i32 {
    if json {
        let catalog: Vec<CatalogEntry> = Role::ALL
            .iter()
            .map(|role| CatalogEntry {
                role: *role,
                definition: role.definition(),
            })
            .collect();
        return print_json(&catalog);
    }

    println!("Sokoni role catalog:\n");
    for role in Role::ALL {
        let definition = role.definition();
        println!("{} ({}, level {})", role, definition.name, definition.level);
        println!("   {}", definition.description);
        println!("   Permissions: {}", definition.permissions.join(", "));
        println!();
    }
    0
}

fn handle_info(role: &str, json: bool) -> i32 {
    let role = Role::from_claim(role);
    let definition = role.definition();

    if json {
        return print_json(&RoleReport {
            role,
            definition,
            can_access_admin_panel: role.can_access_admin_panel(),
            assignable_roles: role.assignable_roles(),
        });
    }

    println!("Role: {}", role);
    println!("   Name: {}", definition.name);
    println!("   Description: {}", definition.description);
    println!("   Level: {}", definition.level);
    println!("   Color: {}", definition.color);
    println!("   Icon: {}", definition.icon);
    println!(
        "   Admin panel: {}",
        if role.can_access_admin_panel() { "yes" } else { "no" }
    );
    println!("   Permissions: {}", definition.permissions.join(", "));

    let assignable = role.assignable_roles();
    if assignable.is_empty() {
        println!("   Assignable roles: none");
    } else {
        println!(
            "   Assignable roles: {}",
            assignable
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    0
}

fn handle_check(role: &str, permission: &str, json: bool) -> i32 {
    let role = Role::from_claim(role);
    let granted = role.has_permission(permission);

    if json {
        let code = print_json(&serde_json::json!({
            "role": role,
            "permission": permission,
            "granted": granted,
        }));
        if code != 0 {
            return code;
        }
    } else if granted {
        println!("✅ Role '{}' grants permission '{}'", role, permission);
    } else {
        println!("❌ Role '{}' does not grant permission '{}'", role, permission);
    }

    if granted { 0 } else { 1 }
}

fn handle_assignable(role: &str, json: bool) -> i32 {
    let role = Role::from_claim(role);
    let assignable = role.assignable_roles();

    if json {
        return print_json(&serde_json::json!({
            "role": role,
            "assignable_roles": assignable,
        }));
    }

    if assignable.is_empty() {
        println!("Role '{}' cannot assign any roles.", role);
    } else {
        println!("Roles assignable by '{}':", role);
        for target in assignable {
            println!("   {} (level {})", target, target.level());
        }
    }
    0
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(e) => {
            eprintln!("\n❌ Error rendering JSON: {}", e);
            1
        }
    }
}
