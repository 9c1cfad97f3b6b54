//! Command dispatch for the `keygate` binary.
//!
//! One subcommand per dashboard action. All behavior lives in the
//! library; this file only collects input and prints results.

use std::io::{self, Write as _};
use std::sync::Arc;

use keygate_client::api::{Client, CodePurpose};
use keygate_client::config::ConfigV1;
use keygate_client::error::Error;
use keygate_client::gateway::LoginPrompt;

pub async fn run(config: &ConfigV1, args: &[String]) -> Result<(), Error> {
    let client = Client::from_config(config, Arc::new(LoginPrompt)).await?;
    let mut args = args.iter().map(String::as_str);

    match args.next() {
        Some("login") => {
            let username = expect_arg(args.next(), "login <username>");
            let password = prompt("Password: ");
            let identity = client.login(username, &password).await?;
            println!("Signed in as {}", identity.username);
        }
        Some("logout") => {
            client.logout().await;
            println!("Signed out.");
        }
        Some("whoami") => {
            if !client.session().is_authenticated().await {
                println!("Not signed in.");
                return Ok(());
            }
            let identity = client.profile().await?;
            println!("{} <{}> (id {})", identity.username, identity.email, identity.id);
        }
        Some("register") => {
            let username = expect_arg(args.next(), "register <username> <email> <code>");
            let email = expect_arg(args.next(), "register <username> <email> <code>");
            let code = expect_arg(args.next(), "register <username> <email> <code>");
            let password = prompt("Choose a password: ");
            let identity = client.register(username, email, &password, code).await?;
            println!("Welcome, {}. You are signed in.", identity.username);
        }
        Some("send-code") => {
            let email = expect_arg(args.next(), "send-code <email> <register|reset>");
            let purpose = match args.next() {
                Some("register") => CodePurpose::Register,
                Some("reset") => CodePurpose::Reset,
                _ => usage_exit("send-code <email> <register|reset>"),
            };
            client.send_code(email, purpose).await?;
            println!("Verification code sent to {}", email);
        }
        Some("reset-password") => {
            let email = expect_arg(args.next(), "reset-password <email> <code>");
            let code = expect_arg(args.next(), "reset-password <email> <code>");
            let new_password = prompt("New password: ");
            client.reset_password(email, code, &new_password).await?;
            println!("Password reset. You can sign in now.");
        }
        Some("keys") => match args.next() {
            Some("list") | None => {
                for key in client.api_keys().await? {
                    println!(
                        "{:>6}  {:<20} {}  (created {})",
                        key.id, key.name, key.key, key.created_at
                    );
                }
            }
            Some("create") => {
                let name = expect_arg(args.next(), "keys create <name>");
                let key = client.create_api_key(name).await?;
                println!("Created key '{}': {}", key.name, key.key);
            }
            Some("delete") => {
                let id = expect_arg(args.next(), "keys delete <id>");
                let id: u64 = id.parse().unwrap_or_else(|_| usage_exit("keys delete <id>"));
                client.delete_api_key(id).await?;
                println!("Deleted key {}", id);
            }
            _ => usage_exit("keys [list|create <name>|delete <id>]"),
        },
        Some("password") => {
            let old_password = prompt("Current password: ");
            let new_password = prompt("New password: ");
            client.change_password(&old_password, &new_password).await?;
            println!("Password changed.");
        }
        Some("usage") => {
            let usage = client.usage().await?;
            println!("Total calls:   {}", usage.total_calls);
            println!("Calls today:   {}", usage.calls_today);
            println!("Success rate:  {:.1}%", usage.success_rate);
            println!("Balance:       {}", usage.balance);
        }
        Some("logs") => {
            let page = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
            let limit = args.next().and_then(|a| a.parse().ok()).unwrap_or(20);
            let logs = client.logs(page, limit).await?;
            for record in &logs.records {
                println!(
                    "{}  {:<6} {:<30} {}  {}ms  {}",
                    record.time, record.method, record.api, record.status_code,
                    record.duration_ms, record.ip
                );
            }
            println!(
                "page {}/{} ({} total)",
                logs.page,
                logs.total.div_ceil(u64::from(logs.limit.max(1))),
                logs.total
            );
        }
        _ => usage_exit(
            "login | logout | whoami | register | send-code | reset-password\n  \
             keys [list|create|delete] | password | usage | logs [page] [limit] | schema",
        ),
    }

    Ok(())
}

fn expect_arg<'a>(arg: Option<&'a str>, usage: &str) -> &'a str {
    match arg {
        Some(value) => value,
        None => usage_exit(usage),
    }
}

fn usage_exit(usage: &str) -> ! {
    eprintln!("usage: keygate {}", usage);
    std::process::exit(2);
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().expect("failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read input");
    line.trim_end_matches(['\r', '\n']).to_string()
}
