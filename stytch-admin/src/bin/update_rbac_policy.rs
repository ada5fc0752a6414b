use admin_core::config::ToolSettings;
use admin_core::observability::init_logging;
use clap::Parser;
use secrecy::Secret;
use std::path::PathBuf;
use stytch_admin::commands::update_rbac_policy::{render_success, UpdateRbacPolicy};
use stytch_admin::config::ManagementConfig;

/// Replace a Stytch project's RBAC policy.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Management API key id
    #[arg(long, env = "MANAGEMENT_API_KEY_ID")]
    key_id: String,

    /// Management API secret
    #[arg(long, env = "MANAGEMENT_API_SECRET", hide_env_values = true)]
    secret: String,

    /// Project whose policy is replaced
    #[arg(long, env = "STYTCH_PROJECT_ID")]
    project_id: String,

    /// JSON policy document; the bundled OKR policy is used when unset
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Management API base URL
    #[arg(long, env = "STYTCH_MANAGEMENT_URL")]
    management_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let settings = ToolSettings::load()?;
    init_logging(&settings.log_level, settings.log_format);

    let command = UpdateRbacPolicy {
        config: ManagementConfig {
            key_id: args.key_id,
            key_secret: Secret::new(args.secret),
            project_id: args.project_id,
            api_base_url: args
                .management_url
                .unwrap_or_else(|| settings.management_api_url.clone()),
            timeout: settings.request_timeout(),
        },
        policy_path: args.policy,
    };

    let response = command.run().await?;
    println!("{}", render_success(&response));
    Ok(())
}
