use admin_core::config::{process_env, ToolSettings};
use admin_core::observability::init_logging;
use clap::Parser;
use std::path::PathBuf;
use stytch_admin::commands::AllowAllJit;

/// Set a Stytch organization's email JIT provisioning to ALL_ALLOWED.
///
/// Reads STYTCH_PROJECT and STYTCH_SECRET from the dev vars file, and
/// STYTCH_ORGANIZATION and HACK_STYTCH_SESSION_TOKEN_FROM_BROWSER from the
/// environment.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// KEY=VALUE file with the project credentials [default: .dev.vars]
    #[arg(long, env = "STYTCH_DEV_VARS")]
    dev_vars: Option<PathBuf>,

    /// Stytch API base URL, picked from the project id when unset
    #[arg(long, env = "STYTCH_API_URL")]
    api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let settings = ToolSettings::load()?;
    init_logging(&settings.log_level, settings.log_format);

    let mut command = AllowAllJit::from_settings(&settings);
    if let Some(path) = args.dev_vars {
        command.dev_vars_path = path;
    }
    if args.api_url.is_some() {
        command.api_base_url = args.api_url;
    }

    let response = command.run(process_env).await?;

    println!("{}", response.body);
    Ok(())
}
