use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use miso_fcm_shared::{Environment, FcmClient, FcmError, FcmMessage, PushConfig, ServiceAccountKey};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Send one Firebase Cloud Messaging push notification to a device.
#[derive(Debug, Parser)]
#[command(name = "miso-push", version)]
struct Cli {
    /// Device registration token to deliver the notification to
    device_token: String,

    /// Target environment, selecting the Firebase project and credential file
    #[arg(long, default_value = "production", value_parser = Environment::from_str)]
    env: Environment,

    /// Add the iOS badge/priority and Android click-action overrides
    #[arg(long)]
    platform_overrides: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the FCM response.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(help_or_version) => {
            let _ = help_or_version.print();
            return ExitCode::SUCCESS;
        }
    };

    run(cli).await
}

async fn run(cli: Cli) -> ExitCode {
    let config = PushConfig::for_environment(cli.env);

    info!(
        environment = %config.environment,
        project_id = %config.project_id,
        "Sending FCM notification"
    );

    let credentials = match ServiceAccountKey::from_file(&config.credentials_path) {
        Ok(credentials) => credentials,
        Err(err) => {
            error!(
                "Failed to load service account credentials from {}: {}",
                config.credentials_path.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let message = if cli.platform_overrides {
        FcmMessage::with_platform_overrides(&cli.device_token)
    } else {
        FcmMessage::common(&cli.device_token)
    };

    let client = FcmClient::new(config.project_id, credentials);

    match client.send(&message).await {
        Ok(body) => {
            println!("Message sent to Firebase for delivery, response:");
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(err @ FcmError::SendRequest(_)) => {
            // Delivery is fire-and-forget: a transport failure on the send
            // itself is reported without changing the exit code.
            println!("Unable to send message to Firebase");
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to obtain an access token: {err}");
            ExitCode::FAILURE
        }
    }
}
