use std::io::Read;

use clap::Subcommand;

use blaze_core::relay::{relay_build, verify_signature, RelayOutcome, RelaySettings};

#[derive(Subcommand)]
pub enum RelayAction {
    /// Verify a webhook signature over a body read from stdin
    Verify {
        /// The sha1=<hex> signature header value
        #[arg(long)]
        signature: String,
    },
    /// Verify and forward a webhook body read from stdin
    Forward {
        #[arg(long)]
        signature: String,
    },
}

fn read_body() -> Result<String, Box<dyn std::error::Error>> {
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;
    Ok(body)
}

fn settings() -> Result<RelaySettings, Box<dyn std::error::Error>> {
    let env = |name: &str| {
        std::env::var(name).map_err(|_| format!("{name} is not set"))
    };
    Ok(RelaySettings {
        webhook_secret: env("BLAZE_WEBHOOK_SECRET")?,
        github_token: env("BLAZE_GITHUB_TOKEN")?,
        repository: env("BLAZE_RELAY_REPO")?,
    })
}

pub fn run(action: RelayAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RelayAction::Verify { signature } => {
            let secret = std::env::var("BLAZE_WEBHOOK_SECRET")
                .map_err(|_| "BLAZE_WEBHOOK_SECRET is not set")?;
            let body = read_body()?;
            if verify_signature(&body, &signature, &secret) {
                println!("signature valid");
            } else {
                return Err("signature invalid".into());
            }
        }
        RelayAction::Forward { signature } => {
            let settings = settings()?;
            let body = read_body()?;
            let runtime = tokio::runtime::Runtime::new()?;
            let client = reqwest::Client::new();
            let outcome =
                runtime.block_on(relay_build(&client, &settings, &body, Some(&signature)))?;
            match outcome {
                RelayOutcome::Dispatched => println!("dispatched"),
                RelayOutcome::Ignored => println!("ignored (not a finished Android build)"),
            }
        }
    }
    Ok(())
}
