use gumdrop::Options as _;
use raidpick::{args::Args, outcome::Outcome, Request};
use raidpick_config::LoadFromEnv as _;
use raidpick_core::{Aggregator, CancellationToken};
use raidpick_helix::{config::Config, HelixClient};

fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("got ctrl-c, cancelling");
            token.cancel();
        }
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from([".dev.env", ".log.env"]);
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_time(alto_logger::TimeConfig::relative_now())
            .with_style(alto_logger::StyleConfig::SingleLine),
    )?
    .init()?;

    let args = Args::parse_args_default_or_exit();
    let request = match args.command {
        Some(command) => Request::try_from(command)?,
        None => {
            eprintln!("{}", Args::usage());
            if let Some(commands) = Args::command_list() {
                eprintln!("\ncommands:\n{commands}");
            }
            std::process::exit(1)
        }
    };

    log::info!("loading configuration");
    let config = Config::load_from_env()?;

    log::debug!("getting the helix client");
    let client = HelixClient::connect(&config).await?;
    let agg = Aggregator::new(client);

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    match raidpick::run(&agg, request, &token).await {
        Ok(out) => {
            print!("{out}");
            Ok(())
        }
        Err(err) => {
            Outcome::from_error(&err).report();
            if err.is_cancelled() {
                return Ok(());
            }
            std::process::exit(1)
        }
    }
}
