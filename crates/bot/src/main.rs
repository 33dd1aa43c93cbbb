use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tmdb::TmdbClient;
use tracing::{error, info};

mod commands;
mod config;

use config::load_settings;

pub struct Data {
    pub tmdb: TmdbClient,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    anyhow::ensure!(
        !settings.discord_token.is_empty(),
        "discord token is not configured (bot.toml discord_token or DISCORD_TOKEN)"
    );
    anyhow::ensure!(
        !settings.tmdb.token.is_empty(),
        "tmdb token is not configured (bot.toml [tmdb] token or TMDB_TOKEN)"
    );

    let tmdb = TmdbClient::new(&settings.tmdb.token);

    let options = poise::FrameworkOptions {
        commands: vec![commands::add()],
        on_error: |err| Box::pin(on_error(err)),
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(guilds = ready.guilds.len(), "connected as {}", ready.user.name);
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(Data { tmdb })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(
        &settings.discord_token,
        serenity::GatewayIntents::non_privileged(),
    )
    .framework(framework)
    .await
    .context("failed to build discord client")?;

    client.start().await.context("discord client stopped")?;
    Ok(())
}

async fn on_error(err: poise::FrameworkError<'_, Data, Error>) {
    match err {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "command failed: {error}");
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("error while handling error: {e}");
            }
        }
    }
}
