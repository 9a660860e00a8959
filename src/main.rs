mod catalog;
mod commands;
mod framework;
mod prelude;

use std::sync::Arc;

use serenity::all::ApplicationId;
use serenity::http::Http;
use serenity::interactions_endpoint::Verifier;

use framework::Server;
use prelude::*;

fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let token = std::env::var("BOT_TOKEN").expect("BOT_TOKEN");
    let client_id: u64 = std::env::var("CLIENT_ID").expect("CLIENT_ID").parse()?;
    let public_key = std::env::var("DISCORD_PUBLIC_KEY").expect("DISCORD_PUBLIC_KEY");
    let guild_id = match std::env::var("GUILD_ID") {
        Ok(raw) => Some(GuildId::new(raw.parse()?)),
        Err(_) => None,
    };
    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => 8787,
    };
    let data_path =
        std::env::var("MISCRITS_DATA").unwrap_or_else(|_| "data/miscrits.json".to_string());

    let catalog = Arc::new(Catalog::load(&data_path)?);
    log::info!("loaded {} creatures from {data_path}", catalog.len());

    let runtime = tokio::runtime::Runtime::new()?;
    let http = Arc::new(Http::new(&token));
    http.set_application_id(ApplicationId::new(client_id));
    runtime.block_on(commands::register(&http, guild_id))?;

    let verifier = Verifier::new(&public_key);
    Server::new(catalog, http, verifier, runtime.handle().clone()).run(port)
}
