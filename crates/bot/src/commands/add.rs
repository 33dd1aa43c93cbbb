use std::time::Duration;

use chrono::NaiveDate;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedAuthor};
use poise::{CreateReply, Modal};
use tracing::{info, warn};

use tmdb::models::MovieDetails;
use tmdb::poster_url;

use crate::{Data, Error};

const MODAL_TIMEOUT: Duration = Duration::from_secs(60);
const EMBED_COLOUR: u32 = 0x01b4e4;

#[derive(Debug, Modal)]
#[name = "Add a movie"]
struct AddMovieModal {
    #[name = "Movie title"]
    #[placeholder = "Inception"]
    #[max_length = 500]
    title: String,
    #[name = "Release year"]
    #[placeholder = "2010"]
    #[min_length = 4]
    #[max_length = 4]
    year: Option<String>,
}

/// Ask for a movie title and year, then post the best TMDB match.
#[poise::command(slash_command, global_cooldown = 5)]
pub async fn add(actx: poise::ApplicationContext<'_, Data, Error>) -> Result<(), Error> {
    let ctx = poise::Context::Application(actx);
    info!(user = %ctx.author().name, "add movie requested");

    let Some(form) = poise::execute_modal(actx, None::<AddMovieModal>, Some(MODAL_TIMEOUT)).await?
    else {
        warn!(user = %ctx.author().name, "modal was not submitted within the time limit");
        return Ok(());
    };

    let page = ctx
        .data()
        .tmdb
        .search_movies(&form.title, form.year.as_deref())
        .await?;

    let requested_by = match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().display_name().to_string(),
    };

    match page.most_popular() {
        Some(movie) => {
            info!(user = %ctx.author().name, movie_id = movie.movie.id, "posting match");
            ctx.send(CreateReply::default().embed(movie_embed(&requested_by, &movie)))
                .await?;
        }
        None => {
            info!(user = %ctx.author().name, title = %form.title, "no match found");
            ctx.say(format!("No movie found for \"{}\".", form.title))
                .await?;
        }
    }

    Ok(())
}

fn movie_embed(requested_by: &str, movie: &MovieDetails) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .author(CreateEmbedAuthor::new(format!("Added by {requested_by}")))
        .title(movie.movie.original_title.clone())
        .field(
            "Release date",
            format_release_date(&movie.movie.release_date),
            true,
        )
        .colour(EMBED_COLOUR);

    if !movie.movie.overview.is_empty() {
        embed = embed.description(movie.movie.overview.clone());
    }
    if let Some(path) = &movie.movie.poster_path {
        embed = embed.image(poster_url(path));
    }

    embed
}

fn format_release_date(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown".into();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/add_tests.rs"]
mod tests;
