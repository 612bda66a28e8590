//! Hero routes

use super::error::ApiError;
use crate::cli::types::page::Page;
use crate::storage::{Hero, HeroCreate, HeroDatabase, HeroFilter, HeroRead};
use axum::{extract::State, Json};

/// POST /heroes - Create a hero; the store assigns the id
pub async fn create_hero(
    State(db): State<HeroDatabase>,
    Json(req): Json<HeroCreate>,
) -> Result<Json<HeroRead>, ApiError> {
    let hero = tokio::task::spawn_blocking(move || db.create_hero(req)).await??;
    Ok(Json(HeroRead::from(hero)))
}

/// GET /heroes - List every stored hero
pub async fn list_heroes(State(db): State<HeroDatabase>) -> Result<Json<Vec<Hero>>, ApiError> {
    let heroes =
        tokio::task::spawn_blocking(move || db.select_heroes(&HeroFilter::new(), Page::all()))
            .await??;
    Ok(Json(heroes))
}
