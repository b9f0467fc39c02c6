//! Reaction handlers
//!
//! Endpoints for post reactions.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use teamline_core::Snowflake;
use teamline_service::dto::{ReactionDto, SaveReactionRequest};
use teamline_service::ReactionService;

use crate::extractors::AuthSession;
use crate::response::{ApiError, ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// Save a reaction on a post
///
/// POST /reactions
pub async fn save_reaction(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(request): Json<SaveReactionRequest>,
) -> ApiResult<ApiJson<ReactionDto>> {
    let service = ReactionService::new(state.service_context());
    let reaction = service.save_reaction(&auth.session, request).await?;
    Ok(ApiJson(ReactionDto::from(&reaction)))
}

/// List reactions on a post
///
/// GET /posts/{post_id}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(post_id): Path<String>,
) -> ApiResult<ApiJson<Vec<ReactionDto>>> {
    let post_id = Snowflake::parse_id(&post_id)
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReactionService::new(state.service_context());
    let reactions = service.get_reactions(&auth.session, post_id).await?;
    Ok(ApiJson(reactions.iter().map(ReactionDto::from).collect()))
}

/// Remove a reaction
///
/// DELETE /users/{user_id}/posts/{post_id}/reactions/{emoji_name}
pub async fn delete_reaction(
    State(state): State<AppState>,
    auth: AuthSession,
    Path((user_id, post_id, emoji_name)): Path<(String, String, String)>,
) -> ApiResult<NoContent> {
    let user_id = Snowflake::parse_id(&user_id)
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;
    let post_id = Snowflake::parse_id(&post_id)
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReactionService::new(state.service_context());
    service
        .delete_reaction(&auth.session, user_id, post_id, &emoji_name)
        .await?;
    Ok(NoContent)
}

/// Reactions for a batch of posts
///
/// POST /posts/ids/reactions
pub async fn bulk_reactions(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(post_ids): Json<Vec<String>>,
) -> ApiResult<ApiJson<HashMap<Snowflake, Vec<ReactionDto>>>> {
    let post_ids = post_ids
        .iter()
        .map(|id| Snowflake::parse_id(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ApiError::invalid_query("Invalid post id format"))?;

    let service = ReactionService::new(state.service_context());
    let reactions = service.bulk_reactions(&auth.session, post_ids).await?;

    Ok(ApiJson(
        reactions
            .into_iter()
            .map(|(post_id, list)| (post_id, list.iter().map(ReactionDto::from).collect()))
            .collect(),
    ))
}
