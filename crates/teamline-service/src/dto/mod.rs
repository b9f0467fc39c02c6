//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateCommandRequest, ExecuteCommandRequest, MoveCommandRequest, SaveReactionRequest,
    SuggestionQuery, UpdateCommandRequest,
};
pub use responses::{CommandResponseDto, HealthResponse, ReactionDto, RegenTokenResponse};
