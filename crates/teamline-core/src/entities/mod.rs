//! Domain entities

mod channel;
mod command;
mod member;
mod post;
mod reaction;
mod role;
mod team;

pub use channel::{Channel, ChannelType};
pub use command::{
    AutocompleteSuggestion, Command, CommandArgs, CommandMethod, CommandResponse,
    CommandResponseType,
};
pub use member::TeamMember;
pub use post::Post;
pub use reaction::{Reaction, EMOJI_NAME_MAX_LENGTH};
pub use role::Role;
pub use team::Team;
