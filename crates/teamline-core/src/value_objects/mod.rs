//! Value objects - immutable domain values without identity

mod permissions;
mod session;
mod snowflake;

pub use permissions::Permissions;
pub use session::{Session, SYSTEM_ADMIN_ROLE_ID, SYSTEM_USER_ROLE_ID};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
