pub mod channel;
pub mod member;
pub mod message;
pub mod server;

pub use channel::{Channel, ChannelCategory, ChannelKind};
pub use member::{Member, Presence, Role};
pub use message::{Reaction, ThreadMessage};
pub use server::Server;

/// Accent palette for avatars and server tiles. The render layer maps
/// these to concrete colors; core stays free of terminal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Cyan,
    Pink,
    Amber,
    Emerald,
    Violet,
    Slate,
}
