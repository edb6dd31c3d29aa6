//! Static seed data for the demo workspace.
//!
//! Everything the front end shows comes from here: servers, channels, the
//! #general feed, the member roster, and the two thread pages that exist
//! before the user creates any.

use chrono::{DateTime, Local, NaiveTime};

use crate::models::{
    AccentColor, Channel, ChannelCategory, Member, Reaction, Role, Server, ThreadMessage,
};
use crate::wiki::{BlockKind, PageStore, SeedBlock};

pub fn servers() -> Vec<Server> {
    vec![
        Server::new("home", "Home", "V", AccentColor::Cyan),
        Server::new("design", "Design Hub", "D", AccentColor::Pink),
        Server::new("dev", "Dev Team", "⚡", AccentColor::Amber),
        Server::new("gaming", "Gaming", "🎮", AccentColor::Emerald),
        Server::new("music", "Music", "♫", AccentColor::Violet),
    ]
}

pub fn categories() -> Vec<ChannelCategory> {
    vec![
        ChannelCategory::new(
            "INFORMATION",
            vec![
                Channel::text("announcements", "announcements")
                    .with_unread()
                    .with_mentions(3),
                Channel::text("rules", "rules"),
            ],
        ),
        ChannelCategory::new(
            "GENERAL",
            vec![
                Channel::text("general", "general").with_unread(),
                Channel::text("off-topic", "off-topic"),
                Channel::text("introductions", "introductions"),
            ],
        ),
        ChannelCategory::new(
            "VOICE",
            vec![
                Channel::voice("lounge", "Lounge", 3),
                Channel::voice("gaming-voice", "Gaming", 0),
            ],
        ),
        ChannelCategory::new(
            "PROJECTS",
            vec![
                Channel::text("showcase", "showcase").with_unread(),
                Channel::text("feedback", "feedback"),
                Channel::text("resources", "resources"),
            ],
        ),
    ]
}

pub fn members() -> Vec<Member> {
    vec![
        Member::online("Alex Chen", "A", AccentColor::Cyan, Role::Admin)
            .with_status("Working on v2.0"),
        Member::online("Maya Patel", "M", AccentColor::Pink, Role::Moderator)
            .with_status("In a meeting"),
        Member::online("Jordan Lee", "J", AccentColor::Amber, Role::Member),
        Member::online("Sam Wright", "S", AccentColor::Emerald, Role::Member)
            .with_status("Streaming"),
        Member::online("Riley Quinn", "R", AccentColor::Violet, Role::Member),
        Member::offline("Taylor Kim", "T", Role::Member),
        Member::offline("Casey Park", "C", Role::Member),
    ]
}

/// Users the tick-driven typing indicator cycles through.
pub fn typing_pool() -> Vec<String> {
    ["Maya Patel", "Jordan Lee", "Sam Wright", "Riley Quinn"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn general_messages() -> Vec<ThreadMessage> {
    vec![
        ThreadMessage::new(
            "1",
            "Alex Chen",
            "A",
            AccentColor::Cyan,
            "Hey everyone! Just shipped the new design system 🎨",
            today_at(14, 14),
        )
        .with_reactions(vec![Reaction::new("🔥", 5), Reaction::new("🎉", 3)]),
        ThreadMessage::new(
            "2",
            "Maya Patel",
            "M",
            AccentColor::Pink,
            "This looks incredible! The glassmorphism effects are *chefs kiss*",
            today_at(14, 16),
        )
        .with_reactions(vec![Reaction::new("💯", 2)]),
        ThreadMessage::new(
            "3",
            "Jordan Lee",
            "J",
            AccentColor::Amber,
            "Can we get a preview of the new voice channels? I heard they're spatial now",
            today_at(14, 18),
        ),
        ThreadMessage::new(
            "4",
            "Alex Chen",
            "A",
            AccentColor::Cyan,
            "Yes! Spatial audio is live in the beta branch. Try joining the Lounge channel — it uses proximity-based audio positioning.",
            today_at(14, 20),
        )
        .with_reactions(vec![Reaction::new("👀", 8)]),
        ThreadMessage::new(
            "5",
            "Sam Wright",
            "S",
            AccentColor::Emerald,
            "Just tested it — feels like you're actually in a room with people. The future is here 🚀",
            today_at(14, 23),
        )
        .with_reactions(vec![Reaction::new("🚀", 4), Reaction::new("❤️", 2)]),
        ThreadMessage::new(
            "6",
            "Riley Quinn",
            "R",
            AccentColor::Violet,
            "Anyone want to jam in the music channel later? Got some new synth patches to try out",
            today_at(14, 25),
        ),
        ThreadMessage::new(
            "7",
            "Maya Patel",
            "M",
            AccentColor::Pink,
            "Count me in! Also, has anyone seen the new thread view? It's way cleaner now",
            today_at(14, 28),
        )
        .with_reactions(vec![Reaction::new("✨", 3)]),
    ]
}

/// Register the thread pages that exist before the user creates any.
/// Keys match message ids in [`general_messages`], so opening those
/// messages lands on prior content instead of a fresh skeleton.
pub fn seed_pages(store: &mut PageStore) {
    store.register(
        "1",
        vec![
            SeedBlock::new(BlockKind::Heading1, "New Design System — Overview"),
            SeedBlock::new(
                BlockKind::Paragraph,
                "We've shipped a complete overhaul of our design tokens, component library, and documentation. Here's what changed and why.",
            ),
            SeedBlock::new(BlockKind::Heading2, "What's New"),
            SeedBlock::new(BlockKind::BulletList, "Unified color system with semantic tokens"),
            SeedBlock::new(BlockKind::BulletList, "New typography scale (Inter, tighter tracking)"),
            SeedBlock::new(BlockKind::BulletList, "Simplified component variants"),
            SeedBlock::new(BlockKind::Divider, ""),
            SeedBlock::new(BlockKind::Heading2, "Migration Guide"),
            SeedBlock::new(
                BlockKind::Paragraph,
                "To migrate existing components, update your imports and replace gradient utilities with semantic classes.",
            ),
            SeedBlock::todo("Update color tokens in tailwind config", true),
            SeedBlock::todo("Replace glass utilities with bg-secondary", true),
            SeedBlock::todo("Audit all components for hardcoded colors", false),
        ],
    );

    store.register(
        "4",
        vec![
            SeedBlock::new(BlockKind::Heading1, "Spatial Audio — Technical Notes"),
            SeedBlock::new(
                BlockKind::Paragraph,
                "Proximity-based audio positioning is now live. This page documents the architecture and usage.",
            ),
            SeedBlock::new(BlockKind::Heading2, "How It Works"),
            SeedBlock::new(
                BlockKind::NumberedList,
                "Each user has a position in a 2D coordinate space",
            ),
            SeedBlock::new(
                BlockKind::NumberedList,
                "Audio volume scales inversely with distance",
            ),
            SeedBlock::new(
                BlockKind::NumberedList,
                "Stereo panning reflects relative position",
            ),
            SeedBlock::new(
                BlockKind::Quote,
                "Think of it like a virtual room — the closer you are, the louder they sound.",
            ),
            SeedBlock::new(BlockKind::Heading2, "API"),
            SeedBlock::new(
                BlockKind::Code,
                "voiceEngine.setPosition(userId, { x: 0.5, y: 0.3 })",
            ),
        ],
    );
}

fn today_at(hour: u32, minute: u32) -> DateTime<Local> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .single()
        .unwrap_or_else(Local::now)
}
