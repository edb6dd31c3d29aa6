use std::collections::HashMap;

use chrono::Local;
use tracing::debug;
use vellum_core::constants::{
    HOME_CHANNEL, LOCAL_USER, TYPING_BURST_TICKS, TYPING_IDLE_TICKS,
};
use vellum_core::mock;
use vellum_core::models::{
    AccentColor, ChannelCategory, ChannelKind, Member, Server, ThreadMessage,
};
use vellum_core::wiki::{Document, FocusController, IdSource, MenuState, PageStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chat,
    ThreadPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// View-local state for the open thread page. The document itself lives
/// in the [`PageStore`], keyed by the message id, and survives this
/// struct being dropped when the page closes.
#[derive(Debug, Clone)]
pub struct ThreadPageState {
    pub message: ThreadMessage,
    pub focus: FocusController,
    pub menu: MenuState,
    /// Byte offset of the caret inside the focused block's content.
    pub caret: usize,
    /// Block row highlighted while browsing.
    pub selected: usize,
}

impl ThreadPageState {
    pub fn new(message: ThreadMessage) -> Self {
        Self {
            message,
            focus: FocusController::new(),
            menu: MenuState::new(),
            caret: 0,
            selected: 0,
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.message.id
    }

    /// Grant a pending focus hand-off at paint time: the caret lands at
    /// the end of the newly focused block and the browse selection
    /// follows it.
    pub fn commit_focus(&mut self, doc: &Document) {
        if let Some(id) = self.focus.commit(doc) {
            if let Some(block) = doc.get(&id) {
                self.caret = block.content.len();
            }
            if let Some(pos) = doc.position(&id) {
                self.selected = pos;
            }
        }
        self.selected = self.selected.min(doc.len().saturating_sub(1));
    }
}

pub struct App {
    pub running: bool,
    pub view: View,
    pub input_mode: InputMode,

    // Mock-backed chat workspace
    pub servers: Vec<Server>,
    pub active_server: usize,
    pub categories: Vec<ChannelCategory>,
    pub active_channel: String,
    pub feeds: HashMap<String, Vec<ThreadMessage>>,
    pub members: Vec<Member>,
    pub show_members: bool,
    /// Member index whose profile panel is open.
    pub profile_member: Option<usize>,
    pub selected_message_index: usize,
    pub compose: String,
    pub compose_caret: usize,
    pub typing_users: Vec<String>,
    typing_pool: Vec<String>,
    tick: u64,
    next_local_id: u64,

    // Thread pages
    pub pages: PageStore,
    pub thread_page: Option<ThreadPageState>,

    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let mut pages = PageStore::new(IdSource::default());
        mock::seed_pages(&mut pages);

        let mut feeds = HashMap::new();
        feeds.insert(HOME_CHANNEL.to_string(), mock::general_messages());
        let selected_message_index = feeds[HOME_CHANNEL].len().saturating_sub(1);

        Self {
            running: true,
            view: View::Chat,
            input_mode: InputMode::Normal,
            servers: mock::servers(),
            active_server: 0,
            categories: mock::categories(),
            active_channel: HOME_CHANNEL.to_string(),
            feeds,
            members: mock::members(),
            show_members: true,
            profile_member: None,
            selected_message_index,
            compose: String::new(),
            compose_caret: 0,
            typing_users: Vec::new(),
            typing_pool: mock::typing_pool(),
            tick: 0,
            next_local_id: 1,
            pages,
            thread_page: None,
            status: None,
        }
    }

    pub fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    // -------------------------------------------------------------------------
    // Chat workspace
    // -------------------------------------------------------------------------

    pub fn active_feed(&self) -> &[ThreadMessage] {
        self.feeds
            .get(&self.active_channel)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_message(&self) -> Option<&ThreadMessage> {
        self.active_feed().get(self.selected_message_index)
    }

    pub fn select_prev_message(&mut self) {
        self.selected_message_index = self.selected_message_index.saturating_sub(1);
    }

    pub fn select_next_message(&mut self) {
        let len = self.active_feed().len();
        if len > 0 {
            self.selected_message_index = (self.selected_message_index + 1).min(len - 1);
        }
    }

    fn text_channel_ids(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|cat| cat.channels.iter())
            .filter(|ch| ch.kind == ChannelKind::Text)
            .map(|ch| ch.id.clone())
            .collect()
    }

    pub fn next_channel(&mut self) {
        self.cycle_channel(1);
    }

    pub fn prev_channel(&mut self) {
        self.cycle_channel(-1);
    }

    fn cycle_channel(&mut self, step: isize) {
        let ids = self.text_channel_ids();
        if ids.is_empty() {
            return;
        }
        let current = ids
            .iter()
            .position(|id| *id == self.active_channel)
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(ids.len() as isize) as usize;
        self.active_channel = ids[next].clone();
        self.selected_message_index = self.active_feed().len().saturating_sub(1);
    }

    pub fn next_server(&mut self) {
        if !self.servers.is_empty() {
            self.active_server = (self.active_server + 1) % self.servers.len();
        }
    }

    pub fn prev_server(&mut self) {
        if !self.servers.is_empty() {
            self.active_server =
                self.active_server.checked_sub(1).unwrap_or(self.servers.len() - 1);
        }
    }

    pub fn toggle_members(&mut self) {
        self.show_members = !self.show_members;
    }

    /// Open the profile panel for a member by display name.
    pub fn open_profile(&mut self, name: &str) {
        self.profile_member = self.members.iter().position(|m| m.name == name);
        if self.profile_member.is_none() {
            self.set_status(&format!("No profile for {name}"));
        }
    }

    pub fn close_profile(&mut self) {
        self.profile_member = None;
    }

    /// Append the compose draft to the active channel's feed as a local
    /// message. Session-only, like everything else here.
    pub fn send_message(&mut self) {
        let content = self.compose.trim().to_string();
        if content.is_empty() {
            return;
        }
        let id = format!("local-{}", self.next_local_id);
        self.next_local_id += 1;
        let message = ThreadMessage::new(
            id,
            LOCAL_USER,
            "Y",
            AccentColor::Slate,
            content,
            Local::now(),
        );
        self.feeds
            .entry(self.active_channel.clone())
            .or_default()
            .push(message);
        self.compose.clear();
        self.compose_caret = 0;
        self.selected_message_index = self.active_feed().len() - 1;
    }

    /// Advance the UI clock: drives the mock typing indicator through
    /// idle/burst phases, picking authors deterministically.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let period = TYPING_IDLE_TICKS + TYPING_BURST_TICKS;
        let phase = self.tick % period;
        if phase < TYPING_IDLE_TICKS {
            self.typing_users.clear();
        } else if self.typing_users.is_empty() && !self.typing_pool.is_empty() {
            let round = (self.tick / period) as usize;
            let first = round % self.typing_pool.len();
            self.typing_users.push(self.typing_pool[first].clone());
            if round % 3 == 0 {
                let second = (first + 1) % self.typing_pool.len();
                self.typing_users.push(self.typing_pool[second].clone());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Thread page edges
    // -------------------------------------------------------------------------

    /// Inbound edge of the editor: seed (or fetch) the page for `message`
    /// and switch into editor mode. Nothing is focused until the user
    /// interacts.
    pub fn open_document(&mut self, message: ThreadMessage) {
        debug!(thread_id = %message.id, "opening thread page");
        self.pages.open(&message);
        self.thread_page = Some(ThreadPageState::new(message));
        self.view = View::ThreadPage;
        self.input_mode = InputMode::Normal;
    }

    /// Outbound edge: leave the editor and return to the feed. The
    /// document stays in the store for the rest of the session.
    pub fn close_document(&mut self) {
        if let Some(page) = self.thread_page.take() {
            debug!(thread_id = %page.thread_id(), "closing thread page");
        }
        self.view = View::Chat;
        self.input_mode = InputMode::Normal;
    }

    /// Commit any pending focus hand-off. Called once per frame, right
    /// before drawing, so a hand-off always lands between two keystrokes.
    pub fn commit_focus(&mut self) {
        if let Some(page) = self.thread_page.as_mut() {
            if let Some(doc) = self.pages.page(&page.message.id) {
                page.commit_focus(doc);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_document_is_idempotent_within_session() {
        let mut app = App::new();
        let message = app.active_feed()[1].clone();

        app.open_document(message.clone());
        let body = app.pages.page(&message.id).unwrap().blocks()[1].id.clone();
        app.pages.update_content(&message.id, &body, "notes");
        app.close_document();
        assert_eq!(app.view, View::Chat);

        app.open_document(message.clone());
        let doc = app.pages.page(&message.id).unwrap();
        assert_eq!(doc.blocks()[1].content, "notes");
        assert_eq!(app.view, View::ThreadPage);
    }

    #[test]
    fn test_open_document_focuses_nothing() {
        let mut app = App::new();
        let message = app.active_feed()[0].clone();
        app.open_document(message);
        let page = app.thread_page.as_ref().unwrap();
        assert_eq!(page.focus.focused(), None);
    }

    #[test]
    fn test_send_message_appends_local_message() {
        let mut app = App::new();
        let before = app.active_feed().len();
        app.compose = "hello there".to_string();
        app.send_message();

        let feed = app.active_feed();
        assert_eq!(feed.len(), before + 1);
        assert_eq!(feed.last().unwrap().author, LOCAL_USER);
        assert!(app.compose.is_empty());
        assert_eq!(app.selected_message_index, feed.len() - 1);
    }

    #[test]
    fn test_send_message_ignores_blank_draft() {
        let mut app = App::new();
        let before = app.active_feed().len();
        app.compose = "   ".to_string();
        app.send_message();
        assert_eq!(app.active_feed().len(), before);
    }

    #[test]
    fn test_channel_cycling_wraps() {
        let mut app = App::new();
        let ids = app.text_channel_ids();
        assert!(ids.len() > 1);

        app.next_channel();
        assert_ne!(app.active_channel, HOME_CHANNEL);
        for _ in 1..ids.len() {
            app.next_channel();
        }
        assert_eq!(app.active_channel, HOME_CHANNEL);
    }

    #[test]
    fn test_typing_indicator_cycles_through_phases() {
        let mut app = App::new();
        let period = TYPING_IDLE_TICKS + TYPING_BURST_TICKS;

        let mut saw_typing = false;
        let mut saw_idle = false;
        for _ in 0..(period * 2) {
            app.on_tick();
            if app.typing_users.is_empty() {
                saw_idle = true;
            } else {
                saw_typing = true;
            }
        }
        assert!(saw_typing && saw_idle);
    }
}
