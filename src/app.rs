//! Screen state machine: topic menu, loading, playing.
//!
//! The app owns at most one [`GameSession`]. Leaving a game (changing topic)
//! drops the session, so its pending delays go with it. Topic files load in
//! the background; a result is only accepted for the request the app is
//! still waiting on.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crossterm::event::KeyEvent;
use log::{debug, info, warn};

use crate::config::Config;
use crate::core::{dispatch, GameSession, GameSnapshot, SimpleRng};
use crate::data::{LoadResult, Loader, RequestId, Topic};
use crate::input::{handle_key_event, should_quit, GridCursor, InputCommand};
use crate::term::{
    BoardScene, BoardView, FrameBuffer, Notice, TermFeedback, TopicScene, TopicView, Viewport,
};
use crate::types::BOARD_COLUMNS;

/// Message shown under the topic menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppNotice {
    Info(String),
    Error(String),
}

struct Game {
    session: GameSession,
    cursor: GridCursor,
    topic: String,
}

enum Screen {
    TopicMenu,
    Loading { request: RequestId, topic: usize },
    Playing(Box<Game>),
}

/// Both views, configured once.
pub struct Views {
    pub board: BoardView,
    pub topics: TopicView,
}

impl Views {
    pub fn new(reverse_rtl: bool) -> Self {
        Self {
            board: BoardView::default().with_reverse_rtl(reverse_rtl),
            topics: TopicView::default().with_reverse_rtl(reverse_rtl),
        }
    }
}

pub struct App {
    config: Config,
    topics: Vec<Topic>,
    menu_items: Vec<(String, Option<u64>)>,
    menu_cursor: GridCursor,
    screen: Screen,
    notice: Option<AppNotice>,
    loader: Loader,
    feedback: TermFeedback,
    seeds: SimpleRng,
    snap: GameSnapshot,
    quit: bool,
}

impl App {
    pub fn new(config: Config, topics: Vec<Topic>, loader: Loader) -> Self {
        let menu_items = topics
            .iter()
            .map(|t| (t.name.clone(), t.entries))
            .collect::<Vec<_>>();
        let notice = topics.is_empty().then(|| {
            AppNotice::Error(format!("no topics in {}", config.data_dir.display()))
        });

        Self {
            menu_cursor: GridCursor::list(menu_items.len()),
            seeds: SimpleRng::new(config.seed),
            config,
            topics,
            menu_items,
            screen: Screen::TopicMenu,
            notice,
            loader,
            feedback: TermFeedback::new(),
            snap: GameSnapshot::default(),
            quit: false,
        }
    }

    pub fn set_notice(&mut self, notice: Option<AppNotice>) {
        self.notice = notice;
    }

    pub fn notice(&self) -> Option<&AppNotice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// `"topics"`, `"loading"` or `"playing"`.
    pub fn screen_name(&self) -> &'static str {
        match self.screen {
            Screen::TopicMenu => "topics",
            Screen::Loading { .. } => "loading",
            Screen::Playing(_) => "playing",
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Playing(game) => Some(&game.session),
            _ => None,
        }
    }

    /// Tile under the cursor while playing.
    pub fn board_cursor(&self) -> Option<usize> {
        match &self.screen {
            Screen::Playing(game) => Some(game.cursor.index()),
            _ => None,
        }
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_cursor.index()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(command) = handle_key_event(key) {
            self.handle_command(command);
        }
    }

    pub fn handle_command(&mut self, command: InputCommand) {
        match &mut self.screen {
            Screen::TopicMenu => match command {
                InputCommand::Move(direction) => {
                    self.menu_cursor.step(direction);
                }
                InputCommand::Select => self.request_topic(self.menu_cursor.index()),
                InputCommand::NewGame | InputCommand::ChangeTopic => {}
            },
            Screen::Loading { .. } => {
                if command == InputCommand::ChangeTopic {
                    self.screen = Screen::TopicMenu;
                    self.notice = None;
                }
            }
            Screen::Playing(game) => match command {
                InputCommand::Move(direction) => {
                    game.cursor.step(direction);
                }
                InputCommand::ChangeTopic => {
                    info!("leaving topic {}", game.topic);
                    self.screen = Screen::TopicMenu;
                }
                InputCommand::Select | InputCommand::NewGame => {
                    if let Some(action) = command.game_action(game.cursor.index()) {
                        game.session.apply_action(action);
                    }
                    self.flush_effects();
                }
            },
        }
    }

    /// Advance the app by one frame.
    pub fn tick(&mut self, elapsed_ms: u32) {
        while let Some(result) = self.loader.try_recv() {
            self.accept_load(result);
        }
        if let Screen::Playing(game) = &mut self.screen {
            if game.session.tick(elapsed_ms) {
                self.flush_effects();
            }
        }
    }

    /// Bells requested since the last call.
    pub fn take_bells(&mut self) -> u32 {
        self.feedback.take_bells()
    }

    /// Hash of everything currently drawn.
    pub fn fingerprint(&mut self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.screen_name().hash(&mut hasher);
        self.notice.hash(&mut hasher);
        self.menu_cursor.index().hash(&mut hasher);
        if let Screen::Playing(game) = &self.screen {
            game.session.snapshot_into(&mut self.snap);
            self.snap.fingerprint().hash(&mut hasher);
            game.cursor.index().hash(&mut hasher);
        }
        hasher.finish()
    }

    pub fn render_into(&mut self, views: &Views, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.screen {
            Screen::Playing(game) => {
                game.session.snapshot_into(&mut self.snap);
                let scene = BoardScene {
                    snap: &self.snap,
                    cursor: Some(game.cursor.index()),
                    topic: &game.topic,
                };
                views.board.render_into(&scene, viewport, fb);
            }
            Screen::Loading { topic, .. } => {
                let name = self.menu_items.get(*topic).map(|t| t.0.as_str()).unwrap_or("");
                let message = format!("loading {} ...", name);
                let scene = TopicScene {
                    items: &self.menu_items,
                    selected: self.menu_cursor.index(),
                    notice: Some(Notice::Info(&message)),
                };
                views.topics.render_into(&scene, viewport, fb);
            }
            Screen::TopicMenu => {
                let notice = self.notice.as_ref().map(|n| match n {
                    AppNotice::Info(msg) => Notice::Info(msg),
                    AppNotice::Error(msg) => Notice::Error(msg),
                });
                let scene = TopicScene {
                    items: &self.menu_items,
                    selected: self.menu_cursor.index(),
                    notice,
                };
                views.topics.render_into(&scene, viewport, fb);
            }
        }
    }

    fn request_topic(&mut self, index: usize) {
        let Some(topic) = self.topics.get(index) else {
            return;
        };
        let request = self.loader.request(topic.path.clone());
        debug!("requested topic {} ({})", topic.name, request);
        self.notice = None;
        self.screen = Screen::Loading {
            request,
            topic: index,
        };
    }

    fn accept_load(&mut self, result: LoadResult) {
        let topic = match self.screen {
            Screen::Loading { request, topic } if request == result.id => topic,
            _ => {
                debug!("ignoring stale load result {}", result.id);
                return;
            }
        };
        let name = self
            .topics
            .get(topic)
            .map(|t| t.name.clone())
            .unwrap_or_default();

        let outcome = result.outcome.map_err(|e| e.to_string()).and_then(|dataset| {
            GameSession::from_dataset(&dataset, self.config.pairs, self.seeds.next_u32())
                .map_err(|e| format!("{}: {}", result.path.display(), e))
        });

        match outcome {
            Ok(session) => {
                info!("playing {}", name);
                self.screen = Screen::Playing(Box::new(Game {
                    session,
                    cursor: GridCursor::new(0, BOARD_COLUMNS),
                    topic: name,
                }));
                self.flush_effects();
            }
            Err(message) => {
                warn!("cannot start {}: {}", name, message);
                self.screen = Screen::TopicMenu;
                self.notice = Some(AppNotice::Error(message));
            }
        }
    }

    fn flush_effects(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        dispatch(&mut self.feedback, game.session.take_effects());
        if let Some(tiles) = self.feedback.take_dealt() {
            game.cursor = GridCursor::new(tiles, BOARD_COLUMNS);
        }
        self.feedback.take_dirty();
    }
}

