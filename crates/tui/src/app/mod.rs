use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use engine::TransactionsList;

use crate::{
    client::{Client, ClientError, TransactionSource},
    config::AppConfig,
    error::{AppError, Result},
    ui,
};

/// What the screen tells the user when a fetch cannot be shown.
///
/// Mapped exactly once, at the boundary between the transaction source
/// and the list model. Malformed fields inside a successful fetch never
/// end up here; they degrade per field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListViewError {
    #[error("Something went wrong, please try again later.")]
    Unknown,
    #[error("No transactions found, please try again later.")]
    NoTransactions,
    #[error("No internet connection, please check your connection.")]
    Offline,
}

fn map_client_error(err: ClientError) -> ListViewError {
    match err {
        ClientError::Offline => ListViewError::Offline,
        ClientError::Server(_) | ClientError::Decode(_) | ClientError::Transport(_) => {
            ListViewError::Unknown
        }
    }
}

/// Where the screen's single in-flight fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Loading,
    Loaded,
    Failed(ListViewError),
}

#[derive(Debug)]
pub struct TransactionsState {
    pub phase: FetchPhase,
    pub list: TransactionsList,
    /// Index of the highlighted row group, across all sections.
    pub selected: usize,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            phase: FetchPhase::Loading,
            list: TransactionsList::default(),
            selected: 0,
        }
    }
}

impl TransactionsState {
    fn total_rows(&self) -> usize {
        (0..self.list.section_count())
            .filter_map(|section| self.list.row_count(section))
            .sum()
    }

    fn select_next(&mut self) {
        let total = self.total_rows();
        if total == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(total - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug)]
pub struct AppState {
    pub user_id: i64,
    pub transactions: TransactionsState,
}

pub struct App<S = Client> {
    source: S,
    pub state: AppState,
    should_quit: bool,
}

impl App<Client> {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        Ok(Self::with_source(config, client))
    }
}

impl<S: TransactionSource> App<S> {
    pub fn with_source(config: AppConfig, source: S) -> Self {
        Self {
            source,
            state: AppState {
                user_id: config.user_id,
                transactions: TransactionsState::default(),
            },
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        self.load_transactions().await;

        let tick_rate = Duration::from_millis(200);
        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::Refresh => {
                self.load_transactions().await;
            }
            ui::keymap::AppAction::Dismiss => {
                self.dismiss_error();
            }
            ui::keymap::AppAction::Up => {
                self.state.transactions.select_prev();
            }
            ui::keymap::AppAction::Down => {
                self.state.transactions.select_next();
            }
            ui::keymap::AppAction::None => {}
        }
    }

    /// Fetches and rebuilds the list model.
    ///
    /// The event loop awaits this to completion before reading the next
    /// key, so fetches are serialized: at most one request is in flight
    /// per screen, and a retry can only be issued after the previous
    /// attempt resolved.
    async fn load_transactions(&mut self) {
        self.state.transactions.phase = FetchPhase::Loading;
        tracing::info!(user_id = self.state.user_id, "fetching transactions");

        match self.source.fetch_transactions(self.state.user_id).await {
            Ok(records) if records.is_empty() => {
                tracing::info!("fetch returned an empty transaction list");
                self.state.transactions.list = TransactionsList::default();
                self.state.transactions.selected = 0;
                self.state.transactions.phase =
                    FetchPhase::Failed(ListViewError::NoTransactions);
            }
            Ok(records) => {
                tracing::info!(count = records.len(), "fetch succeeded");
                self.state.transactions.list = TransactionsList::new(records);
                self.state.transactions.selected = 0;
                self.state.transactions.phase = FetchPhase::Loaded;
            }
            Err(err) => {
                tracing::error!("fetch failed: {err:?}");
                self.state.transactions.phase = FetchPhase::Failed(map_client_error(err));
            }
        }
    }

    /// Dismissing the alert leaves whatever list is already on screen.
    fn dismiss_error(&mut self) {
        if matches!(self.state.transactions.phase, FetchPhase::Failed(_)) {
            self.state.transactions.phase = FetchPhase::Loaded;
        }
    }
}
