//! Window-independent host: owns the screen state machine and the screens themselves.
//!
//! The binary feeds it translated window events and asks it to render; tests drive it the same
//! way over an in-memory surface.

use std::sync::mpsc::{self, Receiver, Sender};

use engine::graphics::Renderer2d;
use engine::surface::SurfaceSize;

use crate::allocation::TaskOutcome;
use crate::catalog::AllocationCatalog;
use crate::error::Result;
use crate::events::{CustomCursor, GameState, HostEvent, ScreenEvent};
use crate::fonts::TaskFonts;
use crate::play::{PlayCommand, PlayScreen};
use crate::player_task::PlayerTask;
use crate::results::ResultLog;
use crate::settings::TaskSettings;
use crate::view::{GameView, GameViewEffect, GameViewEvent};
use crate::widgets::COLOR_BACKGROUND;

pub struct TaskHost {
    view: GameView,
    catalog: AllocationCatalog,
    fonts: TaskFonts,
    last_round: u32,
    screen: SurfaceSize,
    task: Option<PlayerTask>,
    play: PlayScreen,
    tx: Sender<HostEvent>,
    rx: Receiver<HostEvent>,
    results: Option<ResultLog>,
    outcomes: Vec<TaskOutcome>,
    cursor: CustomCursor,
    quit: bool,
}

impl TaskHost {
    pub fn new(
        catalog: AllocationCatalog,
        fonts: TaskFonts,
        start_round: u32,
        screen: SurfaceSize,
        results: Option<ResultLog>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let last_round = catalog.rounds().max(1);
        let round = start_round.clamp(1, last_round);
        if round != start_round {
            tracing::warn!(start_round, last_round, "start round outside the catalog, clamped");
        }
        let mut host = Self {
            view: GameView::PlayerTask { round },
            catalog,
            fonts,
            last_round,
            screen,
            task: None,
            play: PlayScreen::new(fonts, screen),
            tx,
            rx,
            results,
            outcomes: Vec::new(),
            cursor: CustomCursor::Arrow,
            quit: false,
        };
        host.task = Some(host.open_task(round));
        host
    }

    pub fn from_settings(settings: &TaskSettings) -> Result<Self> {
        let screen = SurfaceSize::new(settings.screen.width, settings.screen.height);
        Ok(Self::new(
            settings.catalog()?,
            settings.fonts.fonts(),
            settings.start_round,
            screen,
            settings.results_path.clone().map(ResultLog::new),
        ))
    }

    pub fn view(&self) -> GameView {
        self.view
    }

    pub fn task(&self) -> Option<&PlayerTask> {
        self.task.as_ref()
    }

    pub fn play(&self) -> &PlayScreen {
        &self.play
    }

    pub fn cursor(&self) -> CustomCursor {
        self.cursor
    }

    /// Allocations confirmed during this session, oldest first.
    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    /// Last round the loaded catalog provides.
    pub fn last_round(&self) -> u32 {
        self.last_round
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn open_task(&self, round: u32) -> PlayerTask {
        let tx = self.tx.clone();
        let switch_screen = Box::new(move |target: GameState| {
            if tx.send(HostEvent::SwitchScreen(target)).is_err() {
                tracing::warn!(?target, "screen switch dropped, host channel closed");
            }
        });
        PlayerTask::new(
            switch_screen,
            round,
            self.fonts,
            &self.catalog,
            self.tx.clone(),
            self.screen,
        )
    }

    /// Routes one input event to the current screen. Returns whether the screen consumed it.
    pub fn dispatch(&mut self, event: ScreenEvent) -> bool {
        let consumed = match self.view {
            GameView::PlayerTask { .. } => match self.task.as_mut() {
                Some(task) => {
                    let consumed = task.handle_event(&event);
                    if matches!(event, ScreenEvent::PointerMoved { .. }) {
                        task.mouse_hover();
                    }
                    consumed
                }
                None => false,
            },
            GameView::Play { .. } => match self.play.handle_event(&event) {
                Some(PlayCommand::NextRound) => {
                    self.apply(GameViewEvent::NextRound);
                    true
                }
                Some(PlayCommand::Quit) => {
                    tracing::info!("quit requested");
                    self.quit = true;
                    true
                }
                None => false,
            },
        };
        self.drain_host_events();
        consumed
    }

    fn drain_host_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                HostEvent::SetCursor(cursor) => self.cursor = cursor,
                HostEvent::SwitchScreen(target) => self.apply(GameViewEvent::Switch(target)),
            }
        }
    }

    fn apply(&mut self, event: GameViewEvent) {
        let (next, effect) = self.view.handle(event, self.last_round);
        if next != self.view {
            tracing::info!(from = ?self.view, to = ?next, "view switched");
        }
        self.view = next;

        match effect {
            GameViewEffect::None => {}
            GameViewEffect::CloseTask => {
                let outcome = self.task.take().map(|task| task.outcome());
                if let Some(outcome) = &outcome {
                    self.record(outcome.clone());
                }
                self.play.show_round(next.round(), outcome);
                self.cursor = CustomCursor::Arrow;
            }
            GameViewEffect::OpenTask { round } => {
                self.task = Some(self.open_task(round));
            }
        }
    }

    fn record(&mut self, outcome: TaskOutcome) {
        if let Some(log) = &self.results {
            match log.append(&outcome) {
                Ok(()) => tracing::debug!(path = %log.path().display(), "outcome recorded"),
                Err(err) => {
                    tracing::error!(%err, path = %log.path().display(), "failed to record outcome")
                }
            }
        }
        self.outcomes.push(outcome);
    }

    pub fn render(&mut self, gfx: &mut dyn Renderer2d) {
        self.screen = gfx.size();
        gfx.clear(COLOR_BACKGROUND);
        match self.view {
            GameView::PlayerTask { .. } => {
                if let Some(task) = self.task.as_mut() {
                    task.draw(gfx);
                }
            }
            GameView::Play { .. } => self.play.draw(gfx),
        }
    }
}
