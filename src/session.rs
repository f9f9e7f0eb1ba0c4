//! Session controller: tier/theme selection, rounds, drag handling and the coin reward.
//!
//! All state lives in one [`GameState`] value owned by the controller. Collaborators
//! (screen navigation, audio, coin persistence) are injected so the whole flow runs
//! natively in tests.

use thiserror::Error;

use crate::catalog;
use crate::host::{AudioFeedback, CoinStore, Screen, ScreenNavigator, Sound};
use crate::model::{DifficultyTier, Point, Rect, Theme};
use crate::state::{
    build_puzzle, candidate, generate_layout, resolve_drop, Drag, DropDecision, PuzzleRng,
    PuzzleSession, TargetBounds,
};
use crate::util::{clog, cwarn};

pub const REWARD_COINS: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TierSelected,
    ThemeSelected,
    InProgress,
    Complete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{op} is not valid while {phase:?}")]
    InvalidTransition { op: &'static str, phase: Phase },

    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reward {
    pub awarded: u64,
    pub balance: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropOutcome {
    pub decision: DropDecision,
    /// Set on the placement that completed the round.
    pub reward: Option<Reward>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,
    pub tier: Option<DifficultyTier>,
    pub theme: Option<&'static Theme>,
    pub session: Option<PuzzleSession>,
    pub drag: Option<Drag>,
    pub coins: u64,
}

pub struct SessionController<N, A, S> {
    navigator: N,
    audio: A,
    store: S,
    rng: PuzzleRng,
    state: GameState,
}

impl<N, A, S> SessionController<N, A, S>
where
    N: ScreenNavigator,
    A: AudioFeedback,
    S: CoinStore,
{
    pub fn new(seed: u64, mut navigator: N, audio: A, store: S) -> Self {
        let coins = store.load().unwrap_or(0);
        navigator.show(Screen::Start);
        Self {
            navigator,
            audio,
            store,
            rng: PuzzleRng::new(seed),
            state: GameState {
                phase: Phase::Idle,
                tier: None,
                theme: None,
                session: None,
                drag: None,
                coins,
            },
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn coins(&self) -> u64 {
        self.state.coins
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        self.state.session.as_ref()
    }

    pub fn active_drag(&self) -> Option<&Drag> {
        self.state.drag.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    #[cfg(test)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn invalid(&self, op: &'static str) -> SessionError {
        let err = SessionError::InvalidTransition { op, phase: self.state.phase };
        cwarn(&err.to_string());
        err
    }

    pub fn select_tier(&mut self, tier: DifficultyTier) -> Result<(), SessionError> {
        match self.state.phase {
            Phase::Idle | Phase::TierSelected | Phase::ThemeSelected => {}
            _ => return Err(self.invalid("select_tier")),
        }
        self.state.tier = Some(tier);
        self.state.theme = None;
        self.state.phase = Phase::TierSelected;
        self.navigator.show(Screen::ThemeSelect);
        self.audio.play(Sound::Click);
        Ok(())
    }

    pub fn select_theme(&mut self, theme_id: &str) -> Result<(), SessionError> {
        match self.state.phase {
            Phase::TierSelected | Phase::ThemeSelected => {}
            _ => return Err(self.invalid("select_theme")),
        }
        let theme = catalog::theme(theme_id)
            .ok_or_else(|| SessionError::UnknownTheme(theme_id.to_string()))?;
        self.state.theme = Some(theme);
        self.state.phase = Phase::ThemeSelected;
        self.navigator.show(Screen::Game);
        self.start_round()?;
        self.audio.play(Sound::Click);
        Ok(())
    }

    /// Picks a picture at random from the selected theme and deals a fresh puzzle.
    pub fn start_round(&mut self) -> Result<(), SessionError> {
        let (Some(tier), Some(theme)) = (self.state.tier, self.state.theme) else {
            return Err(self.invalid("start_round"));
        };
        if theme.pictures.is_empty() {
            return Err(SessionError::UnknownTheme(theme.id.to_string()));
        }
        let mut round_rng = self.rng.fork();
        let picture = theme.pictures[round_rng.next_index(theme.pictures.len())];
        let layout = generate_layout(tier, &mut round_rng);
        let session = build_puzzle(tier, picture, layout, &mut round_rng);
        clog(&format!(
            "round start: tier={} theme={} picture={} pieces={}",
            tier.age(),
            theme.id,
            picture.id,
            session.piece_count()
        ));
        self.state.session = Some(session);
        self.state.drag = None;
        self.state.phase = Phase::InProgress;
        Ok(())
    }

    pub fn request_next_round(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Complete {
            return Err(self.invalid("request_next_round"));
        }
        self.navigator.show(Screen::Game);
        self.start_round()
    }

    pub fn return_to_themes(&mut self) -> Result<(), SessionError> {
        if self.state.phase != Phase::Complete {
            return Err(self.invalid("return_to_themes"));
        }
        self.state.session = None;
        self.state.phase = Phase::ThemeSelected;
        self.navigator.show(Screen::ThemeSelect);
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<(), SessionError> {
        match self.state.phase {
            Phase::InProgress => {
                // Abandoned round: no reward, nothing persisted.
                self.state.session = None;
                self.state.drag = None;
                self.state.phase = Phase::ThemeSelected;
                self.navigator.show(Screen::ThemeSelect);
            }
            Phase::ThemeSelected => {
                self.state.theme = None;
                self.state.phase = Phase::TierSelected;
                self.navigator.show(Screen::Start);
            }
            Phase::TierSelected => {
                self.state.tier = None;
                self.state.phase = Phase::Idle;
                self.navigator.show(Screen::Start);
            }
            Phase::Idle | Phase::Complete => return Err(self.invalid("go_back")),
        }
        self.audio.play(Sound::Click);
        Ok(())
    }

    /// Starts dragging `piece_id`. Ignored (returns false) outside a round, while another
    /// drag is active, or for placed/unknown pieces.
    pub fn begin_drag(&mut self, piece_id: usize, pointer: Point, rest_rect: Rect) -> bool {
        if self.state.phase != Phase::InProgress || self.state.drag.is_some() {
            return false;
        }
        let Some(session) = self.state.session.as_ref() else { return false };
        self.state.drag = Drag::begin(session, piece_id, pointer, rest_rect);
        self.state.drag.is_some()
    }

    /// Moves the active drag and returns the highlighted drop target, if any.
    pub fn drag_move(&mut self, pointer: Point, targets: &[TargetBounds]) -> Option<usize> {
        let drag = self.state.drag.as_mut()?;
        *drag = drag.moved(pointer);
        let session = self.state.session.as_ref()?;
        candidate(drag, session, targets)
    }

    /// Drops the active piece. On acceptance the piece is placed and completion is checked
    /// before returning; on rejection the piece goes back to its resting offset.
    pub fn end_drag(&mut self, targets: &[TargetBounds]) -> Option<DropOutcome> {
        let drag = self.state.drag.take()?;
        let session = self.state.session.as_mut()?;
        let decision = resolve_drop(&drag, session, targets);
        match decision {
            DropDecision::Accept { piece_id, cell_id } => {
                if !session.place(piece_id, cell_id) {
                    return None;
                }
                self.audio.play(Sound::Accepted);
                let reward = if session.is_complete() { Some(self.complete_round()) } else { None };
                Some(DropOutcome { decision, reward })
            }
            DropDecision::Reject { .. } => {
                self.audio.play(Sound::Rejected);
                Some(DropOutcome { decision, reward: None })
            }
        }
    }

    /// Drops the active drag without a decision (e.g. `touchcancel`).
    pub fn cancel_drag(&mut self) {
        self.state.drag = None;
    }

    fn complete_round(&mut self) -> Reward {
        self.state.phase = Phase::Complete;
        self.state.coins = self.state.coins.saturating_add(REWARD_COINS);
        if let Err(e) = self.store.save(self.state.coins) {
            cwarn(&format!("failed to persist coin balance: {}", e));
        }
        self.navigator.show(Screen::Complete);
        self.audio.play(Sound::SessionComplete);
        Reward { awarded: REWARD_COINS, balance: self.state.coins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StoreError;

    #[derive(Default)]
    struct Nav(Vec<Screen>);
    impl ScreenNavigator for Nav {
        fn show(&mut self, screen: Screen) {
            self.0.push(screen);
        }
    }

    #[derive(Default)]
    struct Speaker(Vec<Sound>);
    impl AudioFeedback for Speaker {
        fn play(&mut self, sound: Sound) {
            self.0.push(sound);
        }
    }

    #[derive(Default)]
    struct MemStore {
        coins: Option<u64>,
        saves: Vec<u64>,
        fail: bool,
    }
    impl CoinStore for MemStore {
        fn load(&self) -> Option<u64> {
            self.coins
        }
        fn save(&mut self, coins: u64) -> Result<(), StoreError> {
            self.saves.push(coins);
            if self.fail {
                return Err(StoreError::Unavailable);
            }
            self.coins = Some(coins);
            Ok(())
        }
    }

    type Controller = SessionController<Nav, Speaker, MemStore>;

    fn controller() -> Controller {
        SessionController::new(1234, Nav::default(), Speaker::default(), MemStore::default())
    }

    fn in_round(tier: DifficultyTier) -> Controller {
        let mut c = controller();
        c.select_tier(tier).expect("tier");
        c.select_theme("animals").expect("theme");
        c
    }

    const CELL: f64 = 150.0;

    fn targets(cols: usize, count: usize) -> Vec<TargetBounds> {
        (0..count)
            .map(|cell_id| TargetBounds {
                cell_id,
                rect: Rect::new((cell_id % cols) as f64 * CELL, (cell_id / cols) as f64 * CELL, CELL, CELL),
            })
            .collect()
    }

    fn tray_rect() -> Rect {
        Rect::new(0.0, 600.0, CELL, CELL)
    }

    /// Drags `piece_id` from the tray and releases its center on `cell`'s center.
    fn drop_on(c: &mut Controller, piece_id: usize, cell: usize, cols: usize, count: usize) -> Option<DropOutcome> {
        let start = tray_rect().center();
        assert!(c.begin_drag(piece_id, start, tray_rect()));
        let bounds = targets(cols, count);
        let dest = bounds[cell].rect.center();
        c.drag_move(dest, &bounds);
        c.end_drag(&bounds)
    }

    #[test]
    fn loads_balance_from_store() {
        let store = MemStore { coins: Some(30), ..Default::default() };
        let c = SessionController::new(1, Nav::default(), Speaker::default(), store);
        assert_eq!(c.coins(), 30);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn reward_adds_to_loaded_balance() {
        let store = MemStore { coins: Some(30), ..Default::default() };
        let mut c = SessionController::new(5, Nav::default(), Speaker::default(), store);
        c.select_tier(DifficultyTier::Age3).expect("tier");
        c.select_theme("sea").expect("theme");
        let mut rewards = Vec::new();
        for piece in 0..4 {
            let out = drop_on(&mut c, piece, piece, 2, 4).expect("outcome");
            rewards.extend(out.reward);
        }
        assert_eq!(rewards, vec![Reward { awarded: 10, balance: 40 }]);
        assert_eq!(c.coins(), 40);
        assert_eq!(c.store().saves, vec![40]);
        assert_eq!(c.store().load(), Some(40));
    }

    #[test]
    fn selecting_tier_and_theme_starts_a_round() {
        let c = in_round(DifficultyTier::Age3);
        assert_eq!(c.phase(), Phase::InProgress);
        let s = c.session().expect("session");
        assert_eq!(s.piece_count(), 4);
        assert_eq!(s.placed_count(), 0);
        assert!(s.targets().iter().all(|t| !t.occupied));
        let animals = catalog::theme("animals").expect("animals");
        assert!(animals.pictures.contains(&s.picture));
        assert_eq!(c.navigator().0, vec![Screen::Start, Screen::ThemeSelect, Screen::Game]);
    }

    #[test]
    fn accepted_drop_places_piece() {
        let mut c = in_round(DifficultyTier::Age3);
        let out = drop_on(&mut c, 0, 0, 2, 4).expect("outcome");
        assert_eq!(out.decision, DropDecision::Accept { piece_id: 0, cell_id: 0 });
        assert_eq!(out.reward, None);
        let s = c.session().expect("session");
        assert_eq!(s.placed_count(), 1);
        assert!(s.targets()[0].occupied);
        assert_eq!(c.audio().0.last(), Some(&Sound::Accepted));
        assert!(c.active_drag().is_none());
    }

    #[test]
    fn wrong_cell_is_rejected_and_piece_stays_unplaced() {
        let mut c = in_round(DifficultyTier::Age3);
        let out = drop_on(&mut c, 0, 1, 2, 4).expect("outcome");
        assert_eq!(out.decision, DropDecision::Reject { piece_id: 0 });
        let s = c.session().expect("session");
        assert_eq!(s.placed_count(), 0);
        assert!(s.targets().iter().all(|t| !t.occupied));
        assert_eq!(c.audio().0.last(), Some(&Sound::Rejected));
        // Drag value is gone, so the view renders the piece at zero offset again.
        assert!(c.active_drag().is_none());
        assert!(c.begin_drag(0, Point::default(), tray_rect()));
        assert_eq!(c.active_drag().map(|d| d.live_offset), Some(Point::default()));
    }

    #[test]
    fn completing_round_rewards_once_and_persists() {
        let mut c = in_round(DifficultyTier::Age3);
        let mut rewards = Vec::new();
        for piece in [2, 0, 3, 1] {
            let out = drop_on(&mut c, piece, piece, 2, 4).expect("outcome");
            rewards.extend(out.reward);
        }
        assert_eq!(rewards, vec![Reward { awarded: 10, balance: 10 }]);
        assert_eq!(c.phase(), Phase::Complete);
        assert_eq!(c.coins(), 10);
        assert_eq!(c.store().saves, vec![10]);
        assert_eq!(c.navigator().0.last(), Some(&Screen::Complete));
        assert_eq!(c.audio().0.last(), Some(&Sound::SessionComplete));
        let completions = c.audio().0.iter().filter(|s| **s == Sound::SessionComplete).count();
        assert_eq!(completions, 1);
        // No further drags once complete.
        assert!(!c.begin_drag(0, Point::default(), tray_rect()));
    }

    #[test]
    fn persistence_failure_keeps_balance() {
        let store = MemStore { fail: true, ..Default::default() };
        let mut c = SessionController::new(9, Nav::default(), Speaker::default(), store);
        c.select_tier(DifficultyTier::Age3).expect("tier");
        c.select_theme("fruits").expect("theme");
        for piece in 0..4 {
            drop_on(&mut c, piece, piece, 2, 4);
        }
        assert_eq!(c.phase(), Phase::Complete);
        assert_eq!(c.coins(), 10);
        assert_eq!(c.store().saves, vec![10]);
    }

    #[test]
    fn placed_piece_cannot_be_dragged_again() {
        let mut c = in_round(DifficultyTier::Age4);
        drop_on(&mut c, 4, 4, 3, 6);
        assert!(!c.begin_drag(4, Point::default(), tray_rect()));
        assert_eq!(c.session().map(|s| s.placed_count()), Some(1));
    }

    #[test]
    fn only_one_drag_at_a_time() {
        let mut c = in_round(DifficultyTier::Age3);
        assert!(c.begin_drag(0, Point::default(), tray_rect()));
        assert!(!c.begin_drag(1, Point::default(), tray_rect()));
        assert_eq!(c.active_drag().map(|d| d.piece_id), Some(0));
        c.cancel_drag();
        assert!(c.begin_drag(1, Point::default(), tray_rect()));
    }

    #[test]
    fn drag_move_highlights_only_matching_target() {
        let mut c = in_round(DifficultyTier::Age3);
        let bounds = targets(2, 4);
        assert!(c.begin_drag(3, tray_rect().center(), tray_rect()));
        assert_eq!(c.drag_move(bounds[0].rect.center(), &bounds), None);
        assert_eq!(c.drag_move(bounds[3].rect.center(), &bounds), Some(3));
    }

    #[test]
    fn end_drag_without_drag_is_ignored() {
        let mut c = in_round(DifficultyTier::Age3);
        assert_eq!(c.end_drag(&targets(2, 4)), None);
        assert!(c.audio().0.iter().all(|s| *s == Sound::Click));
    }

    #[test]
    fn go_back_abandons_round_without_reward() {
        let mut c = in_round(DifficultyTier::Age5);
        drop_on(&mut c, 0, 0, 3, 9);
        c.go_back().expect("back");
        assert_eq!(c.phase(), Phase::ThemeSelected);
        assert!(c.session().is_none());
        assert_eq!(c.coins(), 0);
        assert!(c.store().saves.is_empty());
        assert_eq!(c.navigator().0.last(), Some(&Screen::ThemeSelect));
    }

    #[test]
    fn go_back_walks_to_start() {
        let mut c = in_round(DifficultyTier::Age3);
        c.go_back().expect("to themes");
        c.go_back().expect("drop theme");
        assert_eq!(c.phase(), Phase::TierSelected);
        assert_eq!(c.navigator().0.last(), Some(&Screen::Start));
        c.go_back().expect("drop tier");
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(
            c.go_back(),
            Err(SessionError::InvalidTransition { op: "go_back", phase: Phase::Idle })
        );
    }

    #[test]
    fn next_round_only_from_complete() {
        let mut c = in_round(DifficultyTier::Age3);
        assert_eq!(
            c.request_next_round(),
            Err(SessionError::InvalidTransition { op: "request_next_round", phase: Phase::InProgress })
        );
        for piece in 0..4 {
            drop_on(&mut c, piece, piece, 2, 4);
        }
        c.request_next_round().expect("next");
        assert_eq!(c.phase(), Phase::InProgress);
        let s = c.session().expect("session");
        assert_eq!(s.placed_count(), 0);
        assert_eq!(s.tier, DifficultyTier::Age3);
        assert_eq!(c.coins(), 10);
    }

    #[test]
    fn return_to_themes_from_complete() {
        let mut c = in_round(DifficultyTier::Age3);
        assert!(c.return_to_themes().is_err());
        for piece in 0..4 {
            drop_on(&mut c, piece, piece, 2, 4);
        }
        c.return_to_themes().expect("themes");
        assert_eq!(c.phase(), Phase::ThemeSelected);
        c.select_theme("sea").expect("sea");
        assert_eq!(c.phase(), Phase::InProgress);
    }

    #[test]
    fn invalid_selections_fail_loudly() {
        let mut c = controller();
        assert!(matches!(c.select_theme("animals"), Err(SessionError::InvalidTransition { .. })));
        c.select_tier(DifficultyTier::Age4).expect("tier");
        assert_eq!(c.select_theme("dinosaurs"), Err(SessionError::UnknownTheme("dinosaurs".into())));
        assert_eq!(c.phase(), Phase::TierSelected);
        c.select_theme("vehicles").expect("theme");
        assert!(matches!(c.select_tier(DifficultyTier::Age3), Err(SessionError::InvalidTransition { .. })));
    }

    #[test]
    fn rounds_deal_independent_layouts() {
        let mut c = in_round(DifficultyTier::Age6);
        let first = c.session().map(|s| (s.layout.clone(), s.tray_order().to_vec()));
        for piece in 0..12 {
            drop_on(&mut c, piece, piece, 4, 12);
        }
        assert_eq!(c.coins(), 10);
        c.request_next_round().expect("next");
        let second = c.session().map(|s| (s.layout.clone(), s.tray_order().to_vec()));
        assert_ne!(first, second);
    }
}
