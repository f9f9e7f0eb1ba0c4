use yew::prelude::*;

use super::{
    complete_overlay::CompleteOverlay,
    game_screen::{DragStart, GameScreen},
    settings_modal::SettingsModal,
    start_screen::StartScreen,
    theme_screen::ThemeScreen,
};
use crate::audio::WebAudio;
use crate::host::{Screen, ScreenNavigator};
use crate::model::{DifficultyTier, Point};
use crate::session::{SessionController, SessionError};
use crate::state::TargetBounds;
use crate::storage::{self, LocalCoinStore};
use crate::util::{browser_seed, clog, cwarn};

/// Remembers the last screen the controller asked for; the app renders from it.
pub struct ViewNavigator {
    current: Screen,
}

impl ViewNavigator {
    pub fn current(&self) -> Screen {
        self.current
    }
}

impl ScreenNavigator for ViewNavigator {
    fn show(&mut self, screen: Screen) {
        self.current = screen;
    }
}

type Game = SessionController<ViewNavigator, WebAudio, LocalCoinStore>;

fn report(result: Result<(), SessionError>) {
    if let Err(e) = result {
        cwarn(&format!("session: {}", e));
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(storage::load_settings);
    let open_settings = use_state(|| false);
    let highlight = use_state(|| None::<usize>);
    let redraw = use_force_update();
    let game = {
        let sound = settings.sound_enabled;
        use_mut_ref(move || -> Game {
            SessionController::new(
                browser_seed(),
                ViewNavigator { current: Screen::Start },
                WebAudio::new(sound),
                LocalCoinStore,
            )
        })
    };

    // Persist settings & apply to audio
    {
        let game = game.clone();
        let current = (*settings).clone();
        use_effect_with(current.sound_enabled, move |_| {
            game.borrow_mut().audio_mut().set_enabled(current.sound_enabled);
            if let Err(e) = storage::save_settings(&current) {
                cwarn(&format!("failed to save settings: {}", e));
            }
            || ()
        });
    }

    let on_tier = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |tier: DifficultyTier| {
            report(game.borrow_mut().select_tier(tier));
            redraw.force_update();
        })
    };
    let on_theme = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |theme_id: &'static str| {
            report(game.borrow_mut().select_theme(theme_id));
            redraw.force_update();
        })
    };
    let on_back = {
        let game = game.clone();
        let redraw = redraw.clone();
        let highlight = highlight.clone();
        Callback::from(move |_| {
            report(game.borrow_mut().go_back());
            highlight.set(None);
            redraw.force_update();
        })
    };
    let on_next = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            report(game.borrow_mut().request_next_round());
            redraw.force_update();
        })
    };
    let on_themes = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            report(game.borrow_mut().return_to_themes());
            redraw.force_update();
        })
    };
    let on_drag_start = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |start: DragStart| {
            if game.borrow_mut().begin_drag(start.piece_id, start.pointer, start.rest_rect) {
                redraw.force_update();
            }
        })
    };
    let on_drag_move = {
        let game = game.clone();
        let highlight = highlight.clone();
        let redraw = redraw.clone();
        Callback::from(move |(pointer, targets): (Point, Vec<TargetBounds>)| {
            let candidate = game.borrow_mut().drag_move(pointer, &targets);
            if *highlight != candidate {
                highlight.set(candidate);
            }
            redraw.force_update();
        })
    };
    let on_drag_end = {
        let game = game.clone();
        let highlight = highlight.clone();
        let redraw = redraw.clone();
        Callback::from(move |targets: Vec<TargetBounds>| {
            let outcome = game.borrow_mut().end_drag(&targets);
            if let Some(reward) = outcome.and_then(|o| o.reward) {
                clog(&format!("puzzle complete: +{} coins, balance {}", reward.awarded, reward.balance));
            }
            highlight.set(None);
            redraw.force_update();
        })
    };
    let on_drag_cancel = {
        let game = game.clone();
        let highlight = highlight.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            game.borrow_mut().cancel_drag();
            highlight.set(None);
            redraw.force_update();
        })
    };
    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(!*open_settings))
    };
    let toggle_sound = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let mut next = (*settings).clone();
            next.sound_enabled = !next.sound_enabled;
            settings.set(next);
        })
    };

    let g = game.borrow();
    let coins = g.coins();
    let content = match g.navigator().current() {
        Screen::Start => html! {
            <StartScreen coins={coins} on_tier={on_tier} open_settings={toggle_settings.clone()} />
        },
        Screen::ThemeSelect => html! {
            <ThemeScreen coins={coins} on_theme={on_theme} on_back={on_back} />
        },
        Screen::Game => match (g.session(), g.state().theme) {
            (Some(session), Some(theme)) => html! {
                <GameScreen
                    session={session.clone()}
                    theme_name={theme.name}
                    coins={coins}
                    drag={g.active_drag().copied()}
                    highlight={*highlight}
                    on_drag_start={on_drag_start}
                    on_drag_move={on_drag_move}
                    on_drag_end={on_drag_end}
                    on_drag_cancel={on_drag_cancel}
                    on_back={on_back}
                />
            },
            _ => html! {},
        },
        Screen::Complete => match g.session() {
            Some(session) => html! {
                <CompleteOverlay
                    glyph={session.picture.glyph}
                    picture_name={session.picture.name}
                    coins={coins}
                    next_puzzle={on_next}
                    back_to_themes={on_themes}
                />
            },
            None => html! {},
        },
    };

    html! {
        <div id="root" style="min-height:100vh; background:linear-gradient(135deg, #a1c4fd 0%, #c2e9fb 100%); color:#333; font-family:sans-serif;">
            { content }
            <SettingsModal
                show={*open_settings}
                on_close={toggle_settings}
                sound_enabled={settings.sound_enabled}
                on_toggle_sound={toggle_sound}
            />
        </div>
    }
}
