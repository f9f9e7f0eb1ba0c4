use yew::prelude::*;

use super::coin_badge::CoinBadge;
use crate::session::REWARD_COINS;

#[derive(Properties, PartialEq, Clone)]
pub struct CompleteOverlayProps {
    pub glyph: AttrValue,
    pub picture_name: AttrValue,
    pub coins: u64,
    pub next_puzzle: Callback<()>,
    pub back_to_themes: Callback<()>,
}

#[function_component]
pub fn CompleteOverlay(props: &CompleteOverlayProps) -> Html {
    let next_btn = {
        let cb = props.next_puzzle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let themes_btn = {
        let cb = props.back_to_themes.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(255,255,255,0.95); color:#333; padding:28px 36px; border-radius:24px; text-align:center; min-width:320px; box-shadow:0 8px 24px rgba(0,0,0,0.25);">
                <h2 style="margin:0 0 12px 0; font-size:32px; color:#ff6b6b;">{"できたね！"}</h2>
                <div style="font-size:150px; line-height:1.1;">{ props.glyph.clone() }</div>
                <p style="margin:4px 0; font-size:22px;">{ props.picture_name.clone() }</p>
                <p style="margin:8px 0; font-size:20px; color:#b8860b;">{ format!("+{} 🪙", REWARD_COINS) }</p>
                <div style="display:flex; justify-content:center; margin:8px 0;">
                    <CoinBadge coins={props.coins} />
                </div>
                <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                    <button onclick={next_btn}>{"つぎのパズル"}</button>
                    <button onclick={themes_btn}>{"テーマをえらぶ"}</button>
                </div>
            </div>
        </div>
    }
}
