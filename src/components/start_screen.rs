use yew::prelude::*;

use super::coin_badge::CoinBadge;
use crate::model::DifficultyTier;

#[derive(Properties, PartialEq, Clone)]
pub struct StartScreenProps {
    pub coins: u64,
    pub on_tier: Callback<DifficultyTier>,
    pub open_settings: Callback<()>,
}

#[function_component]
pub fn StartScreen(props: &StartScreenProps) -> Html {
    let settings_btn = {
        let cb = props.open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buttons: Html = DifficultyTier::ALL
        .iter()
        .map(|&tier| {
            let cb = props.on_tier.clone();
            let onclick = Callback::from(move |_| cb.emit(tier));
            let s = tier.settings();
            html! {
                <button {onclick} style="font-size:28px; padding:18px 28px; border-radius:20px; min-width:140px;">
                    <div>{ format!("{}さい", tier.age()) }</div>
                    <div style="font-size:14px; opacity:0.7;">{ format!("{}ピース", s.pieces) }</div>
                </button>
            }
        })
        .collect();
    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px;">
            <div style="position:absolute; top:16px; right:16px; display:flex; gap:12px; align-items:center;">
                <CoinBadge coins={props.coins} />
                <button onclick={settings_btn}>{"⚙"}</button>
            </div>
            <h1 style="margin:0; font-size:40px;">{"🧩 パズルであそぼう"}</h1>
            <p style="margin:0; font-size:20px;">{"なんさいかな？"}</p>
            <div style="display:flex; flex-wrap:wrap; gap:16px; justify-content:center;">
                { buttons }
            </div>
        </div>
    }
}
