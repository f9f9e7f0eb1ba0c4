use yew::prelude::*;

use super::coin_badge::CoinBadge;
use crate::catalog;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeScreenProps {
    pub coins: u64,
    pub on_theme: Callback<&'static str>,
    pub on_back: Callback<()>,
}

#[function_component]
pub fn ThemeScreen(props: &ThemeScreenProps) -> Html {
    let back_btn = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cards: Html = catalog::list_themes()
        .iter()
        .map(|theme| {
            let cb = props.on_theme.clone();
            let id = theme.id;
            let onclick = Callback::from(move |_| cb.emit(id));
            html! {
                <div {onclick} style="cursor:pointer; background:rgba(255,255,255,0.9); color:#333; border-radius:20px; padding:20px; width:160px; text-align:center; box-shadow:0 4px 12px rgba(0,0,0,0.15);">
                    <div style="font-size:64px;">{ theme.icon }</div>
                    <div style="font-size:20px; font-weight:600;">{ theme.name }</div>
                </div>
            }
        })
        .collect();
    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:24px;">
            <div style="position:absolute; top:16px; left:16px; right:16px; display:flex; justify-content:space-between; align-items:center;">
                <button onclick={back_btn}>{"← もどる"}</button>
                <CoinBadge coins={props.coins} />
            </div>
            <h2 style="margin:0; font-size:32px;">{"テーマをえらんでね"}</h2>
            <div style="display:flex; flex-wrap:wrap; gap:16px; justify-content:center; max-width:760px;">
                { cards }
            </div>
        </div>
    }
}
