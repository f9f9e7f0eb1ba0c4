use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CoinBadgeProps {
    pub coins: u64,
}

#[function_component]
pub fn CoinBadge(props: &CoinBadgeProps) -> Html {
    let icon_style = "width:24px; text-align:center; flex-shrink:0;";
    let value_style = "min-width:40px; text-align:right; font-variant-numeric:tabular-nums; font-weight:700;";
    html! {
        <div style="display:flex; align-items:center; gap:8px; background:rgba(255,255,255,0.9); color:#b8860b; border-radius:20px; padding:6px 14px; font-size:20px; box-shadow:0 2px 6px rgba(0,0,0,0.15);">
            <span style={icon_style}>{"🪙"}</span>
            <span style={value_style}>{ props.coins }</span>
        </div>
    }
}
