use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub sound_enabled: bool,
    pub on_toggle_sound: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sound_cb = {
        let cb = props.on_toggle_sound.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#fff; color:#333; border-radius:16px; padding:16px 20px; min-width:280px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"せってい"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"×"}</button>
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={props.sound_enabled} onclick={toggle_sound_cb} />
                <span>{"おと 🔊"}</span>
            </label>
            <button onclick={close_cb}>{"OK"}</button>
        </div>
    </div>}
}
