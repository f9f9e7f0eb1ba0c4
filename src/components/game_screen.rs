use yew::prelude::*;

use super::coin_badge::CoinBadge;
use super::piece_view::PieceView;
use crate::model::{PlacementState, Point, Rect};
use crate::state::{Drag, PuzzleSession, TargetBounds};

const CELL_PX: u32 = 120;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStart {
    pub piece_id: usize,
    pub pointer: Point,
    pub rest_rect: Rect,
}

fn element_rect(id: &str) -> Option<Rect> {
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

fn drop_zone_id(cell_id: usize) -> String {
    format!("drop-zone-{}", cell_id)
}

/// The tray slot never carries a transform, so its box is the piece's resting box
/// even while the piece is still sliding back from a rejected drop.
fn slot_id(piece_id: usize) -> String {
    format!("slot-{}", piece_id)
}

fn measure_targets(count: usize) -> Vec<TargetBounds> {
    (0..count)
        .filter_map(|cell_id| element_rect(&drop_zone_id(cell_id)).map(|rect| TargetBounds { cell_id, rect }))
        .collect()
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn touch_point(e: &TouchEvent) -> Option<Point> {
    let t = e.touches().item(0)?;
    Some(Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// A touch drag ends only when the last finger lifts.
fn touch_released(remaining: u32) -> bool {
    remaining == 0
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameScreenProps {
    pub session: PuzzleSession,
    pub theme_name: AttrValue,
    pub coins: u64,
    pub drag: Option<Drag>,
    pub highlight: Option<usize>,
    pub on_drag_start: Callback<DragStart>,
    pub on_drag_move: Callback<(Point, Vec<TargetBounds>)>,
    pub on_drag_end: Callback<Vec<TargetBounds>>,
    pub on_drag_cancel: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component]
pub fn GameScreen(props: &GameScreenProps) -> Html {
    let session = &props.session;
    let settings = session.tier.settings();
    let count = session.piece_count();
    let glyph = AttrValue::from(session.picture.glyph);
    let show_edges = count > 4;
    let dragging = props.drag.is_some();

    let begin = |piece_id: usize| {
        let on_drag_start = props.on_drag_start.clone();
        move |pointer: Point| {
            let Some(rest_rect) = element_rect(&slot_id(piece_id)) else { return };
            on_drag_start.emit(DragStart { piece_id, pointer, rest_rect });
        }
    };

    let onmousemove = {
        let cb = props.on_drag_move.clone();
        Callback::from(move |e: MouseEvent| {
            if dragging {
                cb.emit((mouse_point(&e), measure_targets(count)));
            }
        })
    };
    let ontouchmove = {
        let cb = props.on_drag_move.clone();
        Callback::from(move |e: TouchEvent| {
            if !dragging {
                return;
            }
            e.prevent_default();
            if let Some(p) = touch_point(&e) {
                cb.emit((p, measure_targets(count)));
            }
        })
    };
    let onmouseup = {
        let cb = props.on_drag_end.clone();
        Callback::from(move |_: MouseEvent| {
            if dragging {
                cb.emit(measure_targets(count));
            }
        })
    };
    let ontouchend = {
        let cb = props.on_drag_end.clone();
        Callback::from(move |e: TouchEvent| {
            // Suppresses the compatibility mousedown/mouseup pair after a tap.
            e.prevent_default();
            if dragging && touch_released(e.touches().length()) {
                cb.emit(measure_targets(count));
            }
        })
    };
    let ontouchcancel = {
        let cb = props.on_drag_cancel.clone();
        Callback::from(move |e: TouchEvent| {
            e.prevent_default();
            cb.emit(())
        })
    };
    let back_btn = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let targets: Html = session
        .targets()
        .iter()
        .map(|target| {
            let highlighted = props.highlight == Some(target.cell_id);
            let border = if highlighted { "3px solid #ffd93d" } else { "3px dashed rgba(255,255,255,0.6)" };
            let inner = match session.piece(target.cell_id) {
                Some(piece) if target.occupied => html! {
                    <PieceView piece={piece.clone()} glyph={glyph.clone()} show_edges={show_edges} />
                },
                _ if settings.show_guide => html! {
                    <div style="width:100%; height:100%; display:flex; align-items:center; justify-content:center; font-size:48px; opacity:0.3;">{ glyph.clone() }</div>
                },
                _ => html! {},
            };
            html! {
                <div
                    id={drop_zone_id(target.cell_id)}
                    style={format!("width:{0}px; height:{0}px; border:{1}; border-radius:15px; box-sizing:border-box; background:rgba(255,255,255,0.15);", CELL_PX, border)}
                >
                    { inner }
                </div>
            }
        })
        .collect();

    let tray: Html = session
        .tray_order()
        .iter()
        .filter_map(|&piece_id| session.piece(piece_id).map(|p| (piece_id, p)))
        .map(|(piece_id, piece)| {
            let slot_style = format!("width:{0}px; height:{0}px;", CELL_PX);
            if session.placement_of(piece_id) == Some(PlacementState::Placed) {
                return html! { <div key={piece_id} id={slot_id(piece_id)} style={slot_style}></div> };
            }
            let active = props.drag.filter(|d| d.piece_id == piece_id);
            let offset = active.map(|d| d.live_offset).unwrap_or_default();
            let onmousedown = {
                let begin = begin(piece_id);
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    begin(mouse_point(&e));
                })
            };
            let ontouchstart = {
                let begin = begin(piece_id);
                Callback::from(move |e: TouchEvent| {
                    e.prevent_default();
                    if let Some(p) = touch_point(&e) {
                        begin(p);
                    }
                })
            };
            html! {
                <div key={piece_id} id={slot_id(piece_id)} style={slot_style}>
                    <PieceView
                        piece={piece.clone()}
                        glyph={glyph.clone()}
                        show_edges={show_edges}
                        offset={offset}
                        dragging={active.is_some()}
                        onmousedown={Some(onmousedown)}
                        ontouchstart={Some(ontouchstart)}
                    />
                </div>
            }
        })
        .collect();

    html! {
        <div
            style="position:relative; min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:20px; padding:16px; box-sizing:border-box; touch-action:none;"
            onmousemove={onmousemove}
            onmouseup={onmouseup}
            ontouchmove={ontouchmove}
            ontouchend={ontouchend}
            ontouchcancel={ontouchcancel}
        >
            <div style="width:100%; display:flex; align-items:center; justify-content:space-between;">
                <button onclick={back_btn}>{"← もどる"}</button>
                <h2 style="margin:0;">{ format!("{} - {}", props.theme_name, session.picture.name) }</h2>
                <CoinBadge coins={props.coins} />
            </div>
            <div style={format!("display:grid; grid-template-columns:repeat({}, {}px); grid-template-rows:repeat({}, {}px); gap:4px;", settings.cols, CELL_PX, settings.rows, CELL_PX)}>
                { targets }
            </div>
            <div style="display:flex; flex-wrap:wrap; justify-content:center; gap:12px; max-width:720px;">
                { tray }
            </div>
            <div style="font-size:14px; opacity:0.7;">{ format!("{} / {}", session.placed_count(), count) }</div>
        </div>
    }
}
