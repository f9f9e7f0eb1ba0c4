use yew::prelude::*;

use crate::model::{EdgeKind, EdgeShape, Piece, Point};

const GRADIENTS: [&str; 12] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #30cfd0 0%, #330867 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
    "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #ff6e7f 0%, #bfe9ff 100%)",
    "linear-gradient(135deg, #e0c3fc 0%, #8ec5fc 100%)",
    "linear-gradient(135deg, #f8b195 0%, #c06c84 100%)",
];

pub fn gradient_for(piece_id: usize) -> &'static str {
    GRADIENTS[piece_id % GRADIENTS.len()]
}

fn edge_fill(kind: EdgeKind) -> Option<&'static str> {
    match kind {
        EdgeKind::Flat => None,
        EdgeKind::TabOut => Some("radial-gradient(circle at center, rgba(255,255,255,0.45) 30%, transparent 70%)"),
        EdgeKind::TabIn => Some("radial-gradient(circle at center, rgba(0,0,0,0.18) 30%, transparent 70%)"),
    }
}

fn edge_marks(edges: &EdgeShape) -> Html {
    // top, right, bottom, left
    let spots = [
        "top:-10px; left:40%; width:20%; height:20px;",
        "right:-10px; top:40%; width:20px; height:20%;",
        "bottom:-10px; left:40%; width:20%; height:20px;",
        "left:-10px; top:40%; width:20px; height:20%;",
    ];
    edges
        .edges()
        .iter()
        .zip(spots)
        .filter_map(|(kind, spot)| {
            edge_fill(*kind).map(|fill| {
                html! { <div style={format!("position:absolute; {} background:{}; border-radius:50%; pointer-events:none;", spot, fill)}></div> }
            })
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct PieceViewProps {
    pub piece: Piece,
    pub glyph: AttrValue,
    /// Decorative tab marks; only drawn on the bigger puzzles.
    pub show_edges: bool,
    #[prop_or_default]
    pub offset: Point,
    #[prop_or_default]
    pub dragging: bool,
    #[prop_or_default]
    pub onmousedown: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub ontouchstart: Option<Callback<TouchEvent>>,
}

#[function_component]
pub fn PieceView(props: &PieceViewProps) -> Html {
    let movable = props.onmousedown.is_some() || props.ontouchstart.is_some();
    let cursor = if props.dragging { "grabbing" } else if movable { "grab" } else { "default" };
    let style = format!(
        "position:relative; width:100%; height:100%; transform:translate({}px, {}px); {} cursor:{}; touch-action:none; user-select:none;",
        props.offset.x,
        props.offset.y,
        if props.dragging { "z-index:100; transition:none;" } else { "z-index:1; transition:transform 0.2s;" },
        cursor
    );
    let face = format!(
        "width:100%; height:100%; background:{}; border-radius:15px; display:flex; align-items:center; justify-content:center; font-size:56px; position:relative; box-shadow:0 4px 8px rgba(0,0,0,0.2), inset 0 2px 4px rgba(255,255,255,0.5), inset 0 -2px 4px rgba(0,0,0,0.1); border:2px solid rgba(255,255,255,0.3); box-sizing:border-box;",
        gradient_for(props.piece.id)
    );
    html! {
        <div
            id={format!("piece-{}", props.piece.id)}
            style={style}
            onmousedown={props.onmousedown.clone()}
            ontouchstart={props.ontouchstart.clone()}
        >
            <div style={face}>
                <span style="position:relative; z-index:1; pointer-events:none;">{ props.glyph.clone() }</span>
                if props.show_edges { { edge_marks(&props.piece.edges) } }
            </div>
        </div>
    }
}
