use yew::prelude::*;

use memory_game::{render, SymbolId, TileState, TileVisual};
use crate::icons;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: SymbolId,
    pub state: TileState,
    pub flip: Callback<()>,
}

/// Stateless face of one board cell
pub struct Tile;

impl Component for Tile {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let visual = render(&props.content, props.state);
        let class = visual.class();

        match visual {
            TileVisual::Back => {
                let onclick = props.flip.reform(|_: MouseEvent| ());
                html! { <div class={class} onclick={onclick}></div> }
            }
            TileVisual::Front(symbol) | TileVisual::Matched(symbol) => html! {
                <div class={class}>
                    <span
                        class="inline-flex w-full h-full items-center justify-center text-4xl align-top"
                        title={symbol.to_string()}
                    >
                        {icons::glyph(&symbol)}
                    </span>
                </div>
            },
        }
    }
}
