use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use memory_game::{FlipOutcome, GameConfig, ResolveTicket, Resolution, Session};
use crate::effects;
use crate::tile::Tile;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<GameConfig>,
    pub end: Callback<()>,
}

pub enum Msg {
    Flip(usize),
    Resolve(ResolveTicket),
    Finish(u64),
    Reset,
}

pub struct PlayScreen {
    session: Session,
    rng: StdRng,
    // Dropping a Timeout cancels it, so replacing or clearing this is enough
    // to forget about work scheduled for a discarded board.
    pending: Option<Timeout>,
    error: Option<String>,
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Component for PlayScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = u64::from_be_bytes(js_sys::Math::random().to_be_bytes());
        let mut screen = Self {
            session: Session::new(ctx.props().config.resolve_delay()),
            rng: StdRng::seed_from_u64(seed),
            pending: None,
            error: None,
        };
        screen.ensure_board(ctx);
        screen
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Flip(index) => match self.session.flip(index) {
                Ok(FlipOutcome::Ignored) => false,
                Ok(FlipOutcome::Revealed) => true,
                Ok(FlipOutcome::Compared { matched, ticket }) => {
                    if matched {
                        effects::celebrate(ctx.props().config.celebrate_ticks);
                    }
                    let link = ctx.link().clone();
                    self.pending = Some(Timeout::new(millis(ticket.delay()), move || {
                        link.send_message(Msg::Resolve(ticket));
                    }));
                    true
                }
                Err(e) => {
                    error!("flip {} failed: {}", index, e);
                    false
                }
            },
            Msg::Resolve(ticket) => {
                self.pending = None;
                match self.session.resolve(ticket) {
                    Resolution::Stale => {
                        warn!("dropping resolution for a discarded board");
                        false
                    }
                    Resolution::Settled => true,
                    Resolution::Completed => {
                        let generation = self.session.generation();
                        let link = ctx.link().clone();
                        let delay = millis(ctx.props().config.end_delay());
                        self.pending = Some(Timeout::new(delay, move || {
                            link.send_message(Msg::Finish(generation));
                        }));
                        true
                    }
                }
            }
            Msg::Finish(generation) => {
                if self.session.is_current(generation) {
                    ctx.props().end.emit(());
                } else {
                    warn!("game {} ended after a reset, ignoring", generation);
                }
                false
            }
            Msg::Reset => {
                self.pending = None;
                self.session.reset();
                self.ensure_board(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onreset = ctx.link().callback(|_| Msg::Reset);

        html! {
            <div class="h-screen bg-purple-100 animate__animated animate__fadeIn">
                <div class="flex p-4 justify-between">
                    <button
                        class="bg-purple-400 rounded-md text-white font-semibold text-lg px-3 hover:bg-purple-500"
                        onclick={onreset}
                    >
                        {"Reset"}
                    </button>
                    <div class="flex gap-3 animate__animated animate__zoomInDown">
                        { Self::render_counter("Tries", self.session.try_count()) }
                        { Self::render_counter("Matches made", self.session.matches_made()) }
                    </div>
                </div>

                if let Some(error) = &self.error {
                    <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative m-4">
                        {error}
                    </div>
                }

                <div class={classes!(
                    "grid", format!("grid-cols-{}", GameConfig::COLUMNS), "bg-pink-100", "rounded-lg",
                    "m-auto", "gap-2", "p-4", "justify-items-center", "max-w-96", "mt-16",
                    "animate__animated", "animate__zoomIn"
                )}>
                    { self.render_tiles(ctx) }
                </div>
            </div>
        }
    }
}

impl PlayScreen {
    fn ensure_board(&mut self, ctx: &Context<Self>) {
        let config = &ctx.props().config;
        match self
            .session
            .board_or_generate(GameConfig::TILE_COUNT, &config.palette, &mut self.rng)
        {
            Ok(board) => {
                info!("dealt {} tiles", board.len());
                self.error = None;
            }
            Err(e) => {
                error!("could not deal a board: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn render_counter(label: &str, value: u32) -> Html {
        html! {
            <h1 class="flex gap-2 font-medium text-purple-500 justify-center text-xl border-2 rounded-md border-white pl-2">
                {label}
                <p class="px-3 font-bold text-xl text-purple-500 border-l-2 border-white">
                    {value}
                </p>
            </h1>
        }
    }

    fn render_tiles(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.session.board() else {
            return Html::default();
        };

        board
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let flip = ctx.link().callback(move |_| Msg::Flip(index));
                html! {
                    <Tile key={index} content={tile.content.clone()} state={tile.state} flip={flip} />
                }
            })
            .collect::<Html>()
    }
}
