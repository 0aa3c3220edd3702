use std::rc::Rc;

use log::info;
use yew::prelude::*;

use memory_game::GameConfig;
use crate::play::PlayScreen;
use crate::start::StartScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Play,
}

pub enum Msg {
    Start,
    End,
}

pub struct App {
    screen: Screen,
    config: Rc<GameConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Start,
            config: Rc::new(crate::config::load()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let next = match msg {
            Msg::Start => Screen::Play,
            Msg::End => {
                info!("game over, back to start screen");
                Screen::Start
            }
        };
        let changed = next != self.screen;
        self.screen = next;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.screen {
            Screen::Start => {
                let onstart = ctx.link().callback(|_| Msg::Start);
                html! { <StartScreen start={onstart} /> }
            }
            Screen::Play => {
                let onend = ctx.link().callback(|_| Msg::End);
                html! { <PlayScreen config={self.config.clone()} end={onend} /> }
            }
        }
    }
}
