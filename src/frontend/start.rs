use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub start: Callback<()>,
}

pub struct StartScreen;

impl Component for StartScreen {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let start = ctx.props().start.clone();

        html! {
            <div class="flex flex-col h-screen bg-purple-500 justify-center">
                <div class="grid justify-center text-center max-h-min gap-14">
                    <div class="grid gap-4">
                        <h1 class="font-bold text-slate-100 text-7xl max-h-min animate__animated animate__bounceInDown">
                            {"Memory"}
                        </h1>
                        <p class="text-lg font-semibold text-slate-100 text-nowrap animate__animated animate__fadeInRight animate__delay-1s">
                            {"Flip over tiles looking for pairs"}
                        </p>
                    </div>
                    <button
                        class="bg-gradient-to-b from-pink-300 to-pink-400 text-white py-3 px-16 max-w-60 justify-self-center text-xl font-bold rounded-se-2xl rounded-es-2xl hover:shadow-xl shadow-pink-200 animate__animated animate__flash animate__infinite animate__slower animate__delay-2s"
                        onclick={move |_| start.emit(())}
                    >
                        {"Play"}
                    </button>
                </div>
            </div>
        }
    }
}
