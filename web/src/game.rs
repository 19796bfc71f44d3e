use crate::api::ApiClient;
use clap::Args;
use gloo::timers::callback::Timeout;
use guessing_core::{
    Control, Controller, Effect, GameStatus, Guess, GuessRecord, Reply, Trigger,
};
use guessing_protocol::DEFAULT_API_BASE;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Ui(Control, Trigger),
    Input(String),
    InputFocus(bool),
    Replied(Reply),
    Celebrate(u32),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the game backend
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[cfg(test)]
impl GameProps {
    pub(crate) fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_owned(),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct HistoryProps {
    records: Vec<GuessRecord>,
    list_ref: NodeRef,
}

#[function_component(HistoryView)]
fn history_component(props: &HistoryProps) -> Html {
    html! {
        <div id="guessList" class="guess-list" ref={props.list_ref.clone()}>
            {
                for props.records.iter().map(|record| html! {
                    <div class={history_item_class(record)}>
                        {record.value.value()}
                    </div>
                })
            }
        </div>
    }
}

fn history_item_class(record: &GuessRecord) -> Classes {
    classes!("guess-item", record.hint.as_str().to_owned())
}

/// Guess count, lower and upper bound as shown on the page. Blank until the
/// server has reported a status.
fn status_labels(status: Option<GameStatus>) -> [String; 3] {
    status.map_or_else(Default::default, |status| {
        [
            status.guesses.to_string(),
            status.min_range.to_string(),
            status.max_range.to_string(),
        ]
    })
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: Controller,
    client: ApiClient,
    input_focused: bool,
    pending_focus: bool,
    pending_scroll: bool,
    input_ref: NodeRef,
    list_ref: NodeRef,
}

impl GameView {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Call(call) => {
                    let client = self.client.clone();
                    ctx.link()
                        .send_future(async move { Msg::Replied(client.execute(call).await) });
                }
                Effect::Celebrate { after_ms, guesses } => {
                    let link = ctx.link().clone();
                    // not cancelled by a restart
                    Timeout::new(after_ms, move || link.send_message(Msg::Celebrate(guesses)))
                        .forget();
                }
                Effect::FocusInput => self.pending_focus = true,
                Effect::ScrollHistory => self.pending_scroll = true,
            }
        }
    }

    fn focus_input(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            if let Err(err) = input.focus() {
                log::error!("could not focus guess input: {:?}", err);
            }
        }
    }

    fn scroll_history(&self) {
        if let Some(list) = self.list_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        log::debug!("api base: {}", ctx.props().api_base);
        ctx.link()
            .send_message(Msg::Ui(Control::Document, Trigger::Ready));
        Self {
            controller: Controller::new(),
            client: ApiClient::new(ctx.props().api_base.clone()),
            input_focused: false,
            pending_focus: true,
            pending_scroll: false,
            input_ref: NodeRef::default(),
            list_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Ui(control, trigger) => {
                log::trace!("ui event: {:?} {:?}", control, trigger);
                let effects = self.controller.dispatch(control, trigger);
                self.run(ctx, effects);
            }
            Input(value) => self.controller.set_input(value),
            InputFocus(focused) => {
                if self.input_focused == focused {
                    return false;
                }
                self.input_focused = focused;
            }
            Replied(reply) => {
                let effects = self.controller.receive(reply);
                self.run(ctx, effects);
            }
            Celebrate(guesses) => self.controller.celebrate(guesses),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = self.controller.session();
        let status = session.status();
        let enabled = session.controls_enabled();

        let [guess_count, min_range, max_range] = status_labels(status);

        let (message_text, message_class) = session
            .message()
            .map_or((String::new(), None), |message| {
                (message.text.clone(), Some(message.kind.class().to_owned()))
            });

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Input(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            log::trace!("key press: {}", e.key());
            (e.key() == "Enter").then_some(Ui(Control::GuessInput, Trigger::KeyEnter))
        });
        let onfocus = ctx.link().callback(|_: FocusEvent| InputFocus(true));
        let onblur = ctx.link().callback(|_: FocusEvent| InputFocus(false));
        let cb_guess = ctx
            .link()
            .callback(|_: MouseEvent| Ui(Control::GuessButton, Trigger::Click));
        let cb_hint = ctx
            .link()
            .callback(|_: MouseEvent| Ui(Control::HintButton, Trigger::Click));
        let cb_restart = ctx
            .link()
            .callback(|_: MouseEvent| Ui(Control::RestartButton, Trigger::Click));

        html! {
            <div class="guessing">
                <nav>
                    <aside>{"Guesses: "}<span id="guessCount">{guess_count}</span></aside>
                    <aside>
                        {"Range: "}
                        <span id="minRange">{min_range}</span>
                        {" - "}
                        <span id="maxRange">{max_range}</span>
                    </aside>
                </nav>
                <section>
                    <input
                        id="guessInput"
                        type="number"
                        min={Guess::MIN.to_string()}
                        max={Guess::MAX.to_string()}
                        ref={self.input_ref.clone()}
                        class={classes!(self.input_focused.then_some("focused"))}
                        value={session.input().to_owned()}
                        disabled={!enabled}
                        {oninput}
                        {onkeypress}
                        {onfocus}
                        {onblur}
                    />
                    <button id="guessBtn" disabled={!enabled} onclick={cb_guess}>{"Guess"}</button>
                </section>
                <p id="message" class={classes!("message", message_class)}>{message_text}</p>
                <section>
                    <button id="hintBtn" onclick={cb_hint}>{"Hint"}</button>
                    <button id="restartBtn" onclick={cb_restart}>{"Restart"}</button>
                </section>
                <HistoryView records={session.history().to_vec()} list_ref={self.list_ref.clone()}/>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.pending_focus) {
            self.focus_input();
        }
        if std::mem::take(&mut self.pending_scroll) {
            self.scroll_history();
        }
    }
}
