use gloo::console::{log, warn};
use mock_interview::{
    default_questions, parse_question_bank, Prompt, Question, QuestionWalker, Step, WalkerError,
    QUESTION_BANK_ELEMENT_ID,
};
use web_sys::{window, HtmlTextAreaElement};
use yew::prelude::*;

fn read_question_bank_json() -> Result<Option<String>, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    Ok(doc
        .get_element_by_id(QUESTION_BANK_ELEMENT_ID)
        .map(|el| el.text_content().unwrap_or_default()))
}

/// Embedded bank if the page has a valid one, otherwise the stock questions.
fn load_questions() -> Vec<Question> {
    match read_question_bank_json() {
        Ok(Some(json)) => match parse_question_bank(&json) {
            Ok(questions) => {
                log!(format!(
                    "Loaded {} questions from #{QUESTION_BANK_ELEMENT_ID}",
                    questions.len()
                ));
                questions
            }
            Err(e) => {
                warn!(format!("Ignoring #{QUESTION_BANK_ELEMENT_ID}: {e}"));
                default_questions()
            }
        },
        Ok(None) => {
            log!("No embedded question bank, using defaults");
            default_questions()
        }
        Err(e) => {
            warn!(format!("Question bank lookup failed: {e}"));
            default_questions()
        }
    }
}

fn alert(message: &str) {
    window().and_then(|w| w.alert_with_message(message).ok());
}

fn submit_answer(
    walker: &UseStateHandle<Result<QuestionWalker, WalkerError>>,
    answer: &UseStateHandle<String>,
) {
    let Ok(current) = &**walker else {
        return;
    };

    let mut next = current.clone();
    match next.submit(answer) {
        Ok(step) => {
            match step {
                Step::Advanced { cursor } => {
                    log!(format!("Question {} of {}", cursor + 1, next.len()));
                }
                Step::Completed => log!("Interview completed"),
                Step::Ignored => warn!("Interview already completed, submission ignored"),
            }
            answer.set(String::new());
            walker.set(Ok(next));
        }
        Err(e @ WalkerError::EmptyAnswer) => {
            warn!("Blank answer rejected");
            alert(&e.to_string());
        }
        Err(e) => warn!(format!("Submit failed: {e}")),
    }
}

#[function_component(App)]
fn app() -> Html {
    let walker = use_state(|| QuestionWalker::new(load_questions()));
    let answer = use_state(String::new);

    let on_submit = {
        let walker = walker.clone();
        let answer = answer.clone();
        Callback::from(move |_: MouseEvent| submit_answer(&walker, &answer))
    };

    let on_input = {
        let answer = answer.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            answer.set(v);
        })
    };

    // Ctrl/Cmd+Enter submits; plain Enter keeps its newline.
    let on_keydown = {
        let walker = walker.clone();
        let answer = answer.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && (e.ctrl_key() || e.meta_key()) {
                e.prevent_default();
                submit_answer(&walker, &answer);
            }
        })
    };

    let current = match &*walker {
        Ok(w) => w,
        Err(e) => {
            return html! {
                <main class="wrap">
                    <div class="card">
                        <h1>{"Mock Interview"}</h1>
                        <p class="error">{ e.to_string() }</p>
                    </div>
                </main>
            };
        }
    };

    let done = current.is_complete();
    let (answered, total) = current.progress();
    let percent = answered * 100 / total.max(1);
    let prompt = current.prompt();

    let badges = match prompt {
        Prompt::Question(q) => html! {
            <div class="badges">
                { for q.topic.iter().map(|t| html!{ <span class="badge">{ t.clone() }</span> }) }
                { for q.difficulty.iter().map(|d| html!{ <span class="badge">{ d.clone() }</span> }) }
            </div>
        },
        Prompt::Completed => html! {},
    };

    html! {
        <main class="wrap">
            <div class="topbar">
                <h1>{"Mock Interview"}</h1>
                <div class="badge">{"Rust + Yew"}</div>
            </div>

            <div class="card">
                <div class="meta">
                    {
                        if done {
                            format!("All {total} questions answered")
                        } else {
                            format!("Question {} of {}", answered + 1, total)
                        }
                    }
                </div>
                <div class="progress">
                    <div class="bar" style={format!("width:{percent}%;")}></div>
                </div>

                { badges }
                <h2 id="question" class={classes!(done.then_some("done"))}>{ prompt.text() }</h2>

                <textarea
                    id="answer"
                    placeholder="Type your answer..."
                    value={(*answer).clone()}
                    disabled={done}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />

                <div class="row">
                    <button class="primary" onclick={on_submit} disabled={done}>{"Submit"}</button>
                    <span class="small">{"Ctrl+Enter to submit"}</span>
                </div>
            </div>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
