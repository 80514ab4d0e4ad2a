use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_signup_form;
use crate::models::AuthToken;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub on_created: Callback<()>,
}

/// Reads the bearer token once; without one the form is not rendered.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let token = use_state(|| {
        AuthToken::from_location().map_err(|e| {
            log::error!("❌ Cannot render sign-up form: {}", e);
            e
        })
    });

    match &*token {
        Ok(token) => html! {
            <SignupFormFields token={token.clone()} on_created={props.on_created.clone()} />
        },
        Err(_) => Html::default(),
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupFormFieldsProps {
    pub token: AuthToken,
    pub on_created: Callback<()>,
}

#[function_component(SignupFormFields)]
fn signup_form_fields(props: &SignupFormFieldsProps) -> Html {
    let form = use_signup_form(props.token.clone(), props.on_created.clone());
    let state = &*form.state;

    let on_username_input = {
        let on_username = form.on_username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_username.emit(input.value());
        })
    };

    let on_password_input = {
        let on_password = form.on_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_password.emit(input.value());
        })
    };

    let on_submit = {
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let has_errors = !state.validation_errors.is_empty();

    html! {
        <form class="signup-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="username">{"Username"}</label>
                <input
                    type="text"
                    id="username"
                    name="username"
                    autocomplete="username"
                    value={state.username.clone()}
                    oninput={on_username_input}
                />
            </div>

            <div class="form-group">
                <label for="password">{"Password"}</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    autocomplete="new-password"
                    aria-describedby={has_errors.then_some("validation-errors")}
                    value={state.password.clone()}
                    oninput={on_password_input}
                />
            </div>

            if has_errors {
                <ul id="validation-errors" class="validation-errors">
                    { for state.validation_errors.iter().map(|error| html! { <li>{ error.clone() }</li> }) }
                </ul>
            }

            if !state.api_error.is_empty() {
                <p class="api-error" role="alert">{ state.api_error.clone() }</p>
            }

            <button type="submit" class="btn-submit" disabled={state.is_submit_disabled()}>
                { state.submit_label() }
            </button>
        </form>
    }
}
