use std::rc::Rc;

use yew::prelude::*;

use crate::models::AuthToken;
use crate::viewmodels::{FormAction, SignupFormState, SignupViewModel};

impl Reducible for SignupFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

pub struct UseSignupFormHandle {
    pub state: UseReducerHandle<SignupFormState>,
    pub on_username: Callback<String>,
    pub on_password: Callback<String>,
    pub submit: Callback<()>,
}

/// Form state for the sign-up form. `on_created` fires once the server
/// accepts the user.
#[hook]
pub fn use_signup_form(token: AuthToken, on_created: Callback<()>) -> UseSignupFormHandle {
    let state = use_reducer(SignupFormState::new);

    let on_username = {
        let state = state.clone();
        Callback::from(move |username: String| state.dispatch(FormAction::SetUsername(username)))
    };

    let on_password = {
        let state = state.clone();
        Callback::from(move |password: String| state.dispatch(FormAction::SetPassword(password)))
    };

    // Reducer dispatches after the await apply to the latest state, so input
    // typed while the request is in flight is kept.
    let submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let snapshot = (*state).clone();
            let dispatcher = state.dispatcher();
            let token = token.clone();
            let on_created = on_created.clone();

            wasm_bindgen_futures::spawn_local(async move {
                SignupViewModel::new()
                    .submit(
                        &snapshot,
                        &token,
                        |action| dispatcher.dispatch(action),
                        || on_created.emit(()),
                    )
                    .await;
            });
        })
    };

    UseSignupFormHandle {
        state,
        on_username,
        on_password,
        submit,
    }
}
