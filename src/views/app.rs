// ============================================================================
// APP VIEW - root component
// ============================================================================

use yew::prelude::*;

use crate::utils::constants::MSG_USER_CREATED;
use crate::views::signup_form::SignupForm;

#[function_component(App)]
pub fn app() -> Html {
    let user_was_created = use_state(|| false);

    let on_created = {
        let user_was_created = user_was_created.clone();
        Callback::from(move |_: ()| {
            log::info!("✅ Account created, showing confirmation");
            user_was_created.set(true);
        })
    };

    html! {
        <main class="signup-screen">
            if *user_was_created {
                <p class="signup-success">{ MSG_USER_CREATED }</p>
            } else {
                <SignupForm {on_created} />
            }
        </main>
    }
}
