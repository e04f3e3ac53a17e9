use leptos::*;
use leptos_router::*;

use crate::i18n::provide_i18n;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    // French is the content language, so it is also the default UI language.
    provide_i18n("fr".to_string());

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
