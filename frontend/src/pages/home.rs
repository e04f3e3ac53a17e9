use leptos::*;

use crate::components::accordion::{Accordion, AccordionHeader, AccordionItem, AccordionPanel};
use crate::components::movie_details::MovieDetails;
use crate::i18n::{supported_languages, use_i18n};
use catalog::Saga;

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = store_value(use_i18n());
    let catalog = catalog::load();

    view! {
        <div class="container page">
            <header class="page-header">
                <h1 class="page-title">{move || i18n.get_value().t("home.title")}</h1>
                <div
                    class="language-switcher"
                    role="group"
                    aria-label=move || i18n.get_value().t("home.language")
                >
                    {supported_languages().into_iter().map(|(code, label)| view! {
                        <button
                            class=move || {
                                if i18n.get_value().current_language() == code {
                                    "language-button active"
                                } else {
                                    "language-button"
                                }
                            }
                            on:click=move |_: web_sys::MouseEvent| i18n.get_value().set_language(code)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </header>
            {catalog.sagas.into_iter().map(saga_section).collect_view()}
        </div>
    }
}

/// One lead actor's heading followed by the accordion group over that
/// actor's movies.
fn saga_section(saga: Saga) -> impl IntoView {
    view! {
        <section class="saga">
            <h2 class="saga-heading">{saga.actor}</h2>
            <Accordion>
                {saga.movies.into_iter().map(|movie| {
                    let index = movie.index;
                    let header = format!("{} ({})", movie.title, movie.year);
                    view! {
                        <AccordionItem>
                            <AccordionHeader index=index>{header}</AccordionHeader>
                            <AccordionPanel index=index>
                                <MovieDetails movie=movie.clone() />
                            </AccordionPanel>
                        </AccordionItem>
                    }
                }).collect_view()}
            </Accordion>
        </section>
    }
}
