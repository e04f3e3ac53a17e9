use leptos::*;
use pulldown_cmark::{html, Parser};

use crate::i18n::use_i18n;
use catalog::{CastMember, Movie};

fn render_synopsis_html(synopsis: &str) -> String {
    let parser = Parser::new(synopsis);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn cast_line(member: &CastMember) -> String {
    format!("{} ({})", member.name, member.role)
}

/// Synopsis, cast list and director for one movie entry.
#[component]
pub fn MovieDetails(movie: Movie) -> impl IntoView {
    let i18n = store_value(use_i18n());
    let synopsis_html = render_synopsis_html(&movie.synopsis);

    view! {
        <div class="movie-synopsis" inner_html=synopsis_html></div>
        <h3 class="movie-section-title">{move || i18n.get_value().t("movie.cast")}</h3>
        <ul class="movie-cast">
            {movie.cast.iter().map(|member| view! {
                <li>{cast_line(member)}</li>
            }).collect_view()}
        </ul>
        <h3 class="movie-section-title">{move || i18n.get_value().t("movie.director")}</h3>
        <p class="movie-director">{movie.director}</p>
    }
}
