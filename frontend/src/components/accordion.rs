use leptos::*;

/// Open-item state shared by one accordion group. At most one item of the
/// group is expanded: all children compare against the same index.
#[derive(Clone, Copy)]
pub struct AccordionState {
    open_index: RwSignal<Option<usize>>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self {
            open_index: create_rw_signal(None),
        }
    }

    /// Toggle the item with the given index. Activating the open item
    /// closes it, activating any other item moves the expansion there.
    pub fn toggle(&self, index: usize) {
        self.open_index
            .update(|open| *open = next_open_index(*open, index));
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index.get() == Some(index)
    }
}

impl Default for AccordionState {
    fn default() -> Self {
        Self::new()
    }
}

fn next_open_index(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn header_id(index: usize) -> String {
    format!("accordion-header-{}", index)
}

fn panel_id(index: usize) -> String {
    format!("accordion-panel-{}", index)
}

/// Accordion group container. Owns the open-index state and provides it to
/// the item headers and panels nested below it.
#[component]
pub fn Accordion(children: Children) -> impl IntoView {
    let state = AccordionState::new();
    provide_context(state);

    view! {
        <div class="accordion">
            {children()}
        </div>
    }
}

/// Structural wrapper for one header/panel pair.
#[component]
pub fn AccordionItem(children: Children) -> impl IntoView {
    view! {
        <div class="accordion-item">
            {children()}
        </div>
    }
}

/// Clickable header for the item with the given index.
#[component]
pub fn AccordionHeader(index: usize, children: Children) -> impl IntoView {
    let state = expect_context::<AccordionState>();
    let is_open = move || state.is_open(index);

    view! {
        <button
            id=header_id(index)
            class=move || if is_open() { "accordion-header open" } else { "accordion-header" }
            aria-expanded=move || if is_open() { "true" } else { "false" }
            aria-controls=panel_id(index)
            on:click=move |_: web_sys::MouseEvent| state.toggle(index)
        >
            <span class="accordion-header-label">{children()}</span>
            <span
                class=move || if is_open() { "accordion-chevron open" } else { "accordion-chevron" }
                aria-hidden="true"
            >
                "▼"
            </span>
        </button>
    }
}

/// Collapsible panel for the item with the given index. Closed panels are
/// removed from the DOM entirely; an opening panel takes keyboard focus.
#[component]
pub fn AccordionPanel(index: usize, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AccordionState>();
    let panel_ref = create_node_ref::<html::Div>();
    let is_open = move || state.is_open(index);

    create_effect(move |_| {
        if is_open() {
            if let Some(panel) = panel_ref.get() {
                let _ = panel.focus();
            }
        }
    });

    view! {
        <Show when=is_open fallback=|| ()>
            <div
                id=panel_id(index)
                class="accordion-panel"
                role="region"
                aria-labelledby=header_id(index)
                tabindex="-1"
                node_ref=panel_ref
            >
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        assert_eq!(next_open_index(None, 0), Some(0));
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        assert_eq!(next_open_index(Some(0), 0), None);
    }

    #[test]
    fn test_toggle_other_item_moves_expansion() {
        assert_eq!(next_open_index(Some(0), 1), Some(1));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        assert_eq!(next_open_index(next_open_index(None, 5), 5), None);
        assert_eq!(next_open_index(next_open_index(Some(5), 5), 5), Some(5));
    }

    #[test]
    fn test_arbitrary_sequence_keeps_one_item_open() {
        let mut open = None;
        for clicked in [0, 1, 1, 2, 0, 0, 7, 7] {
            open = next_open_index(open, clicked);
            if let Some(index) = open {
                assert_eq!(index, clicked);
            }
        }
        assert_eq!(open, None);
    }

    #[test]
    fn test_header_and_panel_ids_cross_reference() {
        assert_eq!(header_id(4), "accordion-header-4");
        assert_eq!(panel_id(4), "accordion-panel-4");
        assert_ne!(header_id(4), panel_id(4));
    }

    #[test]
    fn test_header_class_reflects_open_state() {
        let class = |open: bool| {
            if open {
                "accordion-header open"
            } else {
                "accordion-header"
            }
        };
        assert_eq!(class(true), "accordion-header open");
        assert_eq!(class(false), "accordion-header");
    }
}
