//! # Generic data table
//!
//! A configuration-driven table: the caller supplies the rows, a list of
//! [`Column`] descriptors and the pagination/search state, and this
//! component renders the chrome. It owns no data logic — filtering and
//! slicing happen in the caller (see [`crate::collection`]), which keeps
//! the table a pure function of its props.

use dioxus::prelude::*;

use crate::collection::PAGE_SIZE_OPTIONS;

const DATA_TABLE_CSS: Asset = asset!("/assets/styling/data_table.css");

/// One column of a [`DataTable`].
pub struct Column<T: 'static> {
    /// Stable key for the header cell.
    pub key: &'static str,
    /// Header label.
    pub label: &'static str,
    /// Plain-text cell content, used when no renderer is supplied.
    pub accessor: fn(&T) -> String,
    /// Optional custom cell renderer.
    pub render: Option<Callback<T, Element>>,
    /// Right-align the column (numeric/action columns).
    pub align_end: bool,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, accessor: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            accessor,
            render: None,
            align_end: false,
        }
    }

    pub fn render(mut self, render: Callback<T, Element>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn align_end(mut self) -> Self {
        self.align_end = true;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            accessor: self.accessor,
            render: self.render,
            align_end: self.align_end,
        }
    }
}

// Renderers are rebuilt every render; comparing the static descriptor
// fields keeps the props memoizable.
impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.label == other.label && self.align_end == other.align_end
    }
}

#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    #[props(default)] loading: bool,
    page: usize,
    page_size: usize,
    /// Filtered row count across all pages.
    total: usize,
    search: String,
    on_search: EventHandler<String>,
    on_page_change: EventHandler<usize>,
    on_page_size_change: EventHandler<usize>,
    #[props(default = "Search...".to_string())] search_placeholder: String,
    #[props(default)] on_row_click: Option<EventHandler<T>>,
) -> Element {
    let start = if total == 0 { 0 } else { page * page_size + 1 };
    let end = ((page + 1) * page_size).min(total);
    let col_count = columns.len();

    rsx! {
        document::Stylesheet { href: DATA_TABLE_CSS }

        div {
            class: "data-table",

            div {
                class: "data-table-toolbar",
                input {
                    class: "input data-table-search",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    value: "{search}",
                    oninput: move |evt| on_search.call(evt.value()),
                }
            }

            table {
                thead {
                    tr {
                        for col in columns.iter() {
                            th {
                                key: "{col.key}",
                                class: if col.align_end { "cell-end" } else { "" },
                                "{col.label}"
                            }
                        }
                    }
                }
                tbody {
                    if loading {
                        tr {
                            td {
                                class: "data-table-placeholder",
                                colspan: "{col_count}",
                                "Loading..."
                            }
                        }
                    } else if rows.is_empty() {
                        tr {
                            td {
                                class: "data-table-placeholder",
                                colspan: "{col_count}",
                                "Nothing to show"
                            }
                        }
                    } else {
                        {rows.iter().enumerate().map(|(i, row)| {
                            let row_for_click = row.clone();
                            rsx! {
                                tr {
                                    key: "{i}",
                                    class: if on_row_click.is_some() { "data-table-row clickable" } else { "data-table-row" },
                                    onclick: move |_| {
                                        if let Some(handler) = on_row_click {
                                            handler.call(row_for_click.clone());
                                        }
                                    },
                                    for col in columns.iter() {
                                        td {
                                            key: "{col.key}",
                                            class: if col.align_end { "cell-end" } else { "" },
                                            if let Some(render) = col.render {
                                                {render.call(row.clone())}
                                            } else {
                                                {(col.accessor)(row)}
                                            }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }

            div {
                class: "data-table-footer",
                span {
                    class: "data-table-range",
                    "Showing {start}-{end} of {total}"
                }
                div {
                    class: "data-table-pager",
                    select {
                        value: "{page_size}",
                        onchange: move |evt| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                on_page_size_change.call(size);
                            }
                        },
                        for option in PAGE_SIZE_OPTIONS {
                            option {
                                key: "{option}",
                                value: "{option}",
                                "{option} / page"
                            }
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: page == 0,
                        onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                        "Previous"
                    }
                    button {
                        class: "btn btn-outline",
                        disabled: end >= total,
                        onclick: move |_| on_page_change.call(page + 1),
                        "Next"
                    }
                }
            }
        }
    }
}
