//! Pagination control: page-number strip with ellipsis collapsing plus an
//! optional page-size selector.
//!
//! Pure functions generate the strip; the component only renders it and
//! reports `(page, page_size)` changes back to the list controller.

use leptos::prelude::*;

use crate::shared::list_controller::DEFAULT_PAGE_SIZE;

/// Entry in the page-number strip. Ellipses are non-interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Page numbers to render for a 1-based `page` out of `total_pages`.
///
/// Up to 7 pages render in full. Beyond that: first page, an ellipsis once
/// the window detaches from the left edge, a window of `page ± 1` clamped to
/// `2..=total_pages-1`, an ellipsis while detached from the right edge, last
/// page.
pub fn page_items(page: usize, total_pages: usize) -> Vec<PageItem> {
    let mut items = Vec::new();

    if total_pages <= 7 {
        items.extend((1..=total_pages).map(PageItem::Page));
        return items;
    }

    items.push(PageItem::Page(1));
    if page > 4 {
        items.push(PageItem::Ellipsis);
    }

    let start = page.saturating_sub(1).max(2);
    let end = (page + 1).min(total_pages - 1);
    items.extend((start..=end).map(PageItem::Page));

    if page + 3 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));

    items
}

#[component]
pub fn Pagination(
    /// Current page (1-based)
    #[prop(into)]
    page: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Total item count across all pages
    #[prop(into)]
    total: Signal<usize>,

    /// Callback receiving `(page, page_size)`
    on_change: Callback<(usize, usize)>,

    /// Available page sizes (optional, defaults to [5, 10, 20, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let size_options = page_size_options.unwrap_or_else(|| vec![5, 10, 20, 50]);
    let pages = move || total_pages(total.get(), page_size.get());

    view! {
        // A single-page collection gets no pagination affordance at all.
        <Show when=move || { pages() > 1 }>
            <div class="pagination">
                <div class="pagination__size">
                    <span>"Items per page:"</span>
                    <select
                        class="pagination__size-select"
                        on:change=move |ev| {
                            let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                            // Changing the size always lands on page 1.
                            on_change.run((1, size));
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {size_options.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="pagination__pages">
                    <button
                        class="pagination__btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| {
                            let p = page.get();
                            if p > 1 {
                                on_change.run((p - 1, page_size.get()));
                            }
                        }
                    >
                        "Prev"
                    </button>

                    {move || {
                        let current = page.get();
                        page_items(current, pages())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(n) => {
                                    let class = if n == current {
                                        "pagination__btn pagination__btn--active"
                                    } else {
                                        "pagination__btn"
                                    };
                                    view! {
                                        <button
                                            class=class
                                            on:click=move |_| on_change.run((n, page_size.get()))
                                        >
                                            {n}
                                        </button>
                                    }
                                    .into_any()
                                }
                                PageItem::Ellipsis => {
                                    view! { <span class="pagination__ellipsis">"..."</span> }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}

                    <button
                        class="pagination__btn"
                        disabled=move || page.get() >= pages()
                        on:click=move |_| {
                            let p = page.get();
                            if p < pages() {
                                on_change.run((p + 1, page_size.get()));
                            }
                        }
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(23, 5), 5);
        assert_eq!(total_pages(20, 5), 4);
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
    }

    #[test]
    fn test_few_pages_render_in_full() {
        // total=23, pageSize=5 -> 5 pages, no ellipsis
        assert_eq!(
            page_items(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(
            page_items(1, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_window_with_both_ellipses() {
        // total=100, pageSize=10, page=5
        assert_eq!(
            page_items(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_first_page_of_twelve() {
        // total=120, pageSize=10, page=1: window clamps to [2], single
        // trailing ellipsis.
        assert_eq!(
            page_items(1, 12),
            vec![Page(1), Page(2), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_last_page_of_twelve() {
        assert_eq!(
            page_items(12, 12),
            vec![Page(1), Ellipsis, Page(11), Page(12)]
        );
    }

    #[test]
    fn test_window_near_right_edge_drops_trailing_ellipsis() {
        // page=9 of 12: 9 + 3 == 12, so no trailing ellipsis even though the
        // window [8..=10] does not reach page 11.
        assert_eq!(
            page_items(9, 12),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(12)]
        );
        assert_eq!(
            page_items(10, 12),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Page(12)]
        );
    }

    #[test]
    fn test_leading_ellipsis_appears_after_page_four() {
        assert_eq!(
            page_items(4, 12),
            vec![Page(1), Page(3), Page(4), Page(5), Ellipsis, Page(12)]
        );
        assert_eq!(
            page_items(5, 12),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_single_page_strip() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(1, 0), vec![]);
    }
}
