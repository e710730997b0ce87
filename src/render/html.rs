use askama::Template;

use crate::render::view::{PageView, SummaryView};

#[derive(Template)]
#[template(path = "book.html")]
struct BookTemplate<'a> {
    view: &'a PageView,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    books: &'a [SummaryView],
}

pub fn render_page(view: &PageView) -> askama::Result<String> {
    BookTemplate { view }.render()
}

pub fn render_index(books: &[SummaryView]) -> askama::Result<String> {
    IndexTemplate { books }.render()
}
