use crate::{
    location::Route,
    page::{BookDetailPage, PageState},
    types::{
        book::{Book, BookSummary},
        edition::EDITION_COLUMNS,
        id::Id,
        review::Review,
        PLACEHOLDER,
    },
};

/// Display-ready contents of a detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Document title.
    pub title: String,
    /// `None` while the book is loading.
    pub book:  Option<BookView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub title:           String,
    pub author_name:     String,
    pub author_href:     String,
    pub genres:          String,
    pub average_rating:  String,
    pub image_url:       Option<String>,
    pub edition_columns: Vec<String>,
    pub editions:        Vec<Vec<String>>,
    pub user_review:     Option<ReviewView>,
    pub review_href:     String,
    pub reviews:         Vec<ReviewView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub username:  String,
    pub user_href: String,
    pub rating:    String,
    pub text:      String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            username:  review.display_name(),
            user_href: Route::User(review.reviewer.clone()).to_string(),
            rating:    review.rating.to_string(),
            text:      review.text().to_string(),
        }
    }
}

impl PageView {
    /// `identifier` is the one the page was opened with; the review link points at it.
    pub fn new(identifier: Option<&Id>, state: &PageState) -> Self {
        match (&state.book, identifier) {
            (Some(book), Some(id)) => Self {
                title: format!("{} - Book Details", book.title),
                book:  Some(BookView::new(id, book, state)),
            },
            _ => Self {
                title: format!("{} - Book Details", super::LOADING),
                book:  None,
            },
        }
    }

    pub fn from_page(page: &BookDetailPage) -> Self {
        Self::new(page.identifier(), page.state())
    }
}

impl BookView {
    fn new(id: &Id, book: &Book, state: &PageState) -> Self {
        Self {
            title:           book.title.clone(),
            author_name:     book.author_name.clone(),
            author_href:     Route::Author(book.author.clone()).to_string(),
            genres:          book.genres_joined(),
            average_rating:  book
                .average_rating
                .map(|x| x.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            image_url:       book.cover().map(str::to_string),
            edition_columns: EDITION_COLUMNS.iter().map(|x| x.to_string()).collect(),
            editions:        state.editions.iter().map(|x| x.cells()).collect(),
            user_review:     state.user_review.as_ref().map(ReviewView::from),
            review_href:     Route::WriteReview(id.clone()).to_string(),
            reviews:         state.reviews.iter().map(ReviewView::from).collect(),
        }
    }
}

/// Display-ready entry of the book index.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub title:          String,
    pub href:           String,
    pub author_name:    String,
    pub author_href:    String,
    pub average_rating: String,
}

impl From<&BookSummary> for SummaryView {
    fn from(book: &BookSummary) -> Self {
        Self {
            title:          book.title.clone(),
            href:           Route::Book(book.id.clone()).to_string(),
            author_name:    book
                .author_name
                .clone()
                .unwrap_or_else(|| book.author.to_string()),
            author_href:    Route::Author(book.author.clone()).to_string(),
            average_rating: book
                .average_rating
                .map(|x| x.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}
