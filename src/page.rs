//! State of a book's detail page.
//!
//! A [BookDetailPage] owns everything it displays. Requests run as tokio tasks
//! and report back as [Loaded] values tagged with the generation that issued
//! them; the page applies them one at a time, so the state is never shared.
//!
//! Every identifier change starts a new generation. Tasks of the old generation
//! are aborted, and anything they still deliver is discarded, so the last
//! navigation always wins.

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{
    client::ApiClient,
    credential::Credential,
    error::FetchResult,
    location::resolve_identifier,
    types::{book::Book, edition::Edition, id::Id, review::Review},
};

/// What the page currently knows.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PageState {
    pub book:        Option<Book>,
    pub editions:    Vec<Edition>,
    pub reviews:     Vec<Review>,
    pub user_review: Option<Review>,
}

impl PageState {
    /// Nothing but the loading placeholder is shown until the book arrives.
    pub fn is_loading(&self) -> bool {
        self.book.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Book,
    Editions,
    Reviews,
    UserReview,
}

/// Result of one request.
#[derive(Debug)]
pub enum Fetched {
    Book(FetchResult<Book>),
    Editions(FetchResult<Vec<Edition>>),
    Reviews(FetchResult<Vec<Review>>),
    UserReview(FetchResult<Review>),
}

impl Fetched {
    pub fn request(&self) -> Request {
        match self {
            Fetched::Book(_) => Request::Book,
            Fetched::Editions(_) => Request::Editions,
            Fetched::Reviews(_) => Request::Reviews,
            Fetched::UserReview(_) => Request::UserReview,
        }
    }
}

/// A finished request, tagged with the generation and identifier it was issued for.
#[derive(Debug)]
pub struct Loaded {
    pub generation: u64,
    pub id:         Id,
    pub fetched:    Fetched,
}

pub struct BookDetailPage {
    client:     ApiClient,
    credential: Option<Credential>,
    identifier: Option<Id>,
    generation: u64,
    state:      PageState,
    tasks:      JoinSet<Loaded>,
}

impl BookDetailPage {
    pub fn new(client: ApiClient, credential: Option<Credential>) -> Self {
        Self {
            client,
            credential,
            identifier: None,
            generation: 0,
            state: PageState::default(),
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn identifier(&self) -> Option<&Id> {
        self.identifier.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of requests of the current generation not yet applied, finished or not.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Resolves the identifier from `location` and switches to it.
    pub fn navigate(&mut self, location: &str) {
        self.set_identifier(resolve_identifier(location));
    }

    /// Switches the page to `identifier`; a no-op when it is unchanged.
    pub fn set_identifier(&mut self, identifier: Option<Id>) {
        if identifier == self.identifier {
            return;
        }
        self.generation += 1;
        // Dropping the set aborts whatever the previous generation left running.
        self.tasks = JoinSet::new();
        self.state = PageState::default();
        self.identifier = identifier;

        let Some(id) = self.identifier.clone() else {
            debug!(generation = self.generation, "no book identifier, nothing to load");
            return;
        };
        info!(book = %id, generation = self.generation, "loading book");
        self.spawn_book(id.clone());
        self.spawn_user_review(id);
    }

    /// Re-issues every request for the current identifier.
    pub fn reload(&mut self) {
        let identifier = self.identifier.take();
        self.set_identifier(identifier);
    }

    fn spawn_book(&mut self, id: Id) {
        let client = self.client.clone();
        let generation = self.generation;
        self.tasks.spawn(async move {
            let fetched = Fetched::Book(client.book(&id).await);
            Loaded { generation, id, fetched }
        });
    }

    fn spawn_editions(&mut self, id: Id) {
        let client = self.client.clone();
        let generation = self.generation;
        self.tasks.spawn(async move {
            let fetched = Fetched::Editions(client.editions(&id).await);
            Loaded { generation, id, fetched }
        });
    }

    fn spawn_reviews(&mut self, id: Id) {
        let client = self.client.clone();
        let generation = self.generation;
        self.tasks.spawn(async move {
            let fetched = Fetched::Reviews(client.reviews(&id).await);
            Loaded { generation, id, fetched }
        });
    }

    fn spawn_user_review(&mut self, id: Id) {
        let client = self.client.clone();
        let credential = self.credential.clone();
        let generation = self.generation;
        self.tasks.spawn(async move {
            let fetched = Fetched::UserReview(client.user_review(&id, credential.as_ref()).await);
            Loaded { generation, id, fetched }
        });
    }

    /// Applies a finished request. Returns `false` if it belonged to an older
    /// generation and was discarded.
    pub fn apply(&mut self, loaded: Loaded) -> bool {
        let Loaded { generation, id, fetched } = loaded;
        if generation != self.generation || self.identifier.as_ref() != Some(&id) {
            debug!(
                book = %id,
                generation,
                current = self.generation,
                "discarding stale {:?} response",
                fetched.request()
            );
            return false;
        }

        match fetched {
            Fetched::Book(Ok(book)) => {
                self.state.book = Some(book);
                self.spawn_editions(id.clone());
                self.spawn_reviews(id);
            }
            Fetched::Book(Err(e)) => {
                warn!(book = %id, "failed to load book: {e}");
            }
            Fetched::Editions(Ok(editions)) => self.state.editions = editions,
            Fetched::Editions(Err(e)) => {
                warn!(book = %id, "failed to load editions: {e}");
            }
            Fetched::Reviews(Ok(reviews)) => self.state.reviews = reviews,
            Fetched::Reviews(Err(e)) => {
                warn!(book = %id, "failed to load reviews: {e}");
            }
            Fetched::UserReview(Ok(review)) => self.state.user_review = Some(review),
            Fetched::UserReview(Err(e)) if e.is_not_found() => {
                debug!(book = %id, "viewer has not reviewed this book");
                self.state.user_review = None;
            }
            Fetched::UserReview(Err(e)) => {
                warn!(book = %id, "failed to load the viewer's review: {e}");
            }
        }
        true
    }

    /// Waits for the next request of the current generation and applies it.
    ///
    /// Returns `None` once nothing is in flight.
    pub async fn next_update(&mut self) -> Option<Request> {
        loop {
            match self.tasks.join_next().await? {
                Ok(loaded) => {
                    let request = loaded.fetched.request();
                    if self.apply(loaded) {
                        return Some(request);
                    }
                }
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    warn!("request task failed: {e}");
                }
            }
        }
    }

    /// Drives the page until every request has finished.
    pub async fn settle(&mut self) {
        while self.next_update().await.is_some() {}
    }
}
