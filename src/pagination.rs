//! Lazy iteration over every item of a paginated collection.

use futures::future::BoxFuture;
use futures::Stream;
use tracing::debug;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::resource::TypedResource;

/// Something that can fetch one page of a collection given its URL.
///
/// The URL is either a collection endpoint or a `next_url` handed out by the server.
pub trait PageFetcher: Sync {
    fn fetch_page<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Page>>;
}

enum State {
    Active {
        items: std::vec::IntoIter<TypedResource>,
        next_page_url: Option<String>,
    },
    Exhausted,
}

impl State {
    fn active(page: Page) -> Self {
        Self::Active {
            next_page_url: page.next_page_url,
            items: page.items.into_iter(),
        }
    }
}

/// Yields the items of a collection one at a time, fetching the next page only once the
/// current one is drained and another item is asked for.
pub struct Paginator<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    state: State,
    max_results: Option<usize>,
    yielded: usize,
}

impl<'a, F: PageFetcher + ?Sized> Paginator<'a, F> {
    /// `max_results` caps the number of items produced; `Some(0)` produces nothing.
    pub fn new(first_page: Page, fetcher: &'a F, max_results: Option<usize>) -> Self {
        Self {
            fetcher,
            state: State::active(first_page),
            max_results,
            yielded: 0,
        }
    }

    /// Number of items handed out so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    fn limit_reached(&self) -> bool {
        self.max_results.is_some_and(|max| self.yielded >= max)
    }

    /// Produce the next item.
    ///
    /// Returns `None` once the collection (or the cap) is exhausted. A failed page fetch is
    /// returned as `Some(Err(..))` and ends the sequence.
    pub async fn next(&mut self) -> Option<Result<TypedResource>> {
        loop {
            if self.limit_reached() {
                self.state = State::Exhausted;
                return None;
            }

            let url = match &mut self.state {
                State::Exhausted => return None,
                State::Active {
                    items,
                    next_page_url,
                } => {
                    if let Some(item) = items.next() {
                        self.yielded += 1;
                        return Some(Ok(item));
                    }
                    next_page_url.take()
                }
            };

            let Some(url) = url else {
                self.state = State::Exhausted;
                return None;
            };

            debug!(url = %url, yielded = self.yielded, "fetching next page");
            match self.fetcher.fetch_page(&url).await {
                Ok(page) => self.state = State::active(page),
                Err(err) => {
                    self.state = State::Exhausted;
                    return Some(Err(err));
                }
            }
        }
    }

    /// Drain the whole sequence, stopping at the first error.
    pub async fn try_collect(mut self) -> Result<Vec<TypedResource>> {
        let mut results = Vec::new();
        while let Some(item) = self.next().await {
            results.push(item?);
        }
        Ok(results)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<TypedResource>> + 'a
    where
        F: 'a,
    {
        futures::stream::unfold(self, |mut paginator| async move {
            let item = paginator.next().await?;
            Some((item, paginator))
        })
    }
}

/// Convert every item of a collection into a concrete record type.
pub async fn collect_as<T, F>(paginator: Paginator<'_, F>) -> Result<Vec<T>>
where
    T: TryFrom<TypedResource, Error = Error>,
    F: PageFetcher + ?Sized,
{
    paginator
        .try_collect()
        .await?
        .into_iter()
        .map(T::try_from)
        .collect()
}
