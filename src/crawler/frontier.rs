//! Frontier of pages waiting to be harvested
//!
//! A FIFO queue bounded by a page budget. Pages already present in the
//! aggregate's visited registry are skipped when popped, so the visited set
//! stays the single source of truth for "already attempted".

use crate::config::{CrawlConfig, CrawlMode};
use crate::state::Aggregate;
use crate::url::page_key;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Queue of pending page URLs
#[derive(Debug)]
pub struct Frontier {
    mode: CrawlMode,
    queue: VecDeque<Url>,
    /// Keys of every URL ever queued, to avoid queueing duplicates
    queued: HashSet<String>,
    /// Maximum number of pages handed out
    budget: usize,
    dispatched: usize,
}

impl Frontier {
    /// Creates a frontier seeded for the configured crawl mode
    ///
    /// * `Single` - the start URL only, budget of one page
    /// * `BreadthFirst` - the start URL; more pages arrive via [`Frontier::discover`]
    /// * `List` - the start URL followed by `extra`, in order
    pub fn new(start: Url, config: &CrawlConfig, extra: &[Url]) -> Self {
        let budget = match config.mode {
            CrawlMode::Single => 1,
            CrawlMode::BreadthFirst | CrawlMode::List => config.max_pages.max(1) as usize,
        };

        let mut frontier = Self {
            mode: config.mode,
            queue: VecDeque::new(),
            queued: HashSet::new(),
            budget,
            dispatched: 0,
        };

        frontier.push(start);
        if config.mode == CrawlMode::List {
            for url in extra {
                frontier.push(url.clone());
            }
        }
        frontier
    }

    /// Queues links discovered on a harvested page
    ///
    /// Only breadth-first crawls follow links; other modes ignore them.
    /// Returns the number of newly queued URLs.
    pub fn discover(&mut self, links: Vec<Url>, aggregate: &Aggregate) -> usize {
        if self.mode != CrawlMode::BreadthFirst {
            return 0;
        }

        links
            .into_iter()
            .filter(|url| !aggregate.is_visited(&page_key(url)))
            .filter(|url| self.push(url.clone()))
            .count()
    }

    /// Hands out the next unvisited URL, or None when empty or out of budget
    pub fn next_unvisited(&mut self, aggregate: &Aggregate) -> Option<Url> {
        if self.dispatched >= self.budget {
            return None;
        }

        while let Some(url) = self.queue.pop_front() {
            if aggregate.is_visited(&page_key(&url)) {
                continue;
            }
            self.dispatched += 1;
            return Some(url);
        }

        None
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn push(&mut self, url: Url) -> bool {
        if self.queued.insert(page_key(&url)) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }
}
