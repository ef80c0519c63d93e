//! Record assembly and batch generation.
//!
//! Per record index the generator derives three streams and draws from them
//! in a fixed order:
//!
//! 1. Likes stream: one draw for the like count.
//! 2. Content stream: ISBN (4 draws), title, authors, publisher.
//! 3. Reviews stream: one draw for the review count, then per review the
//!    text followed by the author.
//!
//! Nothing carries over between indices, so any slice of the index space can
//! be produced on its own, in any order, on any thread.

use std::ops::Range;

use crate::book::{Book, GenerationRequest, Review};
use crate::locale::{isbn, LocaleRegistry, TemplateSet};
use crate::rng::RecordRng;
use crate::sampler::sample_from;
use crate::seed::{derive, Purpose};

/// Produces books for one (seed, locale, averages) configuration.
#[derive(Clone, Copy)]
pub struct BookGenerator<'a> {
    templates: &'a dyn TemplateSet,
    seed: u64,
    average_likes: f64,
    average_reviews: f64,
}

impl BookGenerator<'static> {
    /// Uses the built-in locale registry.
    pub fn new(request: &GenerationRequest) -> Self {
        Self::with_registry(request, LocaleRegistry::builtin())
    }
}

impl<'a> BookGenerator<'a> {
    pub fn with_registry(request: &GenerationRequest, registry: &'a LocaleRegistry) -> Self {
        Self {
            templates: registry.resolve(&request.locale),
            seed: request.seed,
            average_likes: request.average_likes,
            average_reviews: request.average_reviews,
        }
    }

    /// Tag of the template set actually in use, after fallback.
    pub fn locale(&self) -> &'static str {
        self.templates.tag()
    }

    fn stream(&self, index: u64, purpose: Purpose) -> RecordRng {
        RecordRng::from_seed(derive(self.seed, index, purpose))
    }

    /// The record at 0-based `index`.
    pub fn book(&self, index: u64) -> Book {
        let mut likes_rng = self.stream(index, Purpose::Likes);
        let likes = sample_from(self.average_likes, &mut likes_rng);

        let mut content = self.stream(index, Purpose::Content);
        let isbn = isbn(&mut content);
        let title = self.templates.title(&mut content);
        let authors = self.templates.authors(&mut content);
        let publisher = self.templates.publisher(&mut content);

        let mut reviews_rng = self.stream(index, Purpose::Reviews);
        let reviews = self.reviews(&mut reviews_rng);

        Book {
            absolute_index: index.saturating_add(1),
            isbn,
            title,
            authors,
            publisher,
            likes,
            reviews,
        }
    }

    fn reviews(&self, rng: &mut RecordRng) -> Vec<Review> {
        let count = sample_from(self.average_reviews, rng);
        (0..count)
            .map(|_| {
                let text = self.templates.review_text(rng);
                let author = self.templates.review_author(rng);
                Review { text, author }
            })
            .collect()
    }

    /// Records for every index in `indices`, in index order.
    pub fn books(&self, indices: Range<u64>) -> Vec<Book> {
        indices.map(|index| self.book(index)).collect()
    }
}

/// Generates the records a request covers, sequentially.
pub fn generate(request: &GenerationRequest) -> Vec<Book> {
    let generator = BookGenerator::new(request);
    tracing::debug!(
        locale = generator.locale(),
        seed = request.seed,
        start = request.start,
        count = request.count,
        "generating books"
    );
    generator.books(request.indices())
}

/// Generates the records a request covers on up to `workers` threads.
///
/// The output is identical to [`generate`].
pub fn generate_parallel(request: &GenerationRequest, workers: usize) -> Vec<Book> {
    let generator = BookGenerator::new(request);
    let indices = request.indices();
    let total = (indices.end - indices.start) as usize;
    let workers = workers.clamp(1, total.max(1));

    tracing::debug!(
        locale = generator.locale(),
        seed = request.seed,
        start = request.start,
        count = request.count,
        workers,
        "generating books in parallel"
    );

    if workers == 1 {
        return generator.books(indices);
    }

    let chunk = total.div_ceil(workers) as u64;
    let generator = &generator;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers as u64)
            .map(|worker| {
                let lo = indices.start.saturating_add(worker * chunk).min(indices.end);
                let hi = lo.saturating_add(chunk).min(indices.end);
                scope.spawn(move || generator.books(lo..hi))
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{de_de, ja_jp, DEFAULT_LOCALE};

    fn request(locale: &str, start: u64, count: u32) -> GenerationRequest {
        GenerationRequest {
            locale: locale.to_string(),
            seed: 42,
            average_likes: 5.0,
            average_reviews: 3.0,
            start,
            count,
        }
    }

    fn is_isbn_shaped(value: &str) -> bool {
        let bytes = value.as_bytes();
        let pattern = b"978-D-DD-DDDDDD-D";
        bytes.len() == pattern.len()
            && bytes.iter().zip(pattern.iter()).all(|(&b, &p)| match p {
                b'D' => b.is_ascii_digit(),
                literal => b == literal,
            })
    }

    #[test]
    fn pinned_scenario_is_self_consistent() {
        let request = request("en-US", 0, 1);
        let first = generate(&request);
        let second = generate(&request);
        assert_eq!(first, second);
        assert_eq!(first, generate_parallel(&request, 4));

        let book = &first[0];
        assert_eq!(book.absolute_index, 1);
        assert_eq!(book.likes, 5);
        assert_eq!(book.reviews.len(), 3);
        assert!(is_isbn_shaped(&book.isbn), "{}", book.isbn);
        assert!((1..=3).contains(&book.authors.len()));
        assert!(!book.title.is_empty());
        assert!(!book.publisher.is_empty());
    }

    #[test]
    fn golden_record_is_stable() {
        let book = &generate(&request("en-US", 0, 1))[0];
        assert_eq!(book.absolute_index, 1);
        assert_eq!(book.isbn, "978-4-98-712742-1");
        assert_eq!(book.title, "The Harbor Machine");
        assert_eq!(
            book.authors,
            vec!["Linda Wright", "Lisa Williams", "Donna Walker"]
        );
        assert_eq!(book.publisher, "Taylor Publishing");
        assert_eq!(book.likes, 5);
        assert_eq!(book.reviews.len(), 3);

        // Same content stream, different templates.
        let book = &generate(&request(ja_jp::TAG, 0, 1))[0];
        assert_eq!(book.isbn, "978-4-98-712742-1");
        assert_eq!(book.title, "物語の炎");
        assert_eq!(book.publisher, "山田書房");
        assert!(
            book.reviews.iter().any(|review| review.author == "中村 花."),
            "{:?}",
            book.reviews
        );
    }

    #[test]
    fn same_index_same_book_across_generators() {
        let a = BookGenerator::new(&request("de-DE", 0, 1));
        let b = BookGenerator::new(&request("de-DE", 900, 1));
        for index in [0, 1, 17, 5_000, u64::MAX - 1] {
            assert_eq!(a.book(index), b.book(index));
        }
    }

    #[test]
    fn record_does_not_depend_on_batch_start() {
        let whole = generate(&request("en-US", 0, 30));
        let window = generate(&request("en-US", 10, 5));
        assert_eq!(&whole[10..15], window.as_slice());
    }

    #[test]
    fn batches_concatenate_to_whole_range() {
        let total = 25u32;
        let whole = generate(&request("ja-JP", 0, total));
        for split in 1..total {
            let mut joined = generate(&request("ja-JP", 0, split));
            joined.extend(generate(&request("ja-JP", u64::from(split), total - split)));
            assert_eq!(joined, whole, "split at {split}");
        }
    }

    #[test]
    fn first_record_carries_start_plus_one() {
        for start in [0u64, 1, 49, 1_000_000] {
            let books = generate(&request("en-US", start, 3));
            assert_eq!(books[0].absolute_index, start + 1);
            assert_eq!(books[2].absolute_index, start + 3);
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let request = request("de-DE", 123, 37);
        let sequential = generate(&request);
        for workers in [0, 1, 2, 3, 8, 64] {
            assert_eq!(generate_parallel(&request, workers), sequential, "{workers} workers");
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_default_templates() {
        let fallback = generate(&request("xx-YY", 0, 10));
        let default = generate(&request(DEFAULT_LOCALE, 0, 10));
        assert_eq!(fallback, default);
        assert_eq!(BookGenerator::new(&request("xx-YY", 0, 1)).locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn every_isbn_is_shaped() {
        for locale in ["en-US", "de-DE", "ja-JP"] {
            for book in generate(&request(locale, 0, 50)) {
                assert!(is_isbn_shaped(&book.isbn), "{}", book.isbn);
            }
        }
    }

    #[test]
    fn locale_templates_reach_the_record() {
        let de = de_de::templates();
        for book in generate(&request("de-DE", 0, 20)) {
            assert!(de
                .publisher_suffixes
                .iter()
                .any(|suffix| book.publisher.ends_with(&format!(" {suffix}"))));
        }

        let ja = ja_jp::templates();
        for book in generate(&request("ja-JP", 0, 20)) {
            assert!(ja.publisher_suffixes.iter().any(|suffix| book.publisher.ends_with(suffix)));
            for review in &book.reviews {
                assert!(review.text.ends_with('。'));
            }
        }
    }

    #[test]
    fn zero_rates_give_no_likes_or_reviews() {
        let mut request = request("en-US", 0, 50);
        request.average_likes = 0.0;
        request.average_reviews = 0.0;
        for book in generate(&request) {
            assert_eq!(book.likes, 0);
            assert!(book.reviews.is_empty());
        }
    }

    #[test]
    fn negative_rates_degrade_to_zero() {
        let mut request = request("en-US", 0, 5);
        request.average_likes = -2.0;
        request.average_reviews = -0.5;
        for book in generate(&request) {
            assert_eq!(book.likes, 0);
            assert!(book.reviews.is_empty());
        }
    }

    #[test]
    fn streams_are_independent_of_other_rates() {
        let base = request("en-US", 0, 20);
        let mut more_reviews = base.clone();
        more_reviews.average_reviews = 7.5;
        let mut fewer_likes = base.clone();
        fewer_likes.average_likes = 0.5;

        let base_books = generate(&base);
        for (left, right) in base_books.iter().zip(generate(&more_reviews)) {
            assert_eq!(left.isbn, right.isbn);
            assert_eq!(left.title, right.title);
            assert_eq!(left.authors, right.authors);
            assert_eq!(left.publisher, right.publisher);
            assert_eq!(left.likes, right.likes);
        }
        for (left, right) in base_books.iter().zip(generate(&fewer_likes)) {
            assert_eq!(left.title, right.title);
            assert_eq!(left.reviews, right.reviews);
        }
    }

    #[test]
    fn fractional_rate_varies_review_counts() {
        let mut request = request("en-US", 0, 50);
        request.average_reviews = 1.5;
        let counts: Vec<usize> = generate(&request).iter().map(|book| book.reviews.len()).collect();
        assert!(counts.iter().all(|count| *count == 1 || *count == 2));
        assert!(counts.contains(&1) && counts.contains(&2));
    }

    #[test]
    fn seeds_change_content() {
        let mut other = request("en-US", 0, 10);
        other.seed = 43;
        let a = generate(&request("en-US", 0, 10));
        let b = generate(&other);
        assert!(a.iter().zip(&b).any(|(left, right)| left.isbn != right.isbn));
    }
}
