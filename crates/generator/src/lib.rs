//! Deterministic, index-addressed generation of synthetic book records.
//!
//! A record is a pure function of `(seed, locale, average likes, average
//! reviews, record index)`. Batches are just ranges of indices, so a client
//! paging through the catalogue sees the same record at the same position no
//! matter how it chunks its requests.
//!
//! ```text
//! (seed, index) ──► seed::derive ──► Content ─► RecordRng ─► locale templates ─┐
//!                               ├──► Likes   ─► RecordRng ─► sampler ───────────┼─► Book
//!                               └──► Reviews ─► RecordRng ─► sampler + reviews ─┘
//! ```

pub mod book;
pub mod generator;
pub mod locale;
pub mod rng;
pub mod sampler;
pub mod seed;

pub use book::{Book, GenerationRequest, Review};
pub use generator::{generate, generate_parallel, BookGenerator};
pub use locale::{LocaleRegistry, TemplateSet, DEFAULT_LOCALE};
pub use rng::RecordRng;
pub use seed::{derive, Purpose, DERIVATION_VERSION};
