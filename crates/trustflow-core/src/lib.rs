//! Core reconciliation pipeline.
//!
//! Three stages over in-memory frames: flatten the wide topic/value pairs of
//! a metrics export into a filtered long-form table ([`extract`]), derive a
//! canonical join key from heterogeneous URL/domain strings ([`normalize`]),
//! and reconcile the long-form table against a link export with a
//! deduplicating left join plus a derived ratio ([`reconcile`]).
//!
//! Every operation is a pure function of its inputs; no stage mutates a
//! frame it did not construct.

pub mod extract;
pub mod normalize;
pub mod ratio;
pub mod reconcile;

pub use extract::{ExtractOptions, extract_topic_matches};
pub use normalize::{normalize_cell_domain, normalize_domain};
pub use ratio::compute_ratio;
pub use reconcile::{ReconcileOptions, dedupe_links_by_domain, reconcile_links};
