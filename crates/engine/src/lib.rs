//! Grouping and aggregation core for the transactions screen.
//!
//! Takes the raw records one fetch returned and turns them into the
//! sectioned, summarized shape the renderer asks for:
//!
//! 1. [`partition_by_status`] splits records into Pending and Completed,
//!    dropping records with no recognized status.
//! 2. [`grouping`] clusters each partition by (direction, calendar day)
//!    and sorts the clusters, most recent day first.
//! 3. [`RowGroup`] derives the display fields for one cluster.
//! 4. [`TransactionsList`] assembles the sections and answers the
//!    renderer's count/title/row queries.
//!
//! Everything here is synchronous, pure, and infallible: a malformed
//! field on a record degrades that record's derived fields to absent
//! and never affects the rest of the batch.

pub mod grouping;
pub mod list;
pub mod money;
pub mod partition;
pub mod row_group;

pub use grouping::{GroupKey, group_records};
pub use list::TransactionsList;
pub use money::format_currency;
pub use partition::partition_by_status;
pub use row_group::{AmountTone, RowGroup};
