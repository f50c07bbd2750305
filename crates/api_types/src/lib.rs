use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub mod transaction {
    use super::*;

    /// Timestamp layout used on the wire. No zone marker: values are
    /// interpreted as wall-clock time in the consuming process's zone.
    const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Whether a transaction moves money into or out of the account.
    ///
    /// Decoded from the two-letter wire codes `CRDT` and `DBIT`. Any other
    /// code decodes to `None` rather than failing the record.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum Direction {
        Credit,
        Debit,
    }

    impl Direction {
        /// Decodes the wire code, `None` for anything unrecognized.
        #[must_use]
        pub fn from_code(code: &str) -> Option<Self> {
            match code {
                "CRDT" => Some(Self::Credit),
                "DBIT" => Some(Self::Debit),
                _ => None,
            }
        }

        /// Canonical wire code. Also the sort key for direction ties:
        /// `"CRDT" < "DBIT"` lexically.
        #[must_use]
        pub const fn as_code(self) -> &'static str {
            match self {
                Self::Credit => "CRDT",
                Self::Debit => "DBIT",
            }
        }
    }

    /// Processing state of a transaction.
    ///
    /// Decoded from the wire codes `PENDING` and `COMPLETED`; unrecognized
    /// codes decode to `None`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum TransactionStatus {
        Pending,
        Completed,
    }

    impl TransactionStatus {
        /// Decodes the wire code, `None` for anything unrecognized.
        #[must_use]
        pub fn from_code(code: &str) -> Option<Self> {
            match code {
                "PENDING" => Some(Self::Pending),
                "COMPLETED" => Some(Self::Completed),
                _ => None,
            }
        }
    }

    /// Amount and currency pair as sent on the wire.
    ///
    /// The amount stays a string here: it is only parsed to a number during
    /// aggregation, and records whose amount fails to parse are skipped
    /// there instead of poisoning the whole batch.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionAmount {
        pub amount: String,
        #[serde(rename = "currencyCode")]
        pub currency_code: String,
    }

    /// One transaction as decoded from the wire.
    ///
    /// The response payload is a JSON array of these objects. Enum-like
    /// fields are kept as raw strings and decoded on demand through the
    /// accessor methods, so a bad code in one field degrades that field to
    /// absent without rejecting the record or the payload.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionRecord {
        /// Opaque identifier, unique within one fetch (never enforced).
        pub id: String,
        pub description: String,
        pub credit_debit_indicator: String,
        pub creation_time: String,
        pub state: String,
        pub transaction_amount_currency: TransactionAmount,
    }

    impl TransactionRecord {
        /// Typed credit/debit indicator, `None` when the wire code is
        /// unrecognized.
        #[must_use]
        pub fn direction(&self) -> Option<Direction> {
            Direction::from_code(&self.credit_debit_indicator)
        }

        /// Typed status, `None` when the wire code is unrecognized.
        #[must_use]
        pub fn status(&self) -> Option<TransactionStatus> {
            TransactionStatus::from_code(&self.state)
        }

        /// Creation time parsed as local wall-clock, `None` when the wire
        /// string does not match the expected layout.
        #[must_use]
        pub fn occurred_at(&self) -> Option<NaiveDateTime> {
            NaiveDateTime::parse_from_str(&self.creation_time, WIRE_TIME_FORMAT).ok()
        }

        /// Creation time with the time of day dropped.
        #[must_use]
        pub fn calendar_day(&self) -> Option<NaiveDate> {
            self.occurred_at().map(|time| time.date())
        }
    }

}
