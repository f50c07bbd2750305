//! Splitting a fetch batch into its Pending and Completed halves.

use api_types::transaction::{TransactionRecord, TransactionStatus};

/// Partitions records by status, preserving relative order within each
/// half.
///
/// Records whose status code is unrecognized are silently dropped from
/// both outputs, never reported as an error: a transaction the screen
/// cannot place in either section is simply not shown.
#[must_use]
pub fn partition_by_status(
    records: Vec<TransactionRecord>,
) -> (Vec<TransactionRecord>, Vec<TransactionRecord>) {
    let mut pending = Vec::new();
    let mut completed = Vec::new();

    for record in records {
        match record.status() {
            Some(TransactionStatus::Pending) => pending.push(record),
            Some(TransactionStatus::Completed) => completed.push(record),
            None => {}
        }
    }

    (pending, completed)
}

#[cfg(test)]
mod tests {
    use api_types::transaction::{TransactionAmount, TransactionRecord};

    use super::partition_by_status;

    fn record(id: &str, state: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            description: "test".to_string(),
            credit_debit_indicator: "CRDT".to_string(),
            creation_time: "2019-05-15T10:00:00".to_string(),
            state: state.to_string(),
            transaction_amount_currency: TransactionAmount {
                amount: "1.00".to_string(),
                currency_code: "EUR".to_string(),
            },
        }
    }

    #[test]
    fn splits_by_status_preserving_order() {
        let records = vec![
            record("a", "COMPLETED"),
            record("b", "PENDING"),
            record("c", "COMPLETED"),
            record("d", "PENDING"),
        ];

        let (pending, completed) = partition_by_status(records);

        let ids = |records: &[TransactionRecord]| {
            records.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&pending), ["b", "d"]);
        assert_eq!(ids(&completed), ["a", "c"]);
    }

    #[test]
    fn unrecognized_status_is_dropped_without_error() {
        let records = vec![
            record("a", "BOOKED"),
            record("b", "PENDING"),
            record("c", ""),
        ];

        let (pending, completed) = partition_by_status(records);

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "b");
        assert!(completed.is_empty());
    }
}
