//! Display summary for one cluster of transactions.

use api_types::transaction::{Direction, TransactionRecord, TransactionStatus};

use crate::money::format_currency;

/// Layout of the formatted date, e.g. `Wednesday, May 15, 2019`.
const DISPLAY_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Color selection for a group's amount text.
///
/// The renderer decides the concrete style; the engine only picks the
/// tone from the first member's direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountTone {
    Positive,
    Default,
}

/// One renderable row: the records sharing a (direction, day) key plus
/// the display fields derived from them.
///
/// Every derived field is computed from the members on demand, as a pure
/// function. Fields whose inputs are missing or malformed come back as
/// `None` (or a reduced string), never as an error and never as a
/// placeholder default.
#[derive(Clone, Debug, PartialEq)]
pub struct RowGroup {
    members: Vec<TransactionRecord>,
}

impl RowGroup {
    /// Builds a row group from the members of one grouping cluster, in
    /// fetch order.
    #[must_use]
    pub fn new(members: Vec<TransactionRecord>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn members(&self) -> &[TransactionRecord] {
        &self.members
    }

    /// Member count with the first member's direction label, e.g.
    /// `2 Credit`. Just the bare count when the first member has no
    /// recognizable direction.
    #[must_use]
    pub fn count_label(&self) -> String {
        let count = self.members.len().to_string();
        match self.first_direction() {
            Some(direction) => format!("{count} {}", direction_label(direction)),
            None => count,
        }
    }

    /// All member descriptions joined with a newline, in member order.
    #[must_use]
    pub fn description(&self) -> String {
        self.members
            .iter()
            .map(|record| record.description.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summed amount with sign annotation and currency formatting.
    ///
    /// The sum covers every member whose amount string parses; members
    /// with unparsable amounts contribute nothing and raise no error.
    /// Formatting uses the first member's currency code. Absent entirely
    /// when the first member has no direction.
    #[must_use]
    pub fn amount(&self) -> Option<String> {
        let first = self.members.first()?;
        let direction = first.direction()?;

        let total: f64 = self
            .members
            .iter()
            .filter_map(|record| record.transaction_amount_currency.amount.parse::<f64>().ok())
            .sum();
        let formatted =
            format_currency(total, &first.transaction_amount_currency.currency_code);

        Some(format!("{}{formatted}", direction_annotation(direction)))
    }

    /// Tone for the amount text: credits are highlighted, everything
    /// else renders in the default text style.
    #[must_use]
    pub fn tone(&self) -> AmountTone {
        match self.first_direction() {
            Some(Direction::Credit) => AmountTone::Positive,
            Some(Direction::Debit) | None => AmountTone::Default,
        }
    }

    /// Icon selection: the first member's direction, if it has one.
    #[must_use]
    pub fn marker(&self) -> Option<Direction> {
        self.first_direction()
    }

    /// Section-title text from the first member's status.
    #[must_use]
    pub fn title(&self) -> Option<&'static str> {
        self.members.first()?.status().map(status_title)
    }

    /// First member's occurrence date as a long date string, absent when
    /// its timestamp failed to parse.
    #[must_use]
    pub fn date(&self) -> Option<String> {
        let occurred = self.members.first()?.occurred_at()?;
        Some(occurred.format(DISPLAY_DATE_FORMAT).to_string())
    }

    fn first_direction(&self) -> Option<Direction> {
        self.members.first()?.direction()
    }
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Credit => "Credit",
        Direction::Debit => "Debit",
    }
}

fn direction_annotation(direction: Direction) -> &'static str {
    match direction {
        Direction::Credit => "+",
        Direction::Debit => "-",
    }
}

fn status_title(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "Pending",
        TransactionStatus::Completed => "Completed",
    }
}

#[cfg(test)]
mod tests {
    use api_types::transaction::{TransactionAmount, TransactionRecord};

    use super::{AmountTone, RowGroup};

    fn record(indicator: &str, state: &str, time: &str, amount: &str) -> TransactionRecord {
        TransactionRecord {
            id: "id".to_string(),
            description: "desc".to_string(),
            credit_debit_indicator: indicator.to_string(),
            creation_time: time.to_string(),
            state: state.to_string(),
            transaction_amount_currency: TransactionAmount {
                amount: amount.to_string(),
                currency_code: "EUR".to_string(),
            },
        }
    }

    #[test]
    fn count_label_includes_direction_of_first_member() {
        let group = RowGroup::new(vec![
            record("DBIT", "COMPLETED", "2019-05-15T10:00:00", "5.00"),
            record("DBIT", "COMPLETED", "2019-05-15T11:00:00", "2.50"),
        ]);

        assert_eq!(group.count_label(), "2 Debit");
    }

    #[test]
    fn count_label_is_bare_without_direction() {
        let group = RowGroup::new(vec![record(
            "????",
            "COMPLETED",
            "2019-05-15T10:00:00",
            "5.00",
        )]);

        assert_eq!(group.count_label(), "1");
    }

    #[test]
    fn descriptions_join_with_newlines_in_member_order() {
        let mut a = record("CRDT", "PENDING", "2019-05-15T10:00:00", "1.00");
        a.description = "Rent".to_string();
        let mut b = record("CRDT", "PENDING", "2019-05-15T11:00:00", "2.00");
        b.description = "Groceries".to_string();
        let group = RowGroup::new(vec![a, b]);

        assert_eq!(group.description(), "Rent\nGroceries");
    }

    #[test]
    fn amount_sums_members_and_annotates_debit() {
        let group = RowGroup::new(vec![
            record("DBIT", "COMPLETED", "2019-05-15T10:00:00", "5.00"),
            record("DBIT", "COMPLETED", "2019-05-15T11:00:00", "2.50"),
        ]);

        assert_eq!(group.amount().as_deref(), Some("-€7.5"));
    }

    #[test]
    fn unparsable_amounts_are_excluded_from_the_sum() {
        let group = RowGroup::new(vec![
            record("CRDT", "COMPLETED", "2019-05-15T10:00:00", "10.00"),
            record("CRDT", "COMPLETED", "2019-05-15T11:00:00", "not a number"),
            record("CRDT", "COMPLETED", "2019-05-15T12:00:00", "5.00"),
        ]);

        assert_eq!(group.amount().as_deref(), Some("+€15"));
    }

    #[test]
    fn amount_is_absent_without_a_direction() {
        let group = RowGroup::new(vec![record(
            "????",
            "COMPLETED",
            "2019-05-15T10:00:00",
            "5.00",
        )]);

        assert_eq!(group.amount(), None);
    }

    #[test]
    fn tone_and_marker_follow_first_member() {
        let credit = RowGroup::new(vec![record("CRDT", "PENDING", "2019-05-15T10:00:00", "1")]);
        let debit = RowGroup::new(vec![record("DBIT", "PENDING", "2019-05-15T10:00:00", "1")]);
        let none = RowGroup::new(vec![record("????", "PENDING", "2019-05-15T10:00:00", "1")]);

        assert_eq!(credit.tone(), AmountTone::Positive);
        assert_eq!(debit.tone(), AmountTone::Default);
        assert_eq!(none.tone(), AmountTone::Default);
        assert!(none.marker().is_none());
    }

    #[test]
    fn title_maps_status_and_degrades_to_none() {
        let pending = RowGroup::new(vec![record("CRDT", "PENDING", "2019-05-15T10:00:00", "1")]);
        let unknown = RowGroup::new(vec![record("CRDT", "BOOKED", "2019-05-15T10:00:00", "1")]);

        assert_eq!(pending.title(), Some("Pending"));
        assert_eq!(unknown.title(), None);
    }

    #[test]
    fn date_formats_long_and_degrades_to_none() {
        let dated = RowGroup::new(vec![record("CRDT", "PENDING", "2019-05-15T10:00:00", "1")]);
        let undated = RowGroup::new(vec![record("CRDT", "PENDING", "yesterday", "1")]);

        assert_eq!(dated.date().as_deref(), Some("Wednesday, May 15, 2019"));
        assert_eq!(undated.date(), None);
    }
}
