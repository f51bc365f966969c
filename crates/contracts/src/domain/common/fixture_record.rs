/// Static naming shared by every fixture-backed record type.
///
/// `full_name()` is the entity half of a page id (`a002_case--list`) and
/// `list_name()` is the heading of the page or card listing the records.
pub trait FixtureRecord {
    /// Index of the record type (for example, "a002")
    fn fixture_index() -> &'static str;

    /// Technical name (for example, "case")
    fn collection_name() -> &'static str;

    /// Plural display name (for example, "Case Tracker")
    fn list_name() -> &'static str;

    /// Full name of the form "a002_case"
    fn full_name() -> String {
        format!("{}_{}", Self::fixture_index(), Self::collection_name())
    }
}
