/// Identification of a use case for page headers and page ids
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "simulate_upload"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_simulate_upload"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
