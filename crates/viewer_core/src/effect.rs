#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a GET for `source`; the completion comes back as a `Msg`.
    Fetch { source: crate::Source, url: String },
}
