/// Outcome of a single fetch-and-extract run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchReport {
    pub files_written: usize,
}
