use serde::Serialize;

/// Header counters, always computed over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub present_count: usize,
    pub today_count: usize,
}
