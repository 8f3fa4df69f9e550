/// Upper bound for the quorum, and so for the prices buffered per round
pub const MAX_QUORUM: usize = 50;
/// How far behind the block an oracle's own timestamp may lag
pub const MAX_SUBMISSION_AGE_SECONDS: u64 = 30;
/// An open round older than this is dropped by the next submission
pub const MAX_ROUND_DURATION_SECONDS: u64 = 1_800;
