pub static ERROR_NOT_AN_ORACLE: &[u8] = b"Only whitelisted oracles allowed";
pub static ERROR_INVALID_QUORUM: &[u8] = b"Invalid quorum";
pub static ERROR_TIMESTAMP_IN_FUTURE: &[u8] = b"Timestamp is from the future";
pub static ERROR_SUBMISSION_TOO_OLD: &[u8] = b"Submission too old";
pub static ERROR_NO_ROUND: &[u8] = b"No completed round for this pair";
pub static ERROR_ZERO_PRICE: &[u8] = b"Price must be greater than zero";
