//! Human-readable student codes of the form `{PREFIX}-{n}`.

/// First sequence number issued under a prefix.
pub const FIRST_SEQUENCE: u64 = 101;

/// Numeric suffix of `code` if it is `{prefix}-{digits}`.
pub fn sequence_of(code: &str, prefix: &str) -> Option<u64> {
    code.strip_prefix(prefix)?
        .strip_prefix('-')
        .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))?
        .parse()
        .ok()
}

/// Next code after the numeric maximum of `existing`. Non-matching codes are ignored.
/// Suffixes too long for `u64` never parse, so the increment cannot wrap back
/// onto an issued code.
///
/// ```
/// use hostel_domain::student_code::next_student_code;
///
/// assert_eq!(next_student_code("AH26", Vec::<&str>::new()), "AH26-101");
/// assert_eq!(next_student_code("AH26", ["AH26-101", "AH26-999", "AH26-1000"]), "AH26-1001");
/// ```
pub fn next_student_code<I, S>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let next = existing
        .into_iter()
        .filter_map(|code| sequence_of(code.as_ref(), prefix))
        .max()
        .map_or(FIRST_SEQUENCE, |max| max.saturating_add(1).max(FIRST_SEQUENCE));
    format!("{prefix}-{next}")
}
