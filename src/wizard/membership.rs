/// Derives the human-presentable membership reservation number shown to an
/// applicant after submission.
///
/// The identifier is a best-effort fingerprint, not a unique key: the
/// applicant's name, email and the submission timestamp are folded through a
/// 32-bit signed accumulator (`hash * 31 + code_unit`, wrapping on every
/// step), and the absolute value is rendered as a zero-padded decimal.
/// Values wider than 8 digits are kept as-is, producing a longer identifier.
pub fn generate_membership_id(
    first_name: &str,
    last_name: &str,
    email: &str,
    timestamp_millis: i64,
) -> String {
    let seed = format!("{first_name}{last_name}{email}{timestamp_millis}");

    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }

    format!("VR-{:08}", hash.unsigned_abs())
}
