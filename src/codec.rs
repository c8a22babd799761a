/// Bijective base-26 codec between pair ids and liquidity-token symbol
/// suffixes: digits `A..Z` map to `1..26`, most significant first, so
/// `"GL"` is `7 * 26 + 12 = 194`. Zero and the empty suffix are the
/// invalid sentinels of each other.
///
/// The fixed symbol prefix (see `LP_TOKEN_PREFIX`) is caller territory:
/// `decode_pool_id` strips and validates it, `encode_pool_id` never adds
/// one.

/// Decode a liquidity-token symbol code into its pair id. Returns the `0`
/// sentinel when the prefix is missing, the suffix is empty, a non-`A..Z`
/// character appears, or the id overflows.
pub fn decode_pool_id(code: &str, prefix: &str) -> u64 {
    let Some(suffix) = code.strip_prefix(prefix) else {
        return 0;
    };

    let mut id: u64 = 0;
    for byte in suffix.bytes() {
        if !byte.is_ascii_uppercase() {
            return 0;
        }
        let digit = u64::from(byte - b'A' + 1);
        id = match id.checked_mul(26).and_then(|value| value.checked_add(digit)) {
            Some(value) => value,
            None => return 0,
        };
    }
    id
}

/// Encode a pair id as a symbol suffix. Returns the empty string for the
/// `0` sentinel.
pub fn encode_pool_id(mut id: u64) -> String {
    let mut digits = Vec::new();
    while id > 0 {
        let remainder = (id % 26) as u8;
        if remainder == 0 {
            digits.push('Z');
            id = id / 26 - 1;
        } else {
            digits.push(char::from(b'A' + remainder - 1));
            id /= 26;
        }
    }
    digits.iter().rev().collect()
}
