//! Request payload parsing and boundary validation.
//!
//! Address and token-index validation happens here, at the boundary; the
//! funding core only ever sees already-validated values.

use alloy::primitives::Address;
use serde::Deserialize;
use std::str::FromStr;

/// Slack-command-style payload: everything arrives in one `text` field.
#[derive(Debug, Deserialize)]
pub struct CommandPayload {
    pub text: String,
}

pub const INVALID_ADDRESS: &str = "invalid safe address (format: <40 hex chars>)";
pub const INVALID_PARAM_NUMBER: &str = "invalid param number";
pub const INVALID_TOKEN_INDEX: &str = "invalid token index";

/// Parse a recipient address: exactly `0x` + 40 hex digits.
pub fn parse_address(text: &str) -> Option<Address> {
    let digits = text.strip_prefix("0x")?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str(text).ok()
}

/// Parse a `fund_safe` command: `"<address> <token-index>"` with the index
/// inside `[0, token_count)`. Index 0 is a valid token.
pub fn parse_safe_command(
    text: &str,
    token_count: usize,
) -> Result<(Address, usize), &'static str> {
    let params: Vec<&str> = text.split_whitespace().collect();
    if params.len() != 2 {
        return Err(INVALID_PARAM_NUMBER);
    }

    let address = parse_address(params[0]).ok_or(INVALID_ADDRESS)?;

    let index: usize = params[1].parse().map_err(|_| INVALID_TOKEN_INDEX)?;
    if index >= token_count {
        return Err(INVALID_TOKEN_INDEX);
    }

    Ok((address, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> String {
        format!("0x{}", "a".repeat(40))
    }

    #[test]
    fn test_parse_address_accepts_well_formed() {
        assert!(parse_address(&valid_address()).is_some());
        assert!(parse_address(&format!("0x{}", "AbCdEf0123".repeat(4))).is_some());
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        // wrong length
        assert!(parse_address(&format!("0x{}", "a".repeat(39))).is_none());
        assert!(parse_address(&format!("0x{}", "a".repeat(41))).is_none());
        // missing prefix
        assert!(parse_address(&"a".repeat(42)).is_none());
        // non-hex characters
        assert!(parse_address(&format!("0x{}", "g".repeat(40))).is_none());
        assert!(parse_address("").is_none());
        assert!(parse_address("0x").is_none());
    }

    #[test]
    fn test_safe_command_happy_path() {
        let (address, index) =
            parse_safe_command(&format!("{} 1", valid_address()), 3).unwrap();
        assert_eq!(index, 1);
        assert_eq!(address, parse_address(&valid_address()).unwrap());
    }

    #[test]
    fn test_safe_command_accepts_index_zero() {
        let (_, index) = parse_safe_command(&format!("{} 0", valid_address()), 3).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_safe_command_param_count() {
        assert_eq!(
            parse_safe_command(&valid_address(), 3),
            Err(INVALID_PARAM_NUMBER)
        );
        assert_eq!(
            parse_safe_command(&format!("{} 1 extra", valid_address()), 3),
            Err(INVALID_PARAM_NUMBER)
        );
        assert_eq!(parse_safe_command("", 3), Err(INVALID_PARAM_NUMBER));
    }

    #[test]
    fn test_safe_command_bad_address() {
        assert_eq!(parse_safe_command("0x1234 1", 3), Err(INVALID_ADDRESS));
    }

    #[test]
    fn test_safe_command_bad_index() {
        let address = valid_address();
        assert_eq!(
            parse_safe_command(&format!("{address} 3"), 3),
            Err(INVALID_TOKEN_INDEX)
        );
        assert_eq!(
            parse_safe_command(&format!("{address} -1"), 3),
            Err(INVALID_TOKEN_INDEX)
        );
        assert_eq!(
            parse_safe_command(&format!("{address} two"), 3),
            Err(INVALID_TOKEN_INDEX)
        );
    }
}
