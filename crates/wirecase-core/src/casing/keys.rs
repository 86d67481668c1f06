//! Single-key converters between wire notation and client notation
//!
//! Both converters are pattern substitutions, not word splitters. They scan the
//! key once, left to right, and rewrite only the characters the pattern
//! matches:
//!
//! - [`key_to_client`]: `_` followed by an ASCII lowercase letter becomes that
//!   letter uppercased (`/_([a-z])/g`).
//! - [`key_to_wire`]: an ASCII uppercase letter becomes `_` plus its lowercase
//!   form (`/[A-Z]/g`).
//!
//! The two are not inverses for arbitrary strings: `key_to_wire` leaves
//! `snake_case` untouched while `key_to_client` rewrites it, and uppercase
//! wire segments such as `user_ID` grow extra underscores on the way back.
//! Only [`is_simple_wire_key`] keys are guaranteed to round trip.
//!
//! Copyright (c) 2025 Wirecase Team
//! Licensed under the Apache-2.0 license

/// Convert a wire-notation key (`created_at`) to client notation (`createdAt`)
///
/// ```
/// use wirecase_core::casing::keys::key_to_client;
///
/// assert_eq!(key_to_client("equipment_type_id"), "equipmentTypeId");
/// assert_eq!(key_to_client("trailing_"), "trailing_");
/// assert_eq!(key_to_client("__foo"), "_Foo");
/// ```
pub fn key_to_client(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Convert a client-notation key (`createdAt`) to wire notation (`created_at`)
///
/// ```
/// use wirecase_core::casing::keys::key_to_wire;
///
/// assert_eq!(key_to_wire("equipmentTypeId"), "equipment_type_id");
/// assert_eq!(key_to_wire("PascalCase"), "_pascal_case");
/// assert_eq!(key_to_wire("line2Total"), "line2_total");
/// ```
pub fn key_to_wire(key: &str) -> String {
    let uppercase = key.bytes().filter(u8::is_ascii_uppercase).count();
    if uppercase == 0 {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + uppercase);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether `key` belongs to the round-trip-safe subset of wire keys
///
/// A simple wire key is non-empty, consists of ASCII lowercase letters joined
/// by single underscores, and neither starts nor ends with an underscore.
pub fn is_simple_wire_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .split('_')
            .all(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_client_basic() {
        assert_eq!(key_to_client("created_at"), "createdAt");
        assert_eq!(key_to_client("equipment_type_id"), "equipmentTypeId");
        assert_eq!(key_to_client("name"), "name");
        assert_eq!(key_to_client(""), "");
    }

    #[test]
    fn test_key_to_client_underscore_edge_cases() {
        assert_eq!(key_to_client("trailing_"), "trailing_");
        assert_eq!(key_to_client("__foo"), "_Foo");
        assert_eq!(key_to_client("a__b"), "a_B");
        assert_eq!(key_to_client("_leading"), "Leading");
        assert_eq!(key_to_client("line_2"), "line_2");
        assert_eq!(key_to_client("_a_b"), "AB");
        assert_eq!(key_to_client("___"), "___");
    }

    #[test]
    fn test_key_to_client_leaves_uppercase_and_non_ascii_alone() {
        assert_eq!(key_to_client("user_ID"), "user_ID");
        assert_eq!(key_to_client("caf_é"), "caf_é");
        assert_eq!(key_to_client("ünï_code"), "ünïCode");
    }

    #[test]
    fn test_key_to_wire_basic() {
        assert_eq!(key_to_wire("createdAt"), "created_at");
        assert_eq!(key_to_wire("equipmentTypeId"), "equipment_type_id");
        assert_eq!(key_to_wire("name"), "name");
        assert_eq!(key_to_wire(""), "");
    }

    #[test]
    fn test_key_to_wire_keeps_reference_quirks() {
        assert_eq!(key_to_wire("PascalCase"), "_pascal_case");
        assert_eq!(key_to_wire("userID"), "user_i_d");
        assert_eq!(key_to_wire("HTML"), "_h_t_m_l");
        assert_eq!(key_to_wire("already_snake"), "already_snake");
        assert_eq!(key_to_wire("item2Count"), "item2_count");
        assert_eq!(key_to_wire("Ärger"), "Ärger");
    }

    #[test]
    fn test_converters_are_not_inverses() {
        assert_eq!(key_to_client(&key_to_wire("Id")), "Id");
        assert_eq!(key_to_wire(&key_to_client("line_2")), "line_2");
        assert_eq!(key_to_client(&key_to_wire("snake_case")), "snakeCase");
        assert_eq!(key_to_wire(&key_to_client("user_ID")), "user__i_d");
    }

    #[test]
    fn test_is_simple_wire_key() {
        assert!(is_simple_wire_key("user_name"));
        assert!(is_simple_wire_key("id"));
        assert!(!is_simple_wire_key(""));
        assert!(!is_simple_wire_key("_id"));
        assert!(!is_simple_wire_key("id_"));
        assert!(!is_simple_wire_key("a__b"));
        assert!(!is_simple_wire_key("line_2"));
        assert!(!is_simple_wire_key("userName"));
    }
}
