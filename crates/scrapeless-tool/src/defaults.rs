//! Default resolution for optional tool parameters
//!
//! Every optional input field is an `Option<T>`; both a missing key and an
//! explicit JSON `null` deserialize to `None` and resolve to the declared default.

/// Return the supplied value, or `default` when the caller left it unset.
pub fn or_default<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}
