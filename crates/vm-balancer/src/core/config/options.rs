//! Config value utils.

/// Splits config value string into algorithm name and options string.
/// Example: `LeastLoaded[opt=1]` is split into `LeastLoaded` and `opt=1`.
pub fn parse_config_value(config_str: &str) -> (String, Option<String>) {
    match config_str.split_once('[') {
        Some((l, r)) => (l.to_string(), Some(r.replace(']', ""))),
        None => (config_str.to_string(), None),
    }
}
