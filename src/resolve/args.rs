// src/resolve/args.rs

/// Join argument tokens into the tail of a shell command line.
///
/// Every token is followed by a single space, the last one included, so
/// `["a", "b"]` becomes `"a b "` and no arguments give `""`. Tokens are
/// passed through verbatim: no quoting, no escaping.
pub fn serialize(args: &[String]) -> String {
    args.iter().map(|arg| format!("{arg} ")).collect()
}
