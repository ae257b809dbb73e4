//! Turns a port-name list into TypeScript union-type text.

/// Empty → `never`; one name → a single quoted literal; several → a
/// pipe-delimited union in input order. Duplicates each produce their own
/// term.
pub fn synthesize(names: &[String]) -> String {
    match names {
        [] => "never".to_string(),
        [name] => format!("'{name}'"),
        names => names
            .iter()
            .map(|name| format!("'{name}'"))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}
