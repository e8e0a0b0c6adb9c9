//! String transforms

/// Upper-case every item, keeping order
pub fn uppercase_all<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(item.as_ref().to_uppercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_keeps_order_and_length() {
        let out = uppercase_all(&["alpha", "Beta", "", "gAmMa"]);
        assert_eq!(out, vec!["ALPHA", "BETA", "", "GAMMA"]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(uppercase_all(&empty).is_empty());
    }

    #[test]
    fn test_unicode() {
        assert_eq!(uppercase_all(&[String::from("straße")]), vec!["STRASSE"]);
    }
}
