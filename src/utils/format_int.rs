/// Formats `value` with `'` between groups of three digits: `1234567` -> `1'234'567`.
pub fn with_delimiters(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push('\'');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::with_delimiters;

    #[test]
    fn test_with_delimiters() {
        assert_eq!(with_delimiters(0), "0");
        assert_eq!(with_delimiters(999), "999");
        assert_eq!(with_delimiters(1000), "1'000");
        assert_eq!(with_delimiters(1234567), "1'234'567");
    }
}
