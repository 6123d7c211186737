// 🔤 String / number checks

/// Exact equality with the reversed string (by `char`).
/// Case-sensitive, whitespace and punctuation count. Empty string is a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

pub fn is_divisible_by_three(n: i64) -> bool {
    n % 3 == 0
}
