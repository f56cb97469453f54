//! Cardinal number to English words conversion.

const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words, largest first. Covers the full i64 range.
const SCALES: &[(u64, &str)] = &[
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Convert a number below 1000 to words.
fn hundreds_to_words(n: u64) -> String {
    let mut parts = Vec::new();

    let h = (n / 100) as usize;
    if h > 0 {
        parts.push(format!("{} hundred", ONES[h]));
    }

    let remainder = (n % 100) as usize;
    if remainder > 0 {
        if remainder < 20 {
            parts.push(ONES[remainder].to_string());
        } else {
            let tens = remainder / 10;
            let ones = remainder % 10;
            if ones > 0 {
                parts.push(format!("{}-{}", TENS[tens], ONES[ones]));
            } else {
                parts.push(TENS[tens].to_string());
            }
        }
    }

    parts.join(" ")
}

/// Convert a number to English cardinal words.
pub fn num_to_words(num: i64) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let mut parts = Vec::new();
    // unsigned_abs keeps i64::MIN from overflowing on negation
    let mut n = num.unsigned_abs();

    if num < 0 {
        parts.push("minus".to_string());
    }

    for &(value, name) in SCALES {
        let count = n / value;
        if count > 0 {
            parts.push(hundreds_to_words(count));
            parts.push(name.to_string());
        }
        n %= value;
    }

    if n > 0 {
        parts.push(hundreds_to_words(n));
    }

    parts
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
