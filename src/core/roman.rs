use crate::utils::error::ConversionError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MIN_VALUE: u16 = 1;
pub const MAX_VALUE: u16 = 3999;

/// 由大到小，包含所有減法組合
const SYMBOLS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("canonical numeral pattern compiles")
});

pub type Result<T> = std::result::Result<T, ConversionError>;

fn symbol_value(symbol: char) -> Option<u16> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

pub fn is_numeral_symbol(symbol: char) -> bool {
    symbol_value(symbol.to_ascii_uppercase()).is_some()
}

fn check_range(value: u64, input: &str) -> Result<u16> {
    if value < u64::from(MIN_VALUE) || value > u64::from(MAX_VALUE) {
        return Err(ConversionError::OutOfRange {
            input: input.to_string(),
        });
    }
    // 範圍已檢查，不會截斷
    Ok(value as u16)
}

/// 解析阿拉伯數字文字：去除空白後只能包含十進位數字
pub fn parse_arabic(text: &str) -> Result<u16> {
    let trimmed = text.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidFormat {
            input: text.to_string(),
        });
    }

    // 全是數字仍可能溢位，視為超出範圍
    let value = trimmed
        .parse::<u64>()
        .map_err(|_| ConversionError::OutOfRange {
            input: trimmed.to_string(),
        })?;

    check_range(value, trimmed)
}

pub fn encode(value: u16) -> Result<String> {
    let mut remaining = check_range(u64::from(value), &value.to_string())?;
    let mut roman = String::new();

    for (amount, symbol) in SYMBOLS {
        while remaining >= amount {
            roman.push_str(symbol);
            remaining -= amount;
        }
    }

    Ok(roman)
}

pub fn arabic_to_roman(text: &str) -> Result<String> {
    encode(parse_arabic(text)?)
}

pub fn roman_to_arabic(text: &str) -> Result<u16> {
    let normalized = text.trim().to_uppercase();

    if normalized.is_empty() {
        return Err(ConversionError::InvalidInput);
    }

    // 1. 字元集
    if !normalized.chars().all(|c| symbol_value(c).is_some()) {
        return Err(ConversionError::InvalidCharacters {
            input: text.to_string(),
        });
    }

    // 2. 標準寫法文法，必須在解碼之前
    if !CANONICAL.is_match(&normalized) {
        return Err(ConversionError::InvalidGrammar {
            input: text.to_string(),
        });
    }

    // 3. 解碼：下一個符號較大時減去目前的值
    let values: Vec<i64> = normalized
        .chars()
        .filter_map(symbol_value)
        .map(i64::from)
        .collect();

    let mut total: i64 = 0;
    for (i, current) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > current => total -= current,
            _ => total += current,
        }
    }

    if total < 1 {
        return Err(ConversionError::OutOfRange {
            input: normalized,
        });
    }
    check_range(total as u64, &normalized)
}

/// 已驗證的標準羅馬數字
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    text: String,
    value: u16,
}

impl RomanNumeral {
    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for RomanNumeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        let value = roman_to_arabic(s)?;
        Ok(Self {
            text: s.trim().to_uppercase(),
            value,
        })
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = ConversionError;

    fn try_from(value: u16) -> Result<Self> {
        Ok(Self {
            text: encode(value)?,
            value,
        })
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
