use super::money::ManWon;

/// Formats a base-currency amount the way result figures are shown:
/// whole 억 (100m) units, remainder rounded to 만 (10k) units.
pub fn format_won(amount: f64) -> String {
    if amount < 0.0 {
        return format!("-{}", format_won(-amount));
    }
    let eok = (amount / 100_000_000.0).floor() as i64;
    let man = ((amount % 100_000_000.0) / 10_000.0).round() as i64;
    if eok >= 1 && man == 0 {
        format!("{eok}억원")
    } else if eok >= 1 {
        format!("{eok}억 {man}만원")
    } else {
        format!("{man}만원")
    }
}

/// Formats a man-won amount at input precision: tenths of 억 above
/// 10,000, whole 천만 above 1,000, plain 만원 below.
pub fn format_man_won(amount: ManWon) -> String {
    let man = amount.amount();
    if man == 0 {
        return "0원".to_string();
    }
    if man >= 10_000 {
        format!("{:.1}억원", man as f64 / 10_000.0)
    } else if man >= 1_000 {
        format!("{}천만원", (man as f64 / 1_000.0).round() as i64)
    } else {
        format!("{}만원", group_digits(man))
    }
}

/// Formats a base-currency amount with digit grouping, e.g. "770,833원".
pub fn format_plain_won(amount: i64) -> String {
    format!("{}원", group_digits(amount))
}

/// Thousands separators without going through a locale.
pub fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_amounts_round_to_man_units() {
        assert_eq!(format_won(770_833.0), "77만원");
        assert_eq!(format_won(25_342.0), "3만원");
        assert_eq!(format_won(0.0), "0만원");
    }

    #[test]
    fn won_amounts_split_whole_eok_from_remainder() {
        assert_eq!(format_won(1_200_000_000.0), "12억원");
        assert_eq!(format_won(370_000_000.0), "3억 7000만원");
        assert_eq!(format_won(123_450_000.0), "1억 2345만원");
    }

    #[test]
    fn won_amounts_just_below_an_eok_stay_in_man_units() {
        assert_eq!(format_won(99_999_999.0), "10000만원");
    }

    #[test]
    fn negative_won_amounts_keep_their_sign() {
        assert_eq!(format_won(-800_000.0), "-80만원");
        assert_eq!(format_won(-370_000_000.0), "-3억 7000만원");
    }

    #[test]
    fn man_won_amounts_scale_with_magnitude() {
        assert_eq!(format_man_won(ManWon::ZERO), "0원");
        assert_eq!(format_man_won(ManWon::new(850)), "850만원");
        assert_eq!(format_man_won(ManWon::new(3_500)), "4천만원");
        assert_eq!(format_man_won(ManWon::new(1_000)), "1천만원");
        assert_eq!(format_man_won(ManWon::new(35_000)), "3.5억원");
        assert_eq!(format_man_won(ManWon::new(80_000)), "8.0억원");
    }

    #[test]
    fn grouping_inserts_separators_every_three_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(100), "100");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(-500_000), "-500,000");
    }

    #[test]
    fn plain_won_strings_carry_the_unit_suffix() {
        assert_eq!(format_plain_won(770_833), "770,833원");
        assert_eq!(format_plain_won(-800_000), "-800,000원");
    }
}
