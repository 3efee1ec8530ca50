use rust_decimal::{Decimal, RoundingStrategy};

/// Rupee amounts are reported with two decimal places
pub const MONEY_SCALE: u32 = 2;

/// Largest amount a single sale or expense may carry (₹1,000,000,000,000).
///
/// Keeps report sums, shares and trend buckets far from `Decimal`'s range
/// for any ledger a shop can hold in memory.
pub const MAX_RECORD_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Round an amount for display (half away from zero, like the dashboard's toFixed)
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage share for display
pub fn round_percentage(percentage: Decimal) -> Decimal {
    percentage.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount the way the dashboard cards show it: `₹15,000` or `₹12.50`
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = round_amount(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let whole = abs.trunc();
    let fraction = abs - whole;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if fraction.is_zero() {
        format!("{}₹{}", sign, grouped)
    } else {
        let cents = (fraction * Decimal::from(100)).trunc();
        format!("{}₹{}.{:0>2}", sign, grouped, cents)
    }
}

/// Sum of `amounts`, pinned at `Decimal::MAX`/`Decimal::MIN` instead of overflowing
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Percentage change from `previous` to `current`; 0 when there is no baseline
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    let delta = current.saturating_sub(previous);
    delta
        .checked_div(previous)
        .and_then(|change| change.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            if delta.is_sign_negative() == previous.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}
