//! Settlement fee policy.

/// Splits a gross settlement amount into the seller payout and the fee,
/// truncating the fee toward zero.
pub fn split(gross: i128, fee_percentage: u32) -> (i128, i128) {
    let fee = gross * fee_percentage as i128 / 100;
    (gross - fee, fee)
}
