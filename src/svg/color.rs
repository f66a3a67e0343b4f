/// Returns the stroke color for the path at `index`, as `#RRGGBB`.
///
/// Colors come from one step of a linear congruential generator seeded by
/// `index + 1`, computed in wrapping 32-bit arithmetic. The same index always
/// yields the same color.
#[must_use]
pub fn color_for(index: usize) -> String {
    // Truncation to 32 bits is part of the formula.
    #[allow(clippy::cast_possible_truncation)]
    let seed = index as u32;
    let value = seed
        .wrapping_add(1)
        .wrapping_mul(1_103_515_245)
        .wrapping_add(12_345);
    let r = (value >> 16) & 0xFF;
    let g = (value >> 8) & 0xFF;
    let b = value & 0xFF;
    format!("#{r:02X}{g:02X}{b:02X}")
}
