/// Arithmetic mean of non-negative integers rounded half up. Returns `None`
/// for empty input.
pub fn rounded_mean(values: impl IntoIterator<Item = u32>) -> Option<u32> {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));

    if count == 0 {
        return None;
    }

    // floor((2 * sum + count) / (2 * count)) == floor(sum / count + 0.5)
    let rounded = (2 * sum + count) / (2 * count);
    u32::try_from(rounded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_mean_empty() {
        assert_eq!(rounded_mean(Vec::new()), None);
    }

    #[test]
    fn test_rounded_mean_exact() {
        assert_eq!(rounded_mean([10, 20, 21]), Some(17));
        assert_eq!(rounded_mean([0, 0, 15]), Some(5));
    }

    #[test]
    fn test_rounded_mean_half_rounds_up() {
        assert_eq!(rounded_mean([1, 2]), Some(2));
        assert_eq!(rounded_mean([0, 1]), Some(1));
        assert_eq!(rounded_mean([1, 1, 2]), Some(1));
        assert_eq!(rounded_mean([1, 2, 2]), Some(2));
    }
}
