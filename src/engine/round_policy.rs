/// Число туров в зависимости от размера поля.
///
/// | участников | туров |
/// |------------|-------|
/// | ≤ 5        | 3     |
/// | 6–11       | 4     |
/// | 12–23      | 5     |
/// | 24–39      | 6     |
/// | ≥ 40       | 7     |
///
/// Проверка "минимум 2 участника" – на стороне турнира, не здесь.
pub fn total_rounds(player_count: usize) -> u32 {
    match player_count {
        0..=5 => 3,
        6..=11 => 4,
        12..=23 => 5,
        24..=39 => 6,
        _ => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(total_rounds(0), 3);
        assert_eq!(total_rounds(2), 3);
        assert_eq!(total_rounds(5), 3);
        assert_eq!(total_rounds(6), 4);
        assert_eq!(total_rounds(11), 4);
        assert_eq!(total_rounds(12), 5);
        assert_eq!(total_rounds(23), 5);
        assert_eq!(total_rounds(24), 6);
        assert_eq!(total_rounds(39), 6);
        assert_eq!(total_rounds(40), 7);
        assert_eq!(total_rounds(10_000), 7);
    }
}
