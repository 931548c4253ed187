// ============================================================================
// INPUT - Validación de los inputs del formulario
// ============================================================================

/// Convertir el texto del input numérico en segundos.
/// No numérico o negativo => 0; fracciones se truncan.
pub fn parse_manual_time(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            if value >= i64::MAX as f64 {
                i64::MAX
            } else {
                value.trunc() as i64
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_seconds() {
        assert_eq!(parse_manual_time("120"), 120);
        assert_eq!(parse_manual_time(" 7 "), 7);
    }

    #[test]
    fn clamps_negative_and_garbage_to_zero() {
        assert_eq!(parse_manual_time("-30"), 0);
        assert_eq!(parse_manual_time("abc"), 0);
        assert_eq!(parse_manual_time(""), 0);
        assert_eq!(parse_manual_time("NaN"), 0);
        assert_eq!(parse_manual_time("inf"), 0);
    }

    #[test]
    fn truncates_fractions() {
        assert_eq!(parse_manual_time("12.9"), 12);
        assert_eq!(parse_manual_time("0.5"), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_manual_time("1e300"), i64::MAX);
    }
}
