//! Reference colorimetry values.
//!
//! Lab coordinates and ΔE76 distances computed independently with the
//! same 4-decimal sRGB matrix and D65 white. Scores use
//! `round(max(0, 100 - 1.5 * ΔE))`.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use paint_color::{delta_e76, hex_to_lab, match_percentage};

    /// (hex, L, a, b)
    const LAB: &[(&str, f64, f64, f64)] = &[
        ("#FFFFFF", 100.0, 0.00526, -0.01041),
        ("#000000", 0.0, 0.0, 0.0),
        ("#808080", 53.58501, 0.00316, -0.00624),
        ("#FF0000", 53.23288, 80.10931, 67.22006),
        ("#00FF00", 87.73703, -86.18464, 83.18116),
        ("#0000FF", 32.30259, 79.19666, -107.86368),
        ("#F4F1EA", 95.19638, -0.20348, 3.71762),
    ];

    /// (a, b, ΔE76, score)
    const PAIRS: &[(&str, &str, f64, u8)] = &[
        ("#FF0000", "#FF6347", 31.75198, 52),
        ("#FFFFFF", "#F4F1EA", 6.08412, 91),
        ("#808080", "#7F7F7F", 0.39224, 99),
        ("#000000", "#FFFFFF", 100.0, 0),
        ("#0000FF", "#000080", 56.92508, 15),
        ("#DEB887", "#D2B48C", 6.28856, 91),
        ("#2E8B57", "#3CB371", 16.70285, 75),
    ];

    #[test]
    fn test_lab_reference() {
        for &(hex, l, a, b) in LAB {
            let lab = hex_to_lab(hex).unwrap();
            assert_abs_diff_eq!(lab.l, l, epsilon = 1e-4);
            assert_abs_diff_eq!(lab.a, a, epsilon = 1e-4);
            assert_abs_diff_eq!(lab.b, b, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_delta_e_reference() {
        for &(a, b, expected, score) in PAIRS {
            let d = delta_e76(hex_to_lab(a).unwrap(), hex_to_lab(b).unwrap());
            assert_abs_diff_eq!(d, expected, epsilon = 1e-4);
            assert_eq!(match_percentage(d), score, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_scores_symmetric() {
        for &(a, b, _, _) in PAIRS {
            let ab = delta_e76(hex_to_lab(a).unwrap(), hex_to_lab(b).unwrap());
            let ba = delta_e76(hex_to_lab(b).unwrap(), hex_to_lab(a).unwrap());
            assert_eq!(match_percentage(ab), match_percentage(ba));
        }
    }
}
