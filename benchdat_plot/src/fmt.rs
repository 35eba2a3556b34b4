use benchdat::F64;

/// Width of the size column in statistics tables.
pub const SIZE_WIDTH: usize = 8;
/// Width of each value column in statistics tables.
pub const VALUE_WIDTH: usize = 25;
/// Width of the group size column in extracted benchmark tables.
pub const GROUP_WIDTH: usize = 15;

/// Column labels of statistics tables, in the order of
/// `ThroughputStats::fields`.
pub const STATS_COLUMNS: [&str; 10] = [
    "rs_m", "ws_m", "rs_std", "ws_std", "rs_50", "ws_50", "rs_90", "ws_90",
    "rs_99", "ws_99",
];

pub struct PlotFmt;

impl PlotFmt {
    /// Formats a float the way the plotting scripts read it: the shortest
    /// representation that parses back to the same value, always with a
    /// fractional part or an exponent. Exponent notation is used for
    /// magnitudes below 1e-4 or from 1e16 on.
    pub fn float(value: F64) -> String {
        let x = value.value();
        if x.is_nan() {
            return String::from("nan");
        }
        if x.is_infinite() {
            let inf = if x > 0.0 { "inf" } else { "-inf" };
            return String::from(inf);
        }
        if x == 0.0 {
            let zero = if x.is_sign_negative() { "-0.0" } else { "0.0" };
            return String::from(zero);
        }

        // `{:e}` gives us the shortest digits and the decimal exponent
        let scientific = format!("{:e}", x);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .expect("scientific notation should have an exponent");
        let exponent = exponent
            .parse::<i32>()
            .expect("exponent should be an integer");

        if (-4..16).contains(&exponent) {
            let positional = x.to_string();
            if positional.contains('.') {
                positional
            } else {
                format!("{}.0", positional)
            }
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
    }

    /// Left-justifies each column to its width and joins them with a space.
    pub fn columns<'a, I>(columns: I) -> String
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        columns
            .into_iter()
            .map(|(column, width)| format!("{:<width$}", column, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Header row of statistics tables.
    pub fn stats_header() -> String {
        let columns = std::iter::once(("# size", SIZE_WIDTH)).chain(
            STATS_COLUMNS.iter().map(|column| (*column, VALUE_WIDTH)),
        );
        Self::columns(columns)
    }

    /// Row of statistics tables: the size label followed by all values.
    pub fn stats_row(label: &str, values: &[F64]) -> String {
        let values: Vec<_> =
            values.iter().map(|value| Self::float(*value)).collect();
        let columns = std::iter::once((label, SIZE_WIDTH)).chain(
            values.iter().map(|value| (value.as_str(), VALUE_WIDTH)),
        );
        Self::columns(columns)
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn float_parses_back(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        let formatted = PlotFmt::float(F64::new(x));
        formatted.parse::<f64>().map(|y| y == x).unwrap_or(false)
    }

    #[quickcheck]
    fn float_is_never_integer_like(x: f64) -> bool {
        let formatted = PlotFmt::float(F64::new(x));
        formatted.contains('.')
            || formatted.contains('e')
            || formatted.contains("nan")
            || formatted.contains("inf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(x: f64) -> String {
        PlotFmt::float(F64::new(x))
    }

    #[test]
    fn positional() {
        assert_eq!(float(5120.0), "5120.0");
        assert_eq!(float(0.1), "0.1");
        assert_eq!(float(-2.5), "-2.5");
        assert_eq!(float(0.0001), "0.0001");
        assert_eq!(float(10240.0 / 3.0), "3413.3333333333335");
        assert_eq!(float(1e15), "1000000000000000.0");
        assert_eq!(float(0.0), "0.0");
        assert_eq!(float(-0.0), "-0.0");
    }

    #[test]
    fn exponent() {
        assert_eq!(float(1e16), "1e+16");
        assert_eq!(float(1.5e17), "1.5e+17");
        assert_eq!(float(0.00001), "1e-05");
        assert_eq!(float(2.5e-7), "2.5e-07");
        assert_eq!(float(-3e100), "-3e+100");
    }

    #[test]
    fn special() {
        assert_eq!(float(f64::NAN), "nan");
        assert_eq!(float(f64::INFINITY), "inf");
        assert_eq!(float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn header() {
        let header = PlotFmt::stats_header();
        assert!(header.starts_with("# size   rs_m "));
        // 8 + 10 * 25 plus one separator per value column
        assert_eq!(header.len(), 8 + 10 * 25 + 10);
        let labels: Vec<_> = header.split_whitespace().skip(2).collect();
        assert_eq!(labels, STATS_COLUMNS.to_vec());
    }

    #[test]
    fn row() {
        let row = PlotFmt::stats_row("10K", &[F64::new(1.0), F64::nan()]);
        assert_eq!(row, format!("{:<8} {:<25} {:<25}", "10K", "1.0", "nan"));
    }
}
