use std::io::Write;

use crate::models::{Observation, SignalSeries};

// Fixed point with 2 decimals; non-finite values print as nan / inf / -inf
fn fixed_2dp(value: f64) -> String {
    if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        format!("{:.2}", value)
    }
}

// Formats an observation as a single display line, e.g.
// "Price: $96601.02 | Volume: 1.23 | Timestamp: 004500"
// The timestamp text is left filled with '0' to at least 6 characters and
// never truncated. The fill goes in front of any sign: -45 gives "000-45".
pub fn render(obs: &Observation) -> String {
    format!(
        "Price: ${} | Volume: {} | Timestamp: {:0>6}",
        fixed_2dp(obs.get_price()),
        fixed_2dp(obs.get_volume()),
        obs.get_time().to_string()
    )
}

// Writes one rendered line per observation, in insertion order.
pub fn write_series<W: Write>(series: &SignalSeries, out: &mut W) -> std::io::Result<()> {
    for obs in series {
        writeln!(out, "{}", render(obs))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_format_line() {
        let obs = Observation::new(96601.02, 1.23, 4500);
        assert_eq!(
            render(&obs),
            "Price: $96601.02 | Volume: 1.23 | Timestamp: 004500"
        );
    }

    #[test]
    fn always_two_decimal_places() {
        let obs = Observation::new(5.0, 0.5, 1);
        assert_eq!(render(&obs), "Price: $5.00 | Volume: 0.50 | Timestamp: 000001");

        let obs = Observation::new(1e12, 1234.5678, 0);
        assert_eq!(
            render(&obs),
            "Price: $1000000000000.00 | Volume: 1234.57 | Timestamp: 000000"
        );
    }

    #[test]
    fn wide_timestamps_are_not_truncated() {
        let obs = Observation::new(1.0, 1.0, 1_234_567);
        assert_eq!(render(&obs), "Price: $1.00 | Volume: 1.00 | Timestamp: 1234567");
    }

    #[test]
    fn negative_timestamps_fill_before_sign() {
        let obs = Observation::new(1.0, 1.0, -45);
        assert_eq!(render(&obs), "Price: $1.00 | Volume: 1.00 | Timestamp: 000-45");

        let obs = Observation::new(1.0, 1.0, -123456);
        assert_eq!(render(&obs), "Price: $1.00 | Volume: 1.00 | Timestamp: -123456");
    }

    #[test]
    fn non_finite_values_render_lower_case() {
        let obs = Observation::new(f64::NAN, 1.0, 1);
        assert_eq!(render(&obs), "Price: $nan | Volume: 1.00 | Timestamp: 000001");

        let obs = Observation::new(f64::INFINITY, f64::NEG_INFINITY, 1);
        assert_eq!(render(&obs), "Price: $inf | Volume: -inf | Timestamp: 000001");
    }

    #[test]
    fn negative_prices_keep_two_decimals() {
        let obs = Observation::new(-3.5, -0.25, 7);
        assert_eq!(render(&obs), "Price: $-3.50 | Volume: -0.25 | Timestamp: 000007");
    }

    #[test]
    fn write_series_emits_one_line_per_observation() {
        let series: SignalSeries = [
            Observation::new(96601.02, 1.23, 4500),
            Observation::new(96601.08, 0.56, 4501),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        write_series(&series, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price: $96601.02 | Volume: 1.23 | Timestamp: 004500\n\
             Price: $96601.08 | Volume: 0.56 | Timestamp: 004501\n"
        );
    }

    #[test]
    fn write_series_on_empty_series_writes_nothing() {
        let mut out = Vec::new();
        write_series(&SignalSeries::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
