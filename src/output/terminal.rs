//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::CheckResult;

/// Tangent rows shown before the table is elided.
const MAX_TANGENT_ROWS: usize = 8;

/// Format a CheckResult for human-readable terminal output.
///
/// The tangent table shows the largest sizes, which are the ones the
/// classification compares.
pub fn format_result(result: &CheckResult) -> String {
    let mut output = String::new();

    let header = if result.passed() {
        format!("{} {}", "\u{2713}".green().bold(), "MATCH".green().bold())
    } else {
        format!(
            "{} {}",
            "\u{2717}".red().bold(),
            "COMPLEXITY MISMATCH".red().bold()
        )
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!("Expected:  {}", result.expected)));
    let observed = format!("Observed:  {}", result.observed);
    let observed = if result.passed() {
        observed.green()
    } else {
        observed.red()
    };
    output.push_str(&format_box_line(&observed.to_string()));
    output.push_str(&format_box_line(&format!("Tolerance: {}", result.tolerance)));

    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!(
        "Trials: {} in {:.2}s",
        result.trials(),
        result.elapsed.as_secs_f64()
    )));
    if let Some(largest) = result.largest_sample() {
        output.push_str(&format_box_line(&format!(
            "Largest input: {} ({:.3} ms)",
            largest.size(),
            largest.compute_secs() * 1e3
        )));
    }
    let stop = match result.stop_reason {
        Some(ref reason) => reason.to_string(),
        None => "not exhausted".to_string(),
    };
    output.push_str(&format_box_line(&format!("Stopped: {}", stop)));
    output.push_str(&format_box_line(&format!("Seed: {}", result.seed)));

    let tangents = result.tangents();
    if !tangents.is_empty() {
        output.push_str(&format_box_separator());
        output.push_str(&format_box_line(&"Tangents (ms per element):".bold().to_string()));
        let skipped = tangents.len().saturating_sub(MAX_TANGENT_ROWS);
        if skipped > 0 {
            output.push_str(&format_box_line(
                &format!("  ... {} smaller sizes", skipped).dimmed().to_string(),
            ));
        }
        for (size, tangent) in &tangents[skipped..] {
            output.push_str(&format_box_line(&format!(
                "  {:>12}  {:.6}",
                size, tangent
            )));
        }
    }

    output.push_str(&format_box_bottom());

    if !result.passed() {
        output.push_str(&format!(
            "\n{}\n",
            "Note: Wall-clock timing is noisy. Re-run with the seed above to replay the same inputs."
                .dimmed()
                .italic()
        ));
    }

    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_len);
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::StopReason;
    use crate::types::{ComputeTimePoint, TimeComplexity, Tolerance};
    use std::time::Duration;

    fn make_result(observed: TimeComplexity, samples: usize) -> CheckResult {
        CheckResult {
            expected: TimeComplexity::Linear,
            observed,
            tolerance: Tolerance::Low,
            samples: (1..=samples)
                .map(|i| ComputeTimePoint::from_secs(1 << i, (1 << i) as f64 * 1e-6))
                .collect(),
            stop_reason: Some(StopReason::SizeLimitReached {
                last_size: 1 << samples,
                max_size: 1 << 20,
            }),
            elapsed: Duration::from_millis(1500),
            seed: 42,
        }
    }

    #[test]
    fn test_format_matching_result() {
        let output = format_result(&make_result(TimeComplexity::Linear, 4));
        assert!(output.contains("MATCH"));
        assert!(!output.contains("MISMATCH"));
        assert!(output.contains("O(n)"));
        assert!(output.contains("low (±10%)"));
        assert!(output.contains("Trials: 4 in 1.50s"));
        assert!(output.contains("Seed: 42"));
    }

    #[test]
    fn test_format_mismatch_result() {
        let output = format_result(&make_result(TimeComplexity::Polynomial, 3));
        assert!(output.contains("COMPLEXITY MISMATCH"));
        assert!(output.contains("O(n^k)"));
        assert!(output.contains("replay"));
    }

    #[test]
    fn test_tangent_table_is_elided() {
        let output = format_result(&make_result(TimeComplexity::Linear, 12));
        assert!(output.contains("... 4 smaller sizes"));
        assert!(output.contains("4096"));
    }

    #[test]
    fn test_box_lines_have_equal_width() {
        let mut result = make_result(TimeComplexity::Linear, 3);
        result.stop_reason = Some(StopReason::SampleCapReached {
            samples: 3,
            max_samples: 2,
        });
        let output = format_result(&result);
        let widths: Vec<usize> = output
            .lines()
            .filter(|l| l.starts_with('\u{2502}'))
            .map(|l| strip_ansi_codes(l).chars().count())
            .collect();
        assert!(widths.iter().all(|&w| w == BOX_WIDTH + 2));
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
