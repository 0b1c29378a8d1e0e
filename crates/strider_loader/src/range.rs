//! Declarative numeric range expressions.
//!
//! Face bindings address grid cells with a compact range grammar:
//!
//! ```text
//! expr  := group ("," group)*
//! group := "*"              all of 1..=max
//!        | n                the single value n
//!        | a "-" b          a..=b inclusive (empty when a > b)
//!        | a "-" b "/" s    a, a+s, a+2s, ... not exceeding b
//! ```
//!
//! Groups are expanded independently, left to right, and the results
//! concatenated as-is. No sorting or deduplication happens here; the
//! face-binding layer owns the final ordering.

use crate::error::LoaderError;

/// Expands a range expression into its integer sequence.
///
/// `max` is only consulted by the `*` wildcard; expressions without a
/// wildcard expand the same way regardless of it.
///
/// # Errors
///
/// Returns [`LoaderError::InvalidRange`] when any comma-group matches
/// none of the grammar forms.
///
/// # Examples
///
/// ```
/// use strider_loader::range::expand;
///
/// assert_eq!(expand("0-10/2", 10).unwrap(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(expand("*", 4).unwrap(), vec![1, 2, 3, 4]);
/// assert_eq!(expand("7", 4).unwrap(), vec![7]);
/// ```
pub fn expand(expr: &str, max: u32) -> Result<Vec<u32>, LoaderError> {
	let mut values = Vec::new();
	for group in expr.split(',') {
		expand_group(group.trim(), max, expr, &mut values)?;
	}
	Ok(values)
}

fn expand_group(
	group: &str,
	max: u32,
	expr: &str,
	values: &mut Vec<u32>,
) -> Result<(), LoaderError> {
	if group == "*" {
		values.extend(1..=max);
		return Ok(());
	}

	let (span, step) = match group.split_once('/') {
		Some((span, step)) => {
			let step = parse_int(step, expr)?;
			if step == 0 {
				return Err(invalid(expr, format!("step must be positive in {group:?}")));
			}
			(span, step)
		}
		None => (group, 1),
	};

	if let Some((start, end)) = span.split_once('-') {
		let start = parse_int(start, expr)?;
		let end = parse_int(end, expr)?;
		// start > end expands to nothing; that is an empty edge case,
		// not an error.
		values.extend((start..=end).step_by(step as usize));
		return Ok(());
	}

	if step != 1 {
		return Err(invalid(expr, format!("step without a range in {group:?}")));
	}

	values.push(parse_int(span, expr)?);
	Ok(())
}

fn parse_int(text: &str, expr: &str) -> Result<u32, LoaderError> {
	text.trim()
		.parse()
		.map_err(|_| invalid(expr, format!("expected an integer, found {text:?}")))
}

fn invalid(expr: &str, reason: String) -> LoaderError {
	LoaderError::InvalidRange {
		expr: expr.to_string(),
		reason,
	}
}
