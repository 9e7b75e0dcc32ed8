use std::collections::HashMap;

use serde::Serialize;

/// A mined word with its count and share of the corpus.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RankedWord {
	pub word: String,
	pub count: usize,
	/// `count / total_names * 100`, or 0 for an empty corpus.
	pub percentage: f64,
}

/// Sorts mining results by descending count and keeps the first `top`.
///
/// Words with the same count are ordered alphabetically so the ranking is
/// stable from one run to the next.
pub fn rank(counts: &HashMap<String, usize>, total_names: usize, top: usize) -> Vec<RankedWord> {
	let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
	entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

	entries
		.into_iter()
		.take(top)
		.map(|(word, &count)| RankedWord {
			word: word.clone(),
			count,
			percentage: if total_names == 0 { 0.0 } else { count as f64 * 100.0 / total_names as f64 },
		})
		.collect()
}

/// Renders ranked words as a box-drawn text table.
///
/// ```text
/// ┌──────┬───────┬────────────┐
/// │ Word │ Count │ Percentage │
/// ├──────┼───────┼────────────┤
/// │ ali  │ 3     │ 75.00%     │
/// └──────┴───────┴────────────┘
/// ```
pub fn render_table(entries: &[RankedWord]) -> String {
	let header = ["Word".to_owned(), "Count".to_owned(), "Percentage".to_owned()];
	let rows: Vec<[String; 3]> = entries
		.iter()
		.map(|entry| [entry.word.clone(), entry.count.to_string(), format!("{:.2}%", entry.percentage)])
		.collect();

	let mut widths = header.each_ref().map(|cell| cell.chars().count());
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.chars().count());
		}
	}

	let border = |left: &str, middle: &str, right: &str| {
		let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
		format!("{left}{}{right}\n", segments.join(middle))
	};
	let line = |cells: &[String; 3]| {
		let padded: Vec<String> = cells
			.iter()
			.zip(&widths)
			.map(|(cell, &width)| format!(" {cell:<width$} "))
			.collect();
		format!("│{}│\n", padded.join("│"))
	};

	let mut table = border("┌", "┬", "┐");
	table.push_str(&line(&header));
	table.push_str(&border("├", "┼", "┤"));
	for row in &rows {
		table.push_str(&line(row));
	}
	table.push_str(&border("└", "┴", "┘"));
	table
}
