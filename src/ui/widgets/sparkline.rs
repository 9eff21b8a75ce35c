//! Inline sparkline text for chart titles and table cells

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn bar(value: u64, max: u64) -> char {
    let scaled = ((value as f64 / max.max(1) as f64) * 7.0).round() as usize;
    BARS[scaled.min(7)]
}

/// Last `width` values as bar glyphs, scaled to the largest shown value.
pub fn sparkline_text(data: &[u64], width: usize) -> String {
    let start = data.len().saturating_sub(width);
    let shown = &data[start..];
    let max = shown.iter().copied().max().unwrap_or(1);
    shown.iter().map(|&value| bar(value, max)).collect()
}
