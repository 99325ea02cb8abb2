use crate::types::{Bin, Solution};

const MAX_WIDTH: f64 = 60.0;

/// Renders one bar per bin, scaled against the capacity (or the heaviest bin
/// when the solution has no capacity).
pub fn render_solution(solution: &Solution) -> String {
    let scale_to = match solution.capacity {
        Some(c) => c as u64,
        None => solution.loads().into_iter().max().unwrap_or(0),
    }
    .max(solution.loads().into_iter().max().unwrap_or(0));
    if solution.bins.is_empty() || scale_to == 0 {
        return String::new();
    }
    let scale = MAX_WIDTH / scale_to as f64;
    let label_width = solution.bin_count().to_string().len();

    let mut result = String::new();
    for (i, bin) in solution.bins.iter().enumerate() {
        let bar = render_bin(bin, scale, (scale_to as f64 * scale).round() as usize);
        let load = match solution.capacity {
            Some(c) => format!("{}/{}", bin.load(), c),
            None => bin.load().to_string(),
        };
        result.push_str(&format!("{:>label_width$} |{}| {}", i + 1, bar, load));
        result.push('\n');
    }
    result
}

fn render_bin(bin: &Bin, scale: f64, width: usize) -> String {
    let mut row = vec![' '; width];
    let mut x = 0usize;

    for &w in bin.items() {
        let sw = ((w as f64 * scale).round() as usize).max(1);
        let end = (x + sw).min(width);
        if x >= end {
            break;
        }

        for cell in &mut row[x..end] {
            *cell = '#';
        }
        // Separator on the last cell of the segment
        if end - x > 1 {
            row[end - 1] = '|';
        }

        // Label
        let label: Vec<char> = w.to_string().chars().collect();
        let inner = end - x - 1;
        if inner >= label.len() {
            let start = x + (inner - label.len()) / 2;
            for (i, &ch) in label.iter().enumerate() {
                row[start + i] = ch;
            }
        }
        x = end;
    }

    row.into_iter().collect()
}
