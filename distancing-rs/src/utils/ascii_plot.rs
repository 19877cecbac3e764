use std::iter;

use crate::prelude::Real;

/// Reduce a sequence to at most `width` points, keeping the maximum of each
/// bucket so peaks survive.
pub fn downsample(values: &[Real], width: usize) -> Vec<Real> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    let n = values.len();
    (0..width)
        .map(|i| {
            let start = i * n / width;
            let end = ((i + 1) * n / width).max(start + 1);
            values[start..end]
                .iter()
                .cloned()
                .fold(Real::NEG_INFINITY, Real::max)
        })
        .collect()
}

/// ASCII plot of a sequence of positive values.
///
/// Draw each point as a column filled with '*'s up to the maximum height. The
/// last line is the baseline. Non-positive values are only drawn there.
pub fn plot_vbars(values: &[Real], height: usize) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(Real::NEG_INFINITY, Real::max);
    if !(max > 0.0) || height == 0 {
        return iter::repeat('_').take(values.len()).collect();
    }
    let step = max / height as Real;

    let mut lines = Vec::with_capacity(height + 1);
    for i in 0..height + 1 {
        let h = (height - i) as Real * step;
        let ln: String = values
            .iter()
            .map(|&x| if x >= h { '*' } else { ' ' })
            .collect();
        lines.push(ln.trim_end().to_string());
    }
    return lines.join("\n");
}
