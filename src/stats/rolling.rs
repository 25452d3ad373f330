//! Trailing simple moving average.

/// Trailing mean over `window` cells.
///
/// Output cell `i` is the mean of cells `i + 1 - window ..= i` when all of them are
/// observed, and `None` otherwise. The first `window - 1` cells of every
/// contiguous observed run are therefore `None`. A zero window is treated as 1.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(values.len());
    // Length of the observed run ending at the current cell.
    let mut run = 0usize;

    for (i, cell) in values.iter().enumerate() {
        if cell.is_some() {
            run += 1;
        } else {
            run = 0;
        }

        if run < window {
            out.push(None);
            continue;
        }

        let sum: f64 = values[i + 1 - window..=i].iter().flatten().sum();
        out.push(Some(sum / window as f64));
    }

    out
}
