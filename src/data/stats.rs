// ---------------------------------------------------------------------------
// Summary statistics over the parsed sample set
// ---------------------------------------------------------------------------
//
// Each reduction is a separate linear pass. The empty sequence yields 0.0
// from all three functions: callers that need to distinguish "no data" from
// "data averaging to zero" must check emptiness themselves, as this is the
// documented contract of the tool. NaN and infinity are not filtered; a NaN
// sample poisons the average per IEEE arithmetic.

/// Arithmetic mean of `samples`, or `0.0` when empty.
pub fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    for &v in samples {
        sum += v;
    }
    sum / samples.len() as f64
}

/// Greatest element of `samples`, or `0.0` when empty.
pub fn max(samples: &[f64]) -> f64 {
    let Some((&first, rest)) = samples.split_first() else {
        return 0.0;
    };
    let mut best = first;
    for &v in rest {
        if v > best {
            best = v;
        }
    }
    best
}

/// Least element of `samples`, or `0.0` when empty.
pub fn min(samples: &[f64]) -> f64 {
    let Some((&first, rest)) = samples.split_first() else {
        return 0.0;
    };
    let mut best = first;
    for &v in rest {
        if v < best {
            best = v;
        }
    }
    best
}
