use super::Sighting;

/// Intervals between consecutive sightings, counted inclusively: a
/// sighting 28 days after the previous one has interval 29.
///
/// Expects sightings in chronological order.
pub fn cycle_intervals(sightings: &[Sighting]) -> Vec<u32> {
    sightings
        .windows(2)
        .map(|pair| {
            let days = pair[1].date.days_since(&pair[0].date);
            u32::try_from(days + 1).unwrap_or(0)
        })
        .collect()
}

/// Intervals (latest first) that no later interval exceeds.
pub fn unbroken_intervals(intervals: &[u32]) -> Vec<u32> {
    intervals
        .iter()
        .enumerate()
        .rev()
        .filter(|&(i, n)| intervals[i + 1..].iter().all(|later| later <= n))
        .map(|(_, &n)| n)
        .collect()
}
