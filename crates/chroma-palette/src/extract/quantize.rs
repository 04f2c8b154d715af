//! Channel quantization and the frequency table.

use std::collections::HashMap;

use crate::color::Rgb;

/// Bucket size for channel quantization.
pub const QUANTIZATION_BUCKET: u16 = 32;

/// Round a channel to the nearest multiple of [`QUANTIZATION_BUCKET`].
///
/// Halves round up. The top bucket (256) saturates to 255, so the result
/// is always a valid channel and quantizing twice is a no-op.
///
/// # Example
/// ```
/// use chroma_palette::quantize_channel;
/// assert_eq!(quantize_channel(15), 0);
/// assert_eq!(quantize_channel(16), 32);
/// assert_eq!(quantize_channel(250), 255);
/// ```
#[inline]
pub fn quantize_channel(c: u8) -> u8 {
    let half = QUANTIZATION_BUCKET / 2;
    let bucket = (c as u16 + half) / QUANTIZATION_BUCKET * QUANTIZATION_BUCKET;
    bucket.min(255) as u8
}

/// Quantize all three channels.
#[inline]
pub fn quantize(color: Rgb) -> Rgb {
    Rgb::new(
        quantize_channel(color.r),
        quantize_channel(color.g),
        quantize_channel(color.b),
    )
}

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u32,
    first_seen: u32,
}

/// Occurrence counts per quantized color.
///
/// Keyed by the packed `0xRRGGBB` value. Each entry also remembers when it
/// was first seen, which is the tie-breaker when ranking.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    tallies: HashMap<u32, Tally>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of an (already quantized) color.
    pub fn record(&mut self, color: Rgb) {
        let next = self.tallies.len() as u32;
        self.tallies
            .entry(color.packed())
            .and_modify(|t| t.count += 1)
            .or_insert(Tally {
                count: 1,
                first_seen: next,
            });
    }

    /// Number of distinct colors recorded.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Occurrences of `color`, 0 if never recorded.
    pub fn count(&self, color: Rgb) -> u32 {
        self.tallies.get(&color.packed()).map_or(0, |t| t.count)
    }

    /// Colors with their counts, most frequent first.
    ///
    /// Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(Rgb, u32)> {
        let mut entries: Vec<(u32, Tally)> = self.tallies.iter().map(|(&k, &t)| (k, t)).collect();
        entries.sort_unstable_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .map(|(key, t)| (Rgb::from_packed(key), t.count))
            .collect()
    }
}
