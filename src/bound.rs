use crate::Framing;

/// Worst-case output size of a compress session.
pub(crate) trait Bound {
    /// Largest output a single finish-mode run over `input_len` bytes can produce.
    fn bound(&self, input_len: usize) -> usize;
}

/// Returns the maximum size of a compressed stream for `input_len` bytes.
///
/// The bound holds for every compression level and for both engine backends, so
/// an output buffer of this size always lets a compressor finish in one call.
/// Saturates at `usize::MAX`.
///
/// ```
/// use oneshot_deflate::{deflate_bound, Framing};
///
/// assert!(deflate_bound(10, Framing::Zlib) >= 10);
/// assert_eq!(deflate_bound(0, Framing::Zlib) - deflate_bound(0, Framing::Raw), 6);
/// ```
pub fn deflate_bound(input_len: usize, framing: Framing) -> usize {
    let n = input_len;

    // miniz: 5 bytes per stored block of up to 31 KiB, or 10% expansion
    let stored = n.saturating_add((n / (31 * 1024) + 1).saturating_mul(5));
    let expanded = n.saturating_add(n / 10);
    let miniz = stored.max(expanded).saturating_add(128);

    // zlib's conservative bounds for stored and fixed-code blocks
    let zlib_stored = n
        .saturating_add(n >> 5)
        .saturating_add(n >> 7)
        .saturating_add(n >> 11)
        .saturating_add(7);
    let zlib_fixed = n
        .saturating_add(n >> 3)
        .saturating_add(n >> 8)
        .saturating_add(n >> 9)
        .saturating_add(4);

    miniz
        .max(zlib_stored)
        .max(zlib_fixed)
        .saturating_add(framing.overhead())
}
