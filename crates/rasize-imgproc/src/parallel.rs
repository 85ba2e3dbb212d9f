use std::ops::Range;

use rayon::prelude::*;
use thiserror::Error;

use rasize_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the destination pixels are distributed over the workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Split the pixels in one contiguous chunk per thread of the global Rayon pool.
    #[default]
    ParallelChunks,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads, one chunk per thread.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Partition the flat index space `0..total` into `num_chunks` contiguous ranges.
///
/// Interior ranges hold `total / num_chunks` indices and the last range ends at `total`,
/// absorbing the remainder of the division. The number of chunks is capped to `total` so
/// that no range is empty, and a single empty range is returned when `total` is zero.
///
/// # Example
///
/// ```
/// use rasize_imgproc::parallel::chunk_ranges;
///
/// assert_eq!(chunk_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(chunk_ranges(2, 8), vec![0..1, 1..2]);
/// ```
pub fn chunk_ranges(total: usize, num_chunks: usize) -> Vec<Range<usize>> {
    let num_chunks = num_chunks.clamp(1, total.max(1));
    let chunk_size = total / num_chunks;

    (0..num_chunks)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i + 1 == num_chunks {
                total
            } else {
                start + chunk_size
            };
            start..end
        })
        .collect()
}

// carve the buffer in disjoint mutable chunks, one per pixel range
fn split_chunks<'a, T, const C: usize>(
    data: &'a mut [T],
    ranges: &[Range<usize>],
) -> Vec<(usize, &'a mut [T])> {
    let mut rest = data;
    let mut chunks = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * C);
        chunks.push((range.start, head));
        rest = tail;
    }
    chunks
}

fn fill_chunk<T, const C: usize, F>(start: usize, chunk: &mut [T], width: usize, f: &F)
where
    F: Fn(usize, usize, &mut [T]),
{
    chunk
        .chunks_exact_mut(C)
        .enumerate()
        .for_each(|(i, pixel)| {
            let index = start + i;
            f(index % width, index / width, pixel);
        });
}

fn fill_chunks_par<T, const C: usize, F>(dst: &mut Image<T, C>, num_chunks: usize, f: &F)
where
    T: Send,
    F: Fn(usize, usize, &mut [T]) + Send + Sync,
{
    let width = dst.width();
    let ranges = chunk_ranges(dst.size().num_pixels(), num_chunks);

    log::debug!(
        "fanning out {} pixels over {} chunks",
        dst.size().num_pixels(),
        ranges.len()
    );

    split_chunks::<T, C>(dst.as_slice_mut(), &ranges)
        .into_par_iter()
        .for_each(|(start, chunk)| fill_chunk::<T, C, F>(start, chunk, width, f));
}

/// Apply a function to every pixel of the destination image, with its coordinates.
///
/// The flat pixel index space is split with [`chunk_ranges`] and every chunk is handed over
/// to exactly one worker as a disjoint mutable slice, so each pixel is visited exactly once.
/// The call returns once every chunk has been processed.
///
/// # Arguments
///
/// * `dst` - The destination image.
/// * `strategy` - How the chunks are scheduled.
/// * `f` - The function receiving `(x, y, pixel)` for each destination pixel.
///
/// # Errors
///
/// Fails only when the [`ExecutionStrategy::Fixed`] pool cannot be built.
pub fn par_iter_pixels_indexed<T, const C: usize, F>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, usize, &mut [T]) + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Serial => {
            let width = dst.width();
            fill_chunk::<T, C, F>(0, dst.as_slice_mut(), width, &f);
        }
        ExecutionStrategy::ParallelChunks => {
            fill_chunks_par(dst, rayon::current_num_threads(), &f);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| fill_chunks_par(dst, n, &f));
        }
    }
    Ok(())
}
