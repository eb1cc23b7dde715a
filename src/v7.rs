//! UUIDv7 generator and related types.

use std::time;

use rand::RngCore;

use crate::{GenerateError, Uuid};

/// Represents a UUIDv7 generator that encapsulates a counter and guarantees the monotonic order
/// of UUIDs generated within the same millisecond.
///
/// This type provides the interface to customize the random number generator and system clock of
/// a UUIDv7 generator. It also helps control the scope of guaranteed order of the generated
/// UUIDs. The following example guarantees the process-wide (cross-thread) monotonicity using
/// Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuidgen::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::new(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Generator functions
///
/// The generator comes with four different methods that generate a UUIDv7:
///
/// | Flavor                | Timestamp | On random source failure |
/// | --------------------- | --------- | ------------------------ |
/// | [`generate`]          | Now       | Panics                   |
/// | [`try_generate`]      | Now       | Returns `Err`            |
/// | [`generate_core`]     | Argument  | Panics                   |
/// | [`try_generate_core`] | Argument  | Returns `Err`            |
///
/// All of the four return a monotonically increasing UUID by reusing the previous timestamp even
/// if the one provided is smaller than the immediately preceding UUID's. When such a clock
/// rollback amounts to ten seconds or more, the generator state is reset and the increasing
/// order of UUIDs is broken. The `core` variants take the timestamp as an argument and exist as
/// the injected-clock primitives for deterministic tests.
///
/// [`generate`]: V7Generator::generate
/// [`try_generate`]: V7Generator::try_generate
/// [`generate_core`]: V7Generator::generate_core
/// [`try_generate_core`]: V7Generator::try_generate_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R> {
    timestamp: u64,
    counter: u64,

    /// Random number generator used by the generator.
    rng: R,
}

const MAX_COUNTER: u64 = (1 << 42) - 1;

/// Timestamp rollback tolerated without resetting the generator state (milliseconds).
const ROLLBACK_ALLOWANCE: u64 = 10_000;

impl<R: RngCore> V7Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self {
            timestamp: 0,
            counter: 0,
            rng,
        }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// # Panics
    ///
    /// Aborts if the random number generator inside fails.
    pub fn generate(&mut self) -> Uuid {
        self.try_generate()
            .expect("uuidgen: could not get secure random bytes")
    }

    /// Generates a new UUIDv7 object from the current timestamp, reporting a failure of the
    /// random number generator inside as an error.
    pub fn try_generate(&mut self) -> Result<Uuid, GenerateError> {
        self.try_generate_core(unix_ts_ms_now())
    }

    /// Generates a new UUIDv7 object from a given `unix_ts_ms`.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit positive integer, or if the random number
    /// generator inside fails.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Uuid {
        self.try_generate_core(unix_ts_ms)
            .expect("uuidgen: could not get secure random bytes")
    }

    /// Generates a new UUIDv7 object from a given `unix_ts_ms`, reporting a failure of the
    /// random number generator inside as an error.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit positive integer.
    pub fn try_generate_core(&mut self, unix_ts_ms: u64) -> Result<Uuid, GenerateError> {
        assert!(
            0 < unix_ts_ms && unix_ts_ms < 1 << 48,
            "`unix_ts_ms` must be a 48-bit positive integer"
        );

        if unix_ts_ms > self.timestamp {
            self.timestamp = unix_ts_ms;
            self.counter = try_next_u64(&mut self.rng)? & MAX_COUNTER;
        } else if unix_ts_ms + ROLLBACK_ALLOWANCE > self.timestamp {
            // go on with previous timestamp if new one is not much smaller
            self.counter += 1;
            if self.counter > MAX_COUNTER {
                // increment timestamp at counter overflow
                self.timestamp += 1;
                self.counter = try_next_u64(&mut self.rng)? & MAX_COUNTER;
            }
        } else {
            // reset state if clock moves back by ten seconds or more
            self.timestamp = unix_ts_ms;
            self.counter = try_next_u64(&mut self.rng)? & MAX_COUNTER;
        }

        Ok(Uuid::from_fields_v7(
            self.timestamp,
            (self.counter >> 30) as u16,
            ((self.counter & 0x3fff_ffff) << 32) | try_next_u32(&mut self.rng)? as u64,
        ))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call
/// of `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidgen::V7Generator;
///
/// V7Generator::new(rand::rngs::OsRng)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore> Iterator for V7Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for V7Generator<R> {}

fn unix_ts_ms_now() -> u64 {
    time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_millis() as u64
}

fn try_next_u64(rng: &mut impl RngCore) -> Result<u64, GenerateError> {
    let mut buffer = [0u8; 8];
    rng.try_fill_bytes(&mut buffer)?;
    Ok(u64::from_be_bytes(buffer))
}

fn try_next_u32(rng: &mut impl RngCore) -> Result<u32, GenerateError> {
    let mut buffer = [0u8; 4];
    rng.try_fill_bytes(&mut buffer)?;
    Ok(u32::from_be_bytes(buffer))
}
