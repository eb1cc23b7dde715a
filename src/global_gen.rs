//! Default generator and entry point functions.

use std::sync;

use crate::{GenerateError, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuidgen: could not lock global generator")
}

/// Generates a UUIDv7 object.
///
/// This function employs a global generator and guarantees the process-wide monotonic order of
/// UUIDs generated within the same millisecond. On Unix, this function resets the generator when
/// the process ID changes (i.e., upon process forks) to prevent collisions across processes.
///
/// # Panics
///
/// Aborts if the operating system entropy source is unavailable when the global generator is
/// seeded; no identifier is produced from a weaker source. Use [`try_uuid7`] after the first
/// successful call to observe later failures as errors.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::uuid7();
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidgen::uuid7().to_string();
/// ```
pub fn uuid7() -> Uuid {
    lock_global_gen().get_mut().generate()
}

/// Generates a UUIDv7 object, reporting a failure of the random number source as an error.
///
/// Apart from the error path, this function behaves like [`uuid7`] and draws from the same
/// global generator, so identifiers from the two entry points share one monotonic order.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::try_uuid7()?;
/// assert_eq!(uuid.version(), Some(7));
/// # Ok::<(), uuidgen::GenerateError>(())
/// ```
pub fn try_uuid7() -> Result<Uuid, GenerateError> {
    lock_global_gen().get_mut().try_generate()
}

mod inner {
    use rand::rngs::adapter::ReseedingRng;
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::v7::V7Generator;

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator employs [`ChaCha12Core`] with the [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub type GlobalGenRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// Reseeding threshold of the global generator (bytes), as used by `ThreadRng`.
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V7Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let prng = ChaCha12Core::from_rng(OsRng)
                .expect("uuidgen: could not initialize global generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V7Generator::new(ReseedingRng::new(prng, RESEED_THRESHOLD, OsRng)),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V7Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V7Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{try_uuid7, uuid7};
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid7().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Generates sortable string representation by creation time
    #[test]
    fn generates_sortable_string_representation_by_creation_time() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                assert!(samples[i - 1] < samples[i]);
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis()) as i64;
            let mut timestamp = 0i64;
            for e in uuid7().as_bytes().iter().take(6) {
                timestamp = timestamp * 256 + *e as i64;
            }
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Encodes unique sortable pair of timestamp and counter
    #[test]
    fn encodes_unique_sortable_pair_of_timestamp_and_counter() {
        SAMPLES.with(|samples| {
            let mut prev_timestamp = &samples[0][0..13];
            let mut prev_counter = &samples[0][15..28];
            for e in &samples[1..] {
                let curr_timestamp = &e[0..13];
                let curr_counter = &e[15..28];
                assert!(
                    prev_timestamp < curr_timestamp
                        || (prev_timestamp == curr_timestamp && prev_counter < curr_counter)
                );
                prev_timestamp = curr_timestamp;
                prev_counter = curr_counter;
            }
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in 96..128 {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid7();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(7));
        }
    }

    /// Shares one monotonic order between the entry points
    #[test]
    fn shares_one_monotonic_order_between_the_entry_points() {
        let mut prev = uuid7();
        for i in 0..10_000 {
            let curr = if i % 2 == 0 { try_uuid7().unwrap() } else { uuid7() };
            assert!(prev < curr);
            prev = curr;
        }
    }

    /// Generates no IDs sharing same timestamp and counters under multithreading
    #[test]
    fn generates_no_ids_sharing_same_timestamp_and_counters_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(uuid7()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(<[u8; 12]>::try_from(&e.as_bytes()[..12]).unwrap());
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
